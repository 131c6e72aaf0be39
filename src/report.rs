//! Plain-text report rendering for the command line.
//!
//! Amounts are shown in USD with cents; everything else is printed as the
//! engine produced it.

use rust_decimal::Decimal;

use crate::models::{MissedShiftReport, PayoutReport};

/// Formats an amount as USD, e.g. `$1,234.56` or `-$5.00`.
///
/// Rounds half to even at the cent.
///
/// # Example
///
/// ```
/// use timesheet_audit::report::format_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_usd(Decimal::new(123456, 2)), "$1,234.56");
/// assert_eq!(format_usd(Decimal::new(-5, 0)), "-$5.00");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{:0<2}", sign, grouped, fraction)
}

/// Renders the payout report as a right-aligned table followed by a
/// `Total` row.
pub fn render_payout_report(report: &PayoutReport) -> String {
    let header = [
        "Employee",
        "TotalAmountOwed",
        "ShiftsThatWereOwed",
        "AverageOwedPerShift",
    ];

    let mut rows: Vec<[String; 4]> = report
        .summaries
        .iter()
        .map(|s| {
            [
                s.employee.clone(),
                format_usd(s.total_owed),
                s.shift_count.to_string(),
                format_usd(s.average_owed),
            ]
        })
        .collect();
    rows.push([
        "Total".to_string(),
        format_usd(report.totals.amount),
        report.totals.shifts.to_string(),
        format_usd(report.totals.average),
    ]);

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![
        "--- Employee Payout Report ---".to_string(),
        String::new(),
        format_row(header),
    ];
    for row in &rows {
        lines.push(format_row([&row[0], &row[1], &row[2], &row[3]]));
    }
    lines.push(String::new());
    lines.push("Calculation complete.".to_string());
    lines.join("\n")
}

/// Renders the missed-shift report grouped by employee.
pub fn render_missed_shift_report(report: &MissedShiftReport) -> String {
    if report.is_clean() {
        return "All scheduled shifts appear to have a corresponding timesheet entry.".to_string();
    }

    let mut lines = vec!["--- Missed Shifts ---".to_string(), String::new()];
    for group in &report.employees {
        lines.push(format!("Employee: {}", group.employee));
        for shift in &group.shifts {
            match (&shift.start, &shift.end) {
                (Some(start), Some(end)) => lines.push(format!(
                    "  - {} — {} (Scheduled: {} - {})",
                    shift.date, shift.location, start, end
                )),
                _ => lines.push(format!("  - {} — {}", shift.date, shift.location)),
            }
        }
        lines.push("-".repeat(30));
    }
    lines.push(format!(
        "Found a total of {} missed shifts across {} employee(s).",
        report.missed_count,
        report.employees.len()
    ));
    lines.join("\n")
}

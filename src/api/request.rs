//! Request types for the timesheet audit API.
//!
//! Reports are requested by uploading CSV files as `multipart/form-data`.
//! This module collects the parts of such a form and checks that the
//! expected file fields are present.

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::Deserialize;

use crate::engine::{SortOrder, SummarySortKey};
use crate::error::{AuditError, AuditResult};
use crate::ingest::parse_csv_bytes;
use crate::models::RawRecord;

use super::response::ApiError;

/// An uploaded file part.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// The client-supplied filename.
    pub file_name: String,
    /// The raw file contents.
    pub bytes: Vec<u8>,
}

/// The parts of a multipart upload form.
///
/// Parts with a filename are files; the rest are text fields, which may
/// repeat.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    files: HashMap<String, UploadedFile>,
    fields: Vec<(String, String)>,
}

impl UploadForm {
    /// Reads every part of a multipart body.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::malformed_upload(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            match file_name {
                Some(file_name) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::malformed_upload(e.body_text()))?;
                    form.add_file(name, file_name, bytes.to_vec());
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| ApiError::malformed_upload(e.body_text()))?;
                    form.add_field(name, text);
                }
            }
        }
        Ok(form)
    }

    /// Adds a file part. A repeated field name keeps the first file.
    pub fn add_file(&mut self, name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.files.entry(name.into()).or_insert(UploadedFile {
            file_name: file_name.into(),
            bytes,
        });
    }

    /// Adds a text part.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Returns a required file part.
    ///
    /// Fails with [`AuditError::MissingUpload`] when the field is absent or
    /// not a file, and [`AuditError::EmptyFilename`] when its filename is
    /// blank.
    pub fn require_file(&self, name: &str) -> AuditResult<&UploadedFile> {
        let file = self.files.get(name).ok_or_else(|| AuditError::MissingUpload {
            field: name.to_string(),
        })?;
        if file.file_name.is_empty() {
            return Err(AuditError::EmptyFilename {
                field: name.to_string(),
            });
        }
        Ok(file)
    }

    /// Parses a required file part as CSV.
    pub fn require_csv(&self, name: &str) -> AuditResult<Vec<RawRecord>> {
        let file = self.require_file(name)?;
        parse_csv_bytes(&file.bytes, name)
    }

    /// Returns every value of a repeated text field, trimmed, skipping
    /// blanks.
    pub fn field_values(&self, name: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }
}

/// Query parameters accepted by the payout endpoint.
///
/// `sort`/`order` only reorder the computed summary rows.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PayoutQuery {
    /// The summary column to order by.
    #[serde(default)]
    pub sort: SummarySortKey,
    /// The sort direction.
    #[serde(default)]
    pub order: SortOrder,
}

// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{ConnectorError, Result};

pub struct Validator;

impl Validator {
    /// The ioc_type reaches the URL path and the member name verbatim, so
    /// only an empty value is rejected here.
    pub fn validate_ioc_type(ioc_type: &str) -> Result<()> {
        if ioc_type.trim().is_empty() {
            return Err(ConnectorError::Validation(
                "ioc_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConnectorError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_records_limit(limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(ConnectorError::Validation(
                "records limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            text.to_string()
        } else {
            format!("{}...", &text[..max_length])
        }
    }
}

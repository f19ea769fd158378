//! Error kinds of the stock view.
//!
//! Remote failures (`FetchError`, `SubmitError`, `DeleteError`) are returned
//! as values from the store boundary; the page turns them into notices and
//! keeps the previous state. `IndexError` means the selection and the list
//! went out of step and is never shown to the user.

use thiserror::Error;

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Vendor,
    Product,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Vendor => "vendor",
            FormField::Product => "product",
        }
    }
}

/// Field-level validation failure, raised before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    pub fn required(field: FormField) -> Self {
        let message = match field {
            FormField::Vendor => "Vendor is required",
            FormField::Product => "Product is required",
        };
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Network or server failure while loading a list or a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Create/update rejected, either locally by validation or by the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form is invalid: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Bulk delete rejected by the service, or nothing to delete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("nothing selected")]
    NothingSelected,
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error(transparent)]
    Desync(#[from] IndexError),
}

/// Selection flags and list rows are no longer aligned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("row index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("selection tracks {tracked} rows, list has {listed}")]
    Misaligned { tracked: usize, listed: usize },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_joined() {
        let err = SubmitError::Validation(vec![
            ValidationError::required(FormField::Vendor),
            ValidationError::required(FormField::Product),
        ]);
        assert_eq!(
            err.to_string(),
            "form is invalid: Vendor is required, Product is required"
        );
    }
}

use thiserror::Error;

/// Reasons the row editor refuses to add a draft to the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowEditorError {
    #[error("The add-currency dialog is not open")]
    ModalClosed,

    #[error("No currency code entered")]
    MissingCurrency,

    #[error("No rate available for {0}")]
    MissingRate(String),

    #[error("Invalid rate for {code}: {reason}")]
    InvalidRate { code: String, reason: String },
}

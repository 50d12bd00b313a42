//! Errors raised while configuring or invoking value generators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid date component: {0}")]
    DateComponent(#[from] time::error::ComponentRange),

    #[error("Date formatting failed: {0}")]
    DateFormat(#[from] time::error::Format),

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Coordinate {0} is not a finite decimal")]
    Coordinate(f64),

    #[error("Decimal {0} is not representable as a float")]
    Decimal(rust_decimal::Decimal),
}

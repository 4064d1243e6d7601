use thiserror::Error;

/// Raised when raw input cannot become a valid domain value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be an integer (got {value})")]
    NotInteger { field: &'static str, value: f64 },
    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        min: i64,
        value: i64,
    },
    #[error("{field} must be at most {max} (got {value})")]
    AboveMaximum {
        field: &'static str,
        max: i64,
        value: i64,
    },
    #[error("Product name is required")]
    EmptyName,
    #[error("Product name must be at most {max} characters (got {len})")]
    NameTooLong { len: usize, max: usize },
    #[error("Usage period must be at least 1 month")]
    PeriodTooShort,
    #[error("Usage period must be at most 100 years")]
    PeriodTooLong,
    #[error("Years must not be negative (got {0})")]
    NegativeYears(i64),
    #[error("Months must be between 0 and 11 (got {0})")]
    MonthsOutOfRange(i64),
    #[error("Usage period must be a finite number of years (got {0})")]
    InvalidPeriod(f64),
}

/// Raised when an operation on valid values would produce an invalid one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Subtracting {subtrahend} from {minuend} would be negative")]
    InsufficientValue { minuend: u64, subtrahend: u64 },
}

/// Raised for out-of-range positions in an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Index must be 0 or greater (got {0})")]
    Negative(isize),
    #[error("No product at index {index} (have {len})")]
    NotFound { index: usize, len: usize },
}

/// Any failure raised by the amortization domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

pub type CostResult<T> = Result<T, CostError>;

use std::fmt;

/// Which scalar input a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    CurrentSales,
    CurrentUnits,
    Elasticity,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::CurrentSales => write!(f, "current sales"),
            InputField::CurrentUnits => write!(f, "current units"),
            InputField::Elasticity => write!(f, "elasticity"),
        }
    }
}

/// Errors raised when the pricing inputs cannot produce a scenario table
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Current price is sales / units, so units must be non-zero
    ZeroUnits,
    NonFiniteInput { field: InputField, value: f64 },
    InvertedRange { lo: i32, hi: i32 },
    /// Finite inputs whose projection overflows at this price change
    NonFiniteResult { pct: i32 },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::ZeroUnits => {
                write!(f, "current units must be non-zero to derive a unit price")
            }
            SimulationError::NonFiniteInput { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
            SimulationError::InvertedRange { lo, hi } => {
                write!(f, "price change range is inverted ({lo}% > {hi}%)")
            }
            SimulationError::NonFiniteResult { pct } => {
                write!(f, "projection overflows at {pct:+}% price change")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Errors raised while decoding an exported scenario CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    MissingHeader,
    HeaderMismatch {
        found: String,
    },
    FieldCount {
        line: usize,
        found: usize,
    },
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::MissingHeader => write!(f, "csv input is empty, expected a header row"),
            CsvError::HeaderMismatch { found } => {
                write!(f, "unexpected csv header: {found:?}")
            }
            CsvError::FieldCount { line, found } => {
                write!(f, "line {line}: expected 5 fields, found {found}")
            }
            CsvError::InvalidField {
                line,
                column,
                value,
            } => write!(f, "line {line}: cannot parse {column} from {value:?}"),
        }
    }
}

impl std::error::Error for CsvError {}

pub type Result<T> = std::result::Result<T, SimulationError>;

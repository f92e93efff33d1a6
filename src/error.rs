use std::fmt;

/// Error type shared by every module of the toolkit. Each variant maps to
/// one class of precondition violation; the engine never recovers from any
/// of them internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlatError {
    ShapeError(String),
    RangeError(String),
    DivideByZero(String),
    NotInvertible(String),
    IndexOutOfBounds(String),
    InvalidArgument(String),
}

impl fmt::Display for AlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlatError::ShapeError(msg) => write!(f, "Shape Error: {}", msg),
            AlatError::RangeError(msg) => write!(f, "Range Error: {}", msg),
            AlatError::DivideByZero(msg) => write!(f, "Divide By Zero: {}", msg),
            AlatError::NotInvertible(msg) => write!(f, "Not Invertible: {}", msg),
            AlatError::IndexOutOfBounds(msg) => write!(f, "Index Out Of Bounds: {}", msg),
            AlatError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
        }
    }
}

impl std::error::Error for AlatError {}

impl AlatError {
    pub fn shape(message: &str) -> Self { AlatError::ShapeError(message.to_string()) }
    pub fn range(message: &str) -> Self { AlatError::RangeError(message.to_string()) }
    pub fn divide_by_zero(message: &str) -> Self { AlatError::DivideByZero(message.to_string()) }
    pub fn not_invertible(message: &str) -> Self { AlatError::NotInvertible(message.to_string()) }
    pub fn index_out_of_bounds(message: &str) -> Self { AlatError::IndexOutOfBounds(message.to_string()) }
    pub fn invalid_argument(message: &str) -> Self { AlatError::InvalidArgument(message.to_string()) }
}

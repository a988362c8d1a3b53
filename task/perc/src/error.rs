use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: usize },
    #[error("site ({row}, {col}) is out of bounds for a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

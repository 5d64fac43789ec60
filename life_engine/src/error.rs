// error.rs - Errors raised while turning launch parameters into a board

use thiserror::Error;

/// Launch parameters that parsed but cannot describe a board.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be positive, got {value}")]
    ZeroDimension { name: &'static str, value: i64 },
    #[error("a {length}x{width} board has more cells than can be addressed")]
    TooManyCells { length: usize, width: usize },
    #[error("density {0} must be between 0.0 and 1.0")]
    DensityOutOfRange(f64),
    #[error("density must be a finite number")]
    DensityNotFinite,
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

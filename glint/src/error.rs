use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Non-finite coordinate, degenerate rectangle, zero-length direction or unusable ray step.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;

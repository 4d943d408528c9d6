use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("invalid parameter `{name}`: {value} (must be positive)")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl GeomError {
    /// Rejects anything that is not strictly positive, NaN included.
    pub fn require_positive(name: &'static str, value: f64) -> Result<f64, Self> {
        if value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }
}

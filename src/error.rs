use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// The interrupt flag was raised while a batch was in flight.
    #[error("batch interrupted")]
    Interrupted,

    #[error("invalid value `{value}` for option `{name}`")]
    InvalidOption { name: &'static str, value: String },
}

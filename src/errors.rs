use thiserror::Error;

/// The reason of mimic joint error
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("size mismatch input = {input}, required = {required}")]
    SizeMismatchError { input: usize, required: usize },
    #[error("mimic parameters must be finite: scaling = {scaling}, offset = {offset}")]
    NonFiniteMimicError { scaling: f64, offset: f64 },
    #[error(
        "joint {joint_type} uses unit-circle configuration and does not accept scaling {scaling}"
    )]
    UnsupportedScalingError { joint_type: String, scaling: f64 },
}

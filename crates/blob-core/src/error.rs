use thiserror::Error;

/// Mesh construction failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    #[error("sphere radius must be positive and finite, got {0}")]
    ZeroRadius(f32),
    #[error("subdivision detail {detail} exceeds the supported maximum of {max}")]
    DetailTooLarge { detail: u32, max: u32 },
}

/// Contact form outcomes that surface as an error toast.
///
/// The `Display` text is shown to the visitor verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Failed to send message. Please try again.")]
    Transport(String),
}

//! Error types for building a world.
//!
//! Gameplay never fails: bad input is answered with a message. Only turning a
//! world definition into a [`World`](crate::world::World) can go wrong.

use thiserror::Error;

use crate::world::ValidationError;

/// Failure to load a world definition.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The definition is not valid TOML or does not match the expected shape.
    #[error("failed to parse world definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// The definition parsed but is structurally broken.
    #[error("invalid world definition: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! Errors raised by the name registry.

use thiserror::Error;

/// Errors from validating, registering or generating names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// A supplied name contains a character outside the allowed set.
    #[error("the character `{character}` is not allowed as `name` (in {name:?})")]
    InvalidCharacter { name: String, character: char },

    /// A supplied name is too short or too long.
    #[error("name {name:?} has {length} characters, expected between 2 and 32")]
    InvalidLength { name: String, length: usize },

    /// The name is already allocated in the registry scope.
    #[error("name `{0}` has already been allocated")]
    DuplicateName(String),

    /// No unused name of the requested length is left.
    #[error("no unused name of length {length} is left")]
    RegistryExhausted { length: usize },
}

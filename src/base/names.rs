//! Short unique names for survey entities.
//!
//! Every named entity of a survey (the survey itself and each shot) carries a
//! short name that must be unique within its [`NameRegistry`] scope. Names are
//! either supplied by the document or generated from [`NameRegistry::VOCAB`].
//!
//! A registry is an explicit value rather than process-wide state: each survey
//! decode owns one, so independent conversions never see each other's names.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::Serialize;

use super::NameError;

/// Registry of names issued within one scope.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    issued: HashSet<String>,
}

impl NameRegistry {
    /// Alphabet used by [`NameRegistry::generate`].
    pub const VOCAB: &'static str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Characters allowed in supplied names besides [`NameRegistry::VOCAB`].
    pub const ALLOWED_PUNCTUATION: &'static str = "#-_@!~%&*[]{}()|: ";

    pub const DEFAULT_NAME_LENGTH: usize = 6;
    pub const MIN_NAME_LENGTH: usize = 2;
    pub const MAX_NAME_LENGTH: usize = 32;

    pub fn new() -> Self {
        Self::default()
    }

    /// Open an isolated scope with no names issued.
    pub fn new_scope() -> Self {
        Self::default()
    }

    /// Generate a name of `length` characters that was never issued in this scope.
    pub fn generate(&mut self, length: usize) -> Result<String, NameError> {
        let vocab = Self::VOCAB.as_bytes();

        let capacity = u32::try_from(length)
            .ok()
            .and_then(|exp| vocab.len().checked_pow(exp))
            .unwrap_or(usize::MAX);
        let taken = self
            .issued
            .iter()
            .filter(|name| name.len() == length)
            .count();
        if length == 0 || taken >= capacity {
            return Err(NameError::RegistryExhausted { length });
        }

        let mut rng = rand::thread_rng();
        loop {
            let candidate: String = (0..length)
                .map(|_| vocab[rng.gen_range(0..vocab.len())] as char)
                .collect();
            if self.issued.insert(candidate.clone()) {
                tracing::trace!(name = %candidate, "generated unique name");
                return Ok(candidate);
            }
        }
    }

    /// Record a supplied name.
    ///
    /// The name is checked with [`NameRegistry::validate`] first. Registering a
    /// name that is already issued in this scope fails with
    /// [`NameError::DuplicateName`].
    pub fn register(&mut self, name: &str) -> Result<(), NameError> {
        Self::validate(name)?;
        if !self.issued.insert(name.to_string()) {
            return Err(NameError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Check length and alphabet of a supplied name without registering it.
    ///
    /// Letters are compared case-insensitively against the vocabulary.
    pub fn validate(name: &str) -> Result<(), NameError> {
        if let Some(character) = name.chars().find(|c| !Self::is_allowed(*c)) {
            return Err(NameError::InvalidCharacter {
                name: name.to_string(),
                character,
            });
        }

        let length = name.chars().count();
        if !(Self::MIN_NAME_LENGTH..=Self::MAX_NAME_LENGTH).contains(&length) {
            return Err(NameError::InvalidLength {
                name: name.to_string(),
                length,
            });
        }
        Ok(())
    }

    fn is_allowed(c: char) -> bool {
        let upper = c.to_ascii_uppercase();
        Self::VOCAB.contains(upper) || Self::ALLOWED_PUNCTUATION.contains(c)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.issued.contains(name)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Forget every issued name.
    pub fn reset(&mut self) {
        self.issued.clear();
    }
}

/// A name that was validated and recorded in a [`NameRegistry`].
///
/// The only ways to obtain one go through a registry, so holding a `Name`
/// means it is unique within the scope that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Register a supplied name, or generate a fresh one when `value` is empty.
    pub fn new(value: &str, registry: &mut NameRegistry) -> Result<Self, NameError> {
        if value.is_empty() {
            return Self::generate(registry);
        }
        registry.register(value)?;
        Ok(Self(value.to_string()))
    }

    /// Generate a fresh name of [`NameRegistry::DEFAULT_NAME_LENGTH`] characters.
    pub fn generate(registry: &mut NameRegistry) -> Result<Self, NameError> {
        registry
            .generate(NameRegistry::DEFAULT_NAME_LENGTH)
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

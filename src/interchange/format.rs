//! Common trait for Ariane container formats.

use super::InterchangeError;

/// Capabilities supported by a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCapability {
    /// Can extract the XML payload.
    pub read: bool,
    /// Can package an XML payload.
    pub write: bool,
}

impl FormatCapability {
    /// Full capability (read, write).
    pub const FULL: Self = Self {
        read: true,
        write: true,
    };

    /// Read-only capability.
    pub const READ_ONLY: Self = Self {
        read: true,
        write: false,
    };
}

/// Trait for the on-disk containers holding an Ariane XML payload.
///
/// Implementations convert between the raw file bytes and the XML payload
/// bytes. Parsing the payload is the job of [`super::xml`].
pub trait ContainerFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// Capabilities of this format implementation.
    fn capabilities(&self) -> FormatCapability;

    /// Extract the XML payload from the raw file bytes.
    fn extract(&self, input: &[u8]) -> Result<Vec<u8>, InterchangeError>;

    /// Package an XML payload into the raw file bytes.
    fn pack(&self, xml: &[u8]) -> Result<Vec<u8>, InterchangeError>;

    /// Validate that the input looks like this format.
    ///
    /// This is a quick check that doesn't fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let _ = input;
        Ok(())
    }
}

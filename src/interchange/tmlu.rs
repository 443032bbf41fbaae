//! TMLU format support.
//!
//! TMLU is the bare XML flavour of an Ariane survey. It can be read but this
//! crate never writes it: exports always go to TML.

use super::{ContainerFormat, FormatCapability, InterchangeError};

/// TMLU format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tmlu;

impl ContainerFormat for Tmlu {
    fn name(&self) -> &'static str {
        "TMLU"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["tmlu"]
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::READ_ONLY
    }

    fn extract(&self, input: &[u8]) -> Result<Vec<u8>, InterchangeError> {
        Ok(input.to_vec())
    }

    fn pack(&self, _xml: &[u8]) -> Result<Vec<u8>, InterchangeError> {
        Err(InterchangeError::unsupported(
            "Unsupported fileformat: `TMLU`. Expected: `TML`",
        ))
    }

    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let content = input.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(input);
        match content.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'<') => Ok(()),
            _ => Err(InterchangeError::xml("Missing XML root element")),
        }
    }
}

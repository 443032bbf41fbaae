//! TML format support.
//!
//! TML is the archive flavour of an Ariane survey: a ZIP file whose only
//! relevant member is the XML payload.
//!
//! ```text
//! survey.tml (ZIP archive)
//! └── Data.xml        # <CaveFile>...</CaveFile>
//! ```

use std::io::{Cursor, Read, Write};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::{ContainerFormat, FormatCapability, InterchangeError};

/// Name of the archive member holding the XML payload.
pub const PAYLOAD_ENTRY: &str = "Data.xml";

/// TML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tml;

impl ContainerFormat for Tml {
    fn name(&self) -> &'static str {
        "TML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["tml"]
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::FULL
    }

    fn extract(&self, input: &[u8]) -> Result<Vec<u8>, InterchangeError> {
        let mut archive = ZipArchive::new(Cursor::new(input))
            .map_err(|e| InterchangeError::archive(format!("Failed to open archive: {e}")))?;

        let mut entry = archive.by_name(PAYLOAD_ENTRY).map_err(|e| match e {
            ZipError::FileNotFound => {
                InterchangeError::archive(format!("Archive has no `{PAYLOAD_ENTRY}` entry"))
            }
            other => InterchangeError::archive(format!("Failed to read {PAYLOAD_ENTRY}: {other}")),
        })?;

        let mut payload = Vec::new();
        entry
            .read_to_end(&mut payload)
            .map_err(|e| InterchangeError::archive(format!("Failed to read {PAYLOAD_ENTRY}: {e}")))?;

        Ok(payload)
    }

    fn pack(&self, xml: &[u8]) -> Result<Vec<u8>, InterchangeError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        zip.start_file(PAYLOAD_ENTRY, options).map_err(|e| {
            InterchangeError::archive(format!("Failed to create {PAYLOAD_ENTRY}: {e}"))
        })?;
        zip.write_all(xml)
            .map_err(|e| InterchangeError::archive(format!("Failed to write {PAYLOAD_ENTRY}: {e}")))?;

        let buffer = zip
            .finish()
            .map_err(|e| InterchangeError::archive(format!("Failed to finalize archive: {e}")))?;

        Ok(buffer.into_inner())
    }

    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        if input.len() < 4 {
            return Err(InterchangeError::archive("File too small"));
        }

        // ZIP files start with PK\x03\x04 (PK\x05\x06 when empty)
        if &input[0..4] != b"PK\x03\x04" && &input[0..4] != b"PK\x05\x06" {
            return Err(InterchangeError::archive("Not a valid ZIP archive"));
        }

        Ok(())
    }
}

//! Options for reading and writing Ariane files

use std::path::{Path, PathBuf};

/// Default location of the diagnostic payload dump.
pub const DEFAULT_DEBUG_DUMP: &str = "Data.xml";

/// Options for Ariane file operations
#[derive(Debug, Clone)]
pub struct ArianeOptions {
    /// Dump the XML payload to `debug_dump` on every read and write
    pub debug: bool,
    /// Where the payload is dumped in debug mode (relative paths resolve
    /// against the current working directory)
    pub debug_dump: PathBuf,
}

impl Default for ArianeOptions {
    fn default() -> Self {
        Self {
            debug: false,
            debug_dump: PathBuf::from(DEFAULT_DEBUG_DUMP),
        }
    }
}

impl ArianeOptions {
    /// Options with debug mode switched on
    pub fn debug() -> Self {
        Self::default().with_debug(true)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_debug_dump(mut self, path: impl AsRef<Path>) -> Self {
        self.debug_dump = path.as_ref().to_path_buf();
        self
    }
}

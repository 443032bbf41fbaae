//! Ariane file types and detection from the path extension.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::{ContainerFormat, InterchangeError, Tml, Tmlu};

/// On-disk flavour of an Ariane survey file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArianeFileType {
    /// ZIP archive holding `Data.xml`.
    Tml,
    /// Bare XML file.
    Tmlu,
}

impl ArianeFileType {
    pub const ALL: [Self; 2] = [Self::Tml, Self::Tmlu];

    /// Detect the file type from the extension of `path`, case-insensitively.
    ///
    /// An unknown or missing extension fails with
    /// [`InterchangeError::UnknownFormat`] carrying the uppercased token.
    pub fn from_path(path: &Path) -> Result<Self, InterchangeError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        ext.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tml => "TML",
            Self::Tmlu => "TMLU",
        }
    }

    /// The container handler for this file type.
    pub fn container(&self) -> Box<dyn ContainerFormat> {
        match self {
            Self::Tml => Box::new(Tml),
            Self::Tmlu => Box::new(Tmlu),
        }
    }
}

impl FromStr for ArianeFileType {
    type Err = InterchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.to_uppercase();
        match token.as_str() {
            "TML" => Ok(Self::Tml),
            "TMLU" => Ok(Self::Tmlu),
            _ => Err(InterchangeError::UnknownFormat(token)),
        }
    }
}

impl fmt::Display for ArianeFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

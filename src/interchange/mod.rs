//! Ariane file interchange.
//!
//! Ariane stores a cave survey as one XML payload rooted at `CaveFile`,
//! shipped in one of two containers:
//!
//! - **TML** - ZIP archive holding a `Data.xml` member (read + write)
//! - **TMLU** - the bare XML file (read only)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │   TML File   │     │  TMLU File   │
//! └──────┬───────┘     └──────┬───────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                ContainerFormat trait                      │
//! │  - extract(&[u8]) -> Result<Vec<u8>>   (XML payload)     │
//! │  - pack(&[u8]) -> Result<Vec<u8>>      (file bytes)      │
//! └──────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                xml::parse / xml::render                  │
//! │  - Tree: IndexMap<String, Node> (document order)         │
//! └──────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   crate::model (typed Survey)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use openspeleo::interchange::{ArianeOptions, read_tree};
//!
//! let body = read_tree(Path::new("survey.tml"), &ArianeOptions::default())?;
//! assert!(body.contains_key("Data"));
//! ```

pub mod ariane;
mod error;
mod file_type;
mod format;
mod options;
mod tml;
mod tmlu;
pub mod tree;
pub mod xml;

pub use ariane::{ROOT_ELEMENT, read_payload, read_tree, write_payload, write_tree};
pub use error::InterchangeError;
pub use file_type::ArianeFileType;
pub use format::{ContainerFormat, FormatCapability};
pub use options::{ArianeOptions, DEFAULT_DEBUG_DUMP};
pub use tml::{PAYLOAD_ENTRY, Tml};
pub use tmlu::Tmlu;
pub use tree::{Node, Tree};

/// Supported file extensions for Ariane files.
pub fn supported_extensions() -> &'static [&'static str] {
    &["tml", "tmlu"]
}

/// Detect the container format from a file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn ContainerFormat>> {
    ArianeFileType::from_path(path)
        .ok()
        .map(|file_type| file_type.container())
}

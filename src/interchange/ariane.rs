//! File-level Ariane pipeline.
//!
//! ```text
//! path ──► ArianeFileType ──► ContainerFormat::extract ──► xml::parse ──► Tree (CaveFile body)
//! Tree ──► xml::render_root ──► ContainerFormat::pack ──► temp file ──► rename onto path
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::tree::{Node, Tree};
use super::{ArianeFileType, ArianeOptions, InterchangeError, xml};

/// Root element of every Ariane payload.
pub const ROOT_ELEMENT: &str = "CaveFile";

/// Read the XML payload of an Ariane file.
///
/// In debug mode the payload is also dumped to [`ArianeOptions::debug_dump`].
pub fn read_payload(path: &Path, options: &ArianeOptions) -> Result<Vec<u8>, InterchangeError> {
    if !path.exists() {
        return Err(InterchangeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file_type = ArianeFileType::from_path(path)?;
    tracing::debug!(path = %path.display(), format = %file_type, "loading Ariane file");

    let raw = fs::read(path)?;
    let container = file_type.container();
    container.validate(&raw)?;
    let payload = container.extract(&raw)?;

    if options.debug {
        dump_payload(&options.debug_dump, &payload);
    }

    Ok(payload)
}

/// Package an XML payload and write it to `path`.
///
/// Only TML is a valid target. The archive is written next to `path` first
/// and renamed onto it, so a failed write leaves any existing file intact.
pub fn write_payload(
    payload: &[u8],
    path: &Path,
    options: &ArianeOptions,
) -> Result<(), InterchangeError> {
    let file_type = ArianeFileType::from_path(path)?;
    let container = file_type.container();
    if !container.capabilities().write {
        return Err(InterchangeError::unsupported(format!(
            "Unsupported fileformat: `{file_type}`. Expected: `{}`",
            ArianeFileType::Tml
        )));
    }

    if options.debug {
        dump_payload(&options.debug_dump, payload);
    }

    let bytes = container.pack(payload)?;
    tracing::debug!(path = %path.display(), format = %file_type, size = bytes.len(), "exporting Ariane file");

    replace_file(path, &bytes)?;
    Ok(())
}

/// Read an Ariane file and return the body of its `CaveFile` root.
pub fn read_tree(path: &Path, options: &ArianeOptions) -> Result<Tree, InterchangeError> {
    let payload = read_payload(path, options)?;
    cave_file_body(xml::parse(&payload)?)
}

/// Write `body` as the `CaveFile` root of an Ariane file.
pub fn write_tree(body: &Tree, path: &Path, options: &ArianeOptions) -> Result<(), InterchangeError> {
    // fail on the target format before rendering anything
    ArianeFileType::from_path(path)?;
    let payload = render_body(body)?;
    write_payload(&payload, path, options)
}

/// Render `body` as a complete `CaveFile` XML document.
pub fn render_body(body: &Tree) -> Result<Vec<u8>, InterchangeError> {
    xml::render_root(ROOT_ELEMENT, &Node::Map(body.clone()))
}

/// Unwrap the `CaveFile` root of a parsed document.
pub fn cave_file_body(mut document: Tree) -> Result<Tree, InterchangeError> {
    match document.remove(ROOT_ELEMENT) {
        Some(Node::Map(body)) => Ok(body),
        Some(Node::Null) => Ok(Tree::new()),
        Some(other) => Err(InterchangeError::xml(format!(
            "`{ROOT_ELEMENT}` must hold elements, found {}",
            other.kind()
        ))),
        None => Err(InterchangeError::xml(format!(
            "Expected root element `{ROOT_ELEMENT}`, found `{}`",
            document.keys().next().unwrap_or_default()
        ))),
    }
}

/// Write `bytes` to a staging file next to `path`, then rename it onto `path`.
/// The staging file never outlives a failed attempt.
fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let staging = staging_path(path);
    let result = fs::write(&staging, bytes).and_then(|()| fs::rename(&staging, path));
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.partial"))
}

fn dump_payload(target: &Path, payload: &[u8]) {
    match fs::write(target, payload) {
        Ok(()) => tracing::debug!(path = %target.display(), "dumped XML payload"),
        Err(e) => tracing::warn!(path = %target.display(), error = %e, "failed to dump XML payload"),
    }
}

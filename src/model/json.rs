//! Pretty JSON dumps of model entities.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const JSON_INDENT: &[u8] = b"    ";

/// Serialize `value` as JSON with sorted keys and 4-space indentation.
pub fn to_sorted_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    // `Value` objects are BTreeMaps, so going through one sorts every level
    let value = serde_json::to_value(value)?;

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

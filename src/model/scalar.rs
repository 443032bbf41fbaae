//! Text coercion for typed fields.
//!
//! Every leaf of an Ariane tree is a string. Each field type declares one
//! parse/render pair here, and the records in this module tree only name the
//! type of a field, never how it is converted:
//!
//! | Type        | Parse                               | Render                   |
//! |-------------|-------------------------------------|--------------------------|
//! | `f64`       | decimal or scientific, trimmed      | shortest repr, see below |
//! | `i64`       | decimal integer, trimmed            | decimal                  |
//! | `bool`      | `true`/`1`/`yes` (any case), else false | `true` / `false`     |
//! | `NaiveDate` | `YYYY-MM-DD`                        | `YYYY-MM-DD`             |
//! | `Uuid`      | hyphenated UUID, version 4 only     | lowercase hyphenated     |
//! | `String`    | verbatim                            | verbatim                 |
//!
//! Floats render the way Ariane exports them: the shortest digits that read
//! back to the same value, always with a fractional part (`12.5`, `0.0`,
//! `100.0`), switching to exponent form below `1e-4` or from `1e16` upward
//! (`1e-05`, `1.5e+16`).

use chrono::NaiveDate;
use uuid::Uuid;

/// Date layout used by Ariane files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A field type with a canonical text form.
pub trait Scalar: Sized {
    /// Name of the type, for error messages.
    const KIND: &'static str;

    /// Parse the text form. The error is a short human-readable reason.
    fn parse_text(text: &str) -> Result<Self, String>;

    /// Render the canonical text form.
    fn render_text(&self) -> String;
}

impl Scalar for f64 {
    const KIND: &'static str = "float";

    fn parse_text(text: &str) -> Result<Self, String> {
        text.trim()
            .parse::<f64>()
            .map_err(|e| format!("expected a float: {e}"))
    }

    fn render_text(&self) -> String {
        format_float(*self)
    }
}

impl Scalar for i64 {
    const KIND: &'static str = "integer";

    fn parse_text(text: &str) -> Result<Self, String> {
        text.trim()
            .parse::<i64>()
            .map_err(|e| format!("expected an integer: {e}"))
    }

    fn render_text(&self) -> String {
        self.to_string()
    }
}

impl Scalar for bool {
    const KIND: &'static str = "boolean";

    fn parse_text(text: &str) -> Result<Self, String> {
        Ok(parse_bool(text))
    }

    fn render_text(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

impl Scalar for NaiveDate {
    const KIND: &'static str = "date";

    /// Only the zero-padded layout is accepted: the text must equal its own
    /// rendering.
    fn parse_text(text: &str) -> Result<Self, String> {
        let text = text.trim();
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|e| format!("expected a YYYY-MM-DD date: {e}"))?;
        if date.render_text() != text {
            return Err("expected a zero-padded YYYY-MM-DD date".to_string());
        }
        Ok(date)
    }

    fn render_text(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }
}

impl Scalar for Uuid {
    const KIND: &'static str = "uuid";

    fn parse_text(text: &str) -> Result<Self, String> {
        let uuid = Uuid::parse_str(text.trim()).map_err(|e| format!("expected a UUID: {e}"))?;
        match uuid.get_version_num() {
            4 => Ok(uuid),
            v => Err(format!("expected a version 4 UUID, found version {v}")),
        }
    }

    fn render_text(&self) -> String {
        self.hyphenated().to_string()
    }
}

impl Scalar for String {
    const KIND: &'static str = "string";

    fn parse_text(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }

    fn render_text(&self) -> String {
        self.clone()
    }
}

/// `true`, `1` and `yes` (case-insensitive, trimmed) are true; anything else is false.
pub fn parse_bool(text: &str) -> bool {
    let text = text.trim();
    ["true", "1", "yes"]
        .iter()
        .any(|truthy| text.eq_ignore_ascii_case(truthy))
}

/// Render a float as its shortest round-trip text.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.25e1`
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let body = if (-4..16).contains(&exponent) {
        positional(&digits, exponent)
    } else {
        exponential(&digits, exponent)
    };
    format!("{sign}{body}")
}

fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn exponential(digits: &str, exponent: i32) -> String {
    let mantissa = if digits.len() == 1 {
        digits.to_string()
    } else {
        format!("{}.{}", &digits[..1], &digits[1..])
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}

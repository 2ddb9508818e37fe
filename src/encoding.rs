//! Response body encoding.
//!
//! Bodies use spaced separators (`": "` and `", "`) and ASCII-only output,
//! with every character outside printable ASCII written as a `\uXXXX`
//! escape (UTF-16 surrogate pairs above the BMP).

use std::io;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Serializer;

/// `serde_json` formatter producing spaced, ASCII-only JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Serializes `value` as a spaced, ASCII-only JSON string.
pub fn to_body_string<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_separators_are_spaced() {
        let body = to_body_string(&json!({ "a": [1, 2, 3], "b": { "c": null } })).unwrap();
        assert_eq!(body, r#"{"a": [1, 2, 3], "b": {"c": null}}"#);
    }

    #[test]
    fn test_empty_containers_have_no_separators() {
        assert_eq!(to_body_string(&json!({ "a": [], "b": {} })).unwrap(), r#"{"a": [], "b": {}}"#);
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        assert_eq!(to_body_string("héllo").unwrap(), r#""h\u00e9llo""#);
        assert_eq!(to_body_string("日本").unwrap(), r#""\u65e5\u672c""#);
    }

    #[test]
    fn test_astral_characters_use_surrogate_pairs() {
        assert_eq!(to_body_string("😀").unwrap(), r#""\ud83d\ude00""#);
    }

    #[test]
    fn test_delete_and_control_characters_are_escaped() {
        assert_eq!(to_body_string("a\u{7f}b").unwrap(), r#""a\u007fb""#);
        assert_eq!(to_body_string("a\nb\"c\\").unwrap(), r#""a\nb\"c\\""#);
    }

    #[test]
    fn test_keys_are_escaped_like_values() {
        assert_eq!(to_body_string(&json!({ "clé": 1 })).unwrap(), r#"{"cl\u00e9": 1}"#);
    }
}

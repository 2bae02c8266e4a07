//! Display rendering for generated text.
//!
//! Generated text may carry literal two-character `\n` escapes. Display
//! targets convert those; real newline characters are left alone.

use serde::Serialize;

use crate::error::AppError;

/// Escape sequence marking a presentational line break
const LINE_BREAK_ESCAPE: &str = "\\n";

/// Convert escape sequences into `<br>` tags for HTML display
pub fn to_html(text: &str) -> String {
    text.replace(LINE_BREAK_ESCAPE, "<br>")
}

/// Convert escape sequences into real newlines for terminal display
pub fn to_plain(text: &str) -> String {
    text.replace(LINE_BREAK_ESCAPE, "\n")
}

/// Pretty-printed JSON for `--json` / `--format json` output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_to_html() {
        assert_eq!(to_html(r"a\nb\nc"), "a<br>b<br>c");
    }

    #[test]
    fn test_real_newlines_untouched() {
        assert_eq!(to_html("a\nb"), "a\nb");
    }

    #[test]
    fn test_to_plain() {
        assert_eq!(to_plain(r"line one\nline two"), "line one\nline two");
        assert_eq!(to_plain(""), "");
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&vec!["nature", "art"]).unwrap();
        assert_eq!(json, "[\n  \"nature\",\n  \"art\"\n]");
    }

    #[test]
    fn test_to_json_error_is_app_error() {
        // JSON object keys must be strings
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");

        assert!(matches!(to_json(&map), Err(AppError::Json(_))));
    }
}

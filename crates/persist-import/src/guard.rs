//! Shallow checks on a raw import file.
//!
//! Runs before anything else touches the content: file name, byte size, and a
//! case-insensitive substring blocklist, then a JSON node count after parsing.
//! This is a cheap sanity gate, not a sanitiser.

use persist_config::ImportConfig;
use serde_json::Value;
use thiserror::Error;

use crate::error::ImportError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("File \"{name}\" is not a .json file")]
    NotJson { name: String },

    #[error("File is too large: {size} bytes (limit {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("File is not valid UTF-8 text")]
    NotText,

    #[error("File contains blocked content: \"{pattern}\"")]
    Blocked { pattern: String },

    #[error("Document is too complex: {count} JSON nodes (limit {max})")]
    TooManyNodes { count: u64, max: u64 },
}

/// Input limits applied to every import file.
#[derive(Debug, Clone)]
pub struct InputGuard {
    max_file_bytes: u64,
    max_json_nodes: u64,
    /// Stored lowercased.
    blocklist: Vec<String>,
}

impl Default for InputGuard {
    fn default() -> Self {
        Self::from(&ImportConfig::default())
    }
}

impl From<&ImportConfig> for InputGuard {
    fn from(config: &ImportConfig) -> Self {
        Self {
            max_file_bytes: config.max_file_bytes,
            max_json_nodes: config.max_json_nodes,
            blocklist: config
                .blocklist
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| p.to_lowercase())
                .collect(),
        }
    }
}

impl InputGuard {
    /// Reject names that do not end in `.json` (any case).
    ///
    /// # Errors
    ///
    /// Returns `GuardError::NotJson`.
    pub fn check_name(&self, name: &str) -> Result<(), GuardError> {
        let is_json = std::path::Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(())
        } else {
            Err(GuardError::NotJson {
                name: name.to_string(),
            })
        }
    }

    /// Check size and blocklist, returning the content as text.
    ///
    /// # Errors
    ///
    /// Returns `GuardError::TooLarge`, `GuardError::NotText`, or
    /// `GuardError::Blocked`.
    pub fn check_content<'a>(&self, bytes: &'a [u8]) -> Result<&'a str, GuardError> {
        let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        if size > self.max_file_bytes {
            return Err(GuardError::TooLarge {
                size,
                max: self.max_file_bytes,
            });
        }
        let text = std::str::from_utf8(bytes).map_err(|_| GuardError::NotText)?;
        let lowered = text.to_lowercase();
        if let Some(pattern) = self.blocklist.iter().find(|p| lowered.contains(p.as_str())) {
            return Err(GuardError::Blocked {
                pattern: pattern.clone(),
            });
        }
        Ok(text)
    }

    /// Reject parsed documents with more nodes than allowed.
    ///
    /// # Errors
    ///
    /// Returns `GuardError::TooManyNodes`.
    pub fn check_nodes(&self, value: &Value) -> Result<(), GuardError> {
        let count = count_nodes(value, self.max_json_nodes);
        if count > self.max_json_nodes {
            return Err(GuardError::TooManyNodes {
                count,
                max: self.max_json_nodes,
            });
        }
        Ok(())
    }

    /// Run every check and parse the file.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Guard` for a rejected file and
    /// `ImportError::Parse` for malformed JSON.
    pub fn load(&self, name: &str, bytes: &[u8]) -> Result<Value, ImportError> {
        self.check_name(name)?;
        let text = self.check_content(bytes)?;
        let value: Value = serde_json::from_str(text)?;
        self.check_nodes(&value)?;
        Ok(value)
    }
}

/// Count every value in the tree, stopping once `stop_after` is exceeded.
fn count_nodes(root: &Value, stop_after: u64) -> u64 {
    let mut count = 0u64;
    let mut stack = vec![root];
    while let Some(value) = stack.pop() {
        count += 1;
        if count > stop_after {
            break;
        }
        match value {
            Value::Array(items) => stack.extend(items),
            Value::Object(map) => stack.extend(map.values()),
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn guard(max_file_bytes: u64, max_json_nodes: u64) -> InputGuard {
        InputGuard::from(&ImportConfig {
            max_file_bytes,
            max_json_nodes,
            ..ImportConfig::default()
        })
    }

    #[rstest]
    #[case("week3.json", true)]
    #[case("WEEK3.JSON", true)]
    #[case("week3.json.txt", false)]
    #[case("week3", false)]
    #[case(".json", false)]
    fn file_name_check(#[case] name: &str, #[case] ok: bool) {
        assert_eq!(InputGuard::default().check_name(name).is_ok(), ok);
    }

    #[rstest]
    #[case(r#"{"notes": "<SCRIPT>alert(1)</script>"}"#, "<script")]
    #[case(r#"{"link": "JavaScript:void(0)"}"#, "javascript:")]
    #[case(r#"{"x": "eval(1)"}"#, "eval(")]
    #[case(r#"{"img": "data:image/png;base64,AAAA"}"#, ";base64,")]
    fn blocklist_is_case_insensitive(#[case] content: &str, #[case] pattern: &str) {
        let err = InputGuard::default()
            .check_content(content.as_bytes())
            .unwrap_err();
        assert_eq!(
            err,
            GuardError::Blocked {
                pattern: pattern.to_string()
            }
        );
    }

    #[test]
    fn size_limit() {
        let err = guard(4, 100).check_content(b"[1, 2]").unwrap_err();
        assert_eq!(err, GuardError::TooLarge { size: 6, max: 4 });
        assert!(guard(6, 100).check_content(b"[1, 2]").is_ok());
    }

    #[test]
    fn node_limit() {
        let value = json!([{"a": [1, 2, 3]}]);
        // array, object, inner array, three numbers
        assert_eq!(count_nodes(&value, u64::MAX), 6);
        assert!(guard(1024, 6).check_nodes(&value).is_ok());
        assert!(matches!(
            guard(1024, 5).check_nodes(&value),
            Err(GuardError::TooManyNodes { max: 5, .. })
        ));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let err = InputGuard::default().load("a.json", b"[{").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn load_rejects_non_utf8() {
        let err = InputGuard::default().load("a.json", &[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ImportError::Guard(GuardError::NotText)));
    }
}

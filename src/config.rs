//! Page request configuration
//!
//! A [`PageRequest`] carries the page parameters a caller asks for. It can be
//! built in code or loaded from JSON or YAML, e.g. a saved view or the
//! `--request` file of the command-line tool:
//!
//! ```yaml
//! page: 3
//! pageSize: 25
//! ```
//!
//! Values are kept as requested; normalization happens when a paginator is
//! built from the request.

use crate::error::{Error, Result, ResultExt};
use crate::pagination::{normalize_page, normalize_page_size, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Requested page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Requested page number (1-based)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Requested number of items per page
    #[serde(default = "default_page_size", alias = "page_size", alias = "per_page")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Create a page request
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Replace the page number
    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Replace the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// The `(page, page_size)` pair a paginator would actually use
    pub fn normalized(&self) -> (u64, u64) {
        (normalize_page(self.page), normalize_page_size(self.page_size))
    }

    /// 0-based offset of the first item of the requested page
    pub fn offset(&self) -> u64 {
        let (page, page_size) = self.normalized();
        (page - 1).saturating_mul(page_size)
    }

    /// Parse a page request from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a page request from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a page request from a file.
    ///
    /// `.yaml` / `.yml` files are parsed as YAML, anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page request {}", path.display()))?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let request = if is_yaml {
            Self::from_yaml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        };
        request.map_err(|e| Error::config(format!("Invalid page request in {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 10);
        assert_eq!(request.offset(), 0);
    }

    #[test_case(0, 0 => (1, 10); "zero page and size")]
    #[test_case(-3, -5 => (1, 10); "negative page and size")]
    #[test_case(4, 25 => (4, 25); "valid values kept")]
    fn test_normalized(page: i64, page_size: i64) -> (u64, u64) {
        PageRequest::new(page, page_size).normalized()
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
        assert_eq!(PageRequest::new(0, 25).offset(), 0);
    }

    #[test]
    fn test_builder_methods() {
        let request = PageRequest::default().with_page(5).with_page_size(3);
        assert_eq!(request, PageRequest::new(5, 3));
    }

    #[test]
    fn test_from_json_str() {
        let request = PageRequest::from_json_str(r#"{"page": 2, "pageSize": 3}"#).unwrap();
        assert_eq!(request, PageRequest::new(2, 3));

        let request = PageRequest::from_json_str(r#"{"page_size": 7}"#).unwrap();
        assert_eq!(request, PageRequest::new(1, 7));

        let request = PageRequest::from_json_str("{}").unwrap();
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = PageRequest::from_json_str(r#"{"page": "two"}"#).unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
        assert!(!err.is_decode());
    }

    #[test]
    fn test_from_yaml_str() {
        let request = PageRequest::from_yaml_str("page: 3\nper_page: 25\n").unwrap();
        assert_eq!(request, PageRequest::new(3, 25));
    }

    #[test]
    fn test_from_file_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("request.yaml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "page: 2\npageSize: 4").unwrap();
        assert_eq!(
            PageRequest::from_file(&yaml_path).unwrap(),
            PageRequest::new(2, 4)
        );

        let json_path = dir.path().join("request.json");
        std::fs::write(&json_path, r#"{"page": 6}"#).unwrap();
        assert_eq!(
            PageRequest::from_file(&json_path).unwrap(),
            PageRequest::new(6, 10)
        );
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        let err = PageRequest::from_file(&missing).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "not json").unwrap();
        let err = PageRequest::from_file(&broken).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}

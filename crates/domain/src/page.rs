//! Offset-based pagination page.

use serde::{Deserialize, Serialize};

/// One page of results as the backend returns them: `{ content, total }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Total matching items across all pages.
    #[serde(default)]
    pub total: u64,
}

impl<T> Page<T> {
    /// Returns true if the page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_page() {
        let page: Page<i64> = serde_json::from_str(r#"{"content":[1,2,3],"total":5}"#).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_missing_fields_default() {
        let page: Page<i64> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }
}

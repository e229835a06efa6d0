use crate::error::{PaginatorError, Result};
use crate::paginator::{Paginator, DEFAULT_ENTRIES_PER_PAGE};
use serde::{Deserialize, Serialize};

fn default_entries_per_page() -> i64 {
    DEFAULT_ENTRIES_PER_PAGE as i64
}

/// Raw pagination input as it arrives from a request or config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub total_entries: i64,
    #[serde(default = "default_entries_per_page")]
    pub entries_per_page: i64,
    #[serde(default)]
    pub current_page: Option<i64>,
}

impl PageRequest {
    pub fn new(total_entries: i64) -> Self {
        Self {
            total_entries,
            entries_per_page: default_entries_per_page(),
            current_page: None,
        }
    }

    pub fn page(mut self, page: i64) -> Self {
        self.current_page = Some(page);
        self
    }

    pub fn per_page(mut self, entries_per_page: i64) -> Self {
        self.entries_per_page = entries_per_page;
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl TryFrom<PageRequest> for Paginator {
    type Error = PaginatorError;

    fn try_from(req: PageRequest) -> Result<Self> {
        Paginator::new(req.total_entries, req.entries_per_page, req.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = PageRequest::from_json(r#"{"totalEntries": 25}"#).unwrap();
        assert_eq!(req, PageRequest::new(25));
        let p = Paginator::try_from(req).unwrap();
        assert_eq!(p.entries_per_page(), 10);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.last_page(), 3);
    }

    #[test]
    fn test_explicit_values() {
        let req =
            PageRequest::from_json(r#"{"totalEntries": 10, "entriesPerPage": 3, "currentPage": 99}"#)
                .unwrap();
        assert_eq!(req, PageRequest::new(10).per_page(3).page(99));
        assert_eq!(Paginator::try_from(req).unwrap().current_page(), 4);
    }

    #[test]
    fn test_null_page_defaults() {
        let req = PageRequest::from_json(r#"{"totalEntries": 10, "currentPage": null}"#).unwrap();
        assert_eq!(Paginator::try_from(req).unwrap().current_page(), 1);
    }

    #[test]
    fn test_invalid_request() {
        let err = Paginator::try_from(PageRequest::new(10).per_page(0)).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(Paginator::try_from(PageRequest::new(-3)).is_err());
        assert!(PageRequest::from_json("[]").is_err());
    }
}

use crate::error::{PaginatorError, Result};
use crate::paginator::Paginator;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The externally visible state of a [`Paginator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactView {
    pub total_entries: u64,
    pub entries_per_page: u64,
    pub current_page: u64,
}

/// Compact view plus every derived value. Absent neighbour pages encode as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullView {
    #[serde(flatten)]
    pub compact: CompactView,
    pub last_page: u64,
    pub entries_on_this_page: u64,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
    pub first_index: i64,
    pub last_index: i64,
    pub first_item: i64,
    pub last_item: i64,
}

impl CompactView {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl FullView {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

fn to_i64(field: &'static str, value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| {
        log::warn!("rejected {} = {}", field, value);
        PaginatorError::invalid(field, value)
    })
}

impl TryFrom<CompactView> for Paginator {
    type Error = PaginatorError;

    fn try_from(view: CompactView) -> Result<Self> {
        Paginator::new(
            to_i64("totalEntries", view.total_entries)?,
            to_i64("entriesPerPage", view.entries_per_page)?,
            Some(to_i64("currentPage", view.current_page)?),
        )
    }
}

impl TryFrom<&FullView> for Paginator {
    type Error = PaginatorError;

    fn try_from(view: &FullView) -> Result<Self> {
        Paginator::try_from(view.compact)
    }
}

impl Paginator {
    pub fn compact(&self) -> CompactView {
        CompactView {
            total_entries: self.total_entries(),
            entries_per_page: self.entries_per_page(),
            current_page: self.current_page(),
        }
    }

    pub fn full(&self) -> FullView {
        FullView {
            compact: self.compact(),
            last_page: self.last_page(),
            entries_on_this_page: self.entries_on_this_page(),
            previous_page: self.previous_page(),
            next_page: self.next_page(),
            first_index: self.first_index(),
            last_index: self.last_index(),
            first_item: self.first_item(),
            last_item: self.last_item(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        self.compact().to_json()
    }

    pub fn to_full_json(&self) -> Result<String> {
        self.full().to_json()
    }
}

impl Serialize for Paginator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.compact().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Paginator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let view = CompactView::deserialize(deserializer)?;
        Paginator::try_from(view).map_err(serde::de::Error::custom)
    }
}

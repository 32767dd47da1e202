use serde::{Deserialize, Serialize};

/// One page of a server-side paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// Zero-based index of this page.
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub number_of_elements: Option<u32>,
}

impl<T> Paginated<T> {
    /// An empty first page.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            current_page: 0,
            total_pages: 0,
            total_elements: 0,
            page_size: None,
            number_of_elements: Some(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Check the page against the size that was requested.
    ///
    /// With elements present, the page index must be in range; the
    /// page never holds more rows than were asked for.
    pub fn is_consistent(&self, page_size: u32) -> bool {
        let in_range = self.total_elements == 0 || self.current_page < self.total_pages;
        in_range && self.data.len() <= page_size as usize
    }

    /// One-based `(first, last)` row numbers shown on this page.
    pub fn showing_range(&self, page_size: u32) -> Option<(u64, u64)> {
        if self.total_elements == 0 || self.data.is_empty() {
            return None;
        }
        let size = u64::from(page_size);
        let first = u64::from(self.current_page) * size + 1;
        let last = ((u64::from(self.current_page) + 1) * size).min(self.total_elements);
        Some((first, last))
    }
}

/// Sort direction as spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Column header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

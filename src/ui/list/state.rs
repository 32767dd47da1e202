//! State of a paginated list view.

use std::fmt::Debug;

use crate::api::Paginated;
use crate::config::ListConfig;
use crate::ui::mvi::UiState;

use super::filters::FilterSet;
use super::paging::Pager;
use super::sorting::{SortColumn, SortSpec};

/// Fetch lifecycle of the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListStatus {
    /// A fetch is in flight. Initial state.
    #[default]
    Loading,
    /// The last fetch failed; previous data, if any, is kept.
    Error { message: String },
    /// The last fetch succeeded.
    Loaded,
}

/// What the view should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListPhase<'a, T> {
    Loading,
    Error { message: &'a str },
    /// Loaded with no rows. `filtered` is true when filters are set.
    Empty { filtered: bool },
    Populated(&'a Paginated<T>),
}

/// Parameters of one fetch, tagged with its generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest<F, C> {
    pub generation: u64,
    pub filters: F,
    pub page: u32,
    pub page_size: u32,
    pub sort: SortSpec<C>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<F, C, T> {
    pub status: ListStatus,
    /// Last applied page, replaced wholesale on every applied fetch.
    pub data: Option<Paginated<T>>,
    pub filters: F,
    pub pager: Pager,
    /// Rows requested per page.
    pub page_size: u32,
    pub sort: SortSpec<C>,
    /// Generation of the most recently issued fetch.
    pub issued: u64,
    /// Generation whose result is in `data` / `status`.
    pub applied: u64,
    /// Bumped on every debounced edit; only the latest timer may fire.
    pub debounce_token: u64,
    pub debounce_pending: bool,
}

impl<F: Default, C: Default, T> Default for ListState<F, C, T> {
    fn default() -> Self {
        Self {
            status: ListStatus::Loading,
            data: None,
            filters: F::default(),
            pager: Pager::default(),
            page_size: ListConfig::default().page_size,
            sort: SortSpec::default(),
            issued: 0,
            applied: 0,
            debounce_token: 0,
            debounce_pending: false,
        }
    }
}

impl<F, C, T> UiState for ListState<F, C, T>
where
    F: FilterSet,
    C: SortColumn,
    T: Clone + PartialEq + Debug + Send + 'static,
{
}

impl<F: FilterSet, C: SortColumn, T> ListState<F, C, T> {
    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// Loading, or waiting for a debounce timer to fire.
    pub fn is_busy(&self) -> bool {
        self.is_loading() || self.debounce_pending
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn phase(&self) -> ListPhase<'_, T> {
        match &self.status {
            ListStatus::Loading => ListPhase::Loading,
            ListStatus::Error { message } => ListPhase::Error { message },
            ListStatus::Loaded => match &self.data {
                Some(page) if !page.is_empty() => ListPhase::Populated(page),
                _ => ListPhase::Empty {
                    filtered: self.filters.is_active(),
                },
            },
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.pager.can_go_next(self.data.as_ref())
    }

    pub fn can_go_previous(&self) -> bool {
        self.pager.can_go_previous(self.data.as_ref())
    }

    pub fn total_elements(&self) -> u64 {
        self.data.as_ref().map_or(0, |page| page.total_elements)
    }

    /// 1-based positions of the first and last shown row.
    pub fn showing_range(&self) -> Option<(u64, u64)> {
        self.data.as_ref()?.showing_range(self.page_size)
    }

    /// Request for the current parameters under the latest generation.
    pub fn request(&self) -> ListRequest<F, C> {
        ListRequest {
            generation: self.issued,
            filters: self.filters.clone(),
            page: self.pager.current(),
            page_size: self.page_size,
            sort: self.sort,
        }
    }
}

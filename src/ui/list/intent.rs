use std::fmt::Debug;

use crate::api::Paginated;
use crate::ui::mvi::Intent;

use super::filters::FilterSet;
use super::sorting::SortColumn;

/// Intents that can be dispatched to a list view.
#[derive(Debug, Clone)]
pub enum ListIntent<F: FilterSet, C, T> {
    /// The view was shown.
    Mount,

    /// A filter input changed.
    SetFilter { field: F::Field, value: String },

    /// The debounce timer started for `token` ran out.
    DebounceElapsed { token: u64 },

    /// Reset every filter and go back to the first page.
    ClearFilters,

    /// Column header clicked.
    ToggleSort(C),

    NextPage,
    PreviousPage,
    GoToPage(u32),

    /// Rows-per-page selector changed. Sizes outside
    /// `PAGE_SIZE_OPTIONS` are ignored.
    SetPageSize(u32),

    /// Refetch with the current parameters (refresh button, retry,
    /// or a modal that changed the underlying data).
    Refresh,

    /// A fetch completed.
    Loaded { generation: u64, page: Paginated<T> },

    /// A fetch failed. `message` is already user-facing.
    Failed { generation: u64, message: String },
}

impl<F, C, T> Intent for ListIntent<F, C, T>
where
    F: FilterSet,
    C: SortColumn,
    T: Debug + Send + 'static,
{
}

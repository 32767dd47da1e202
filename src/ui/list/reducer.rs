//! Reducer for list view state transitions.

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::filters::FilterSet;
use super::intent::ListIntent;
use super::paging::PAGE_SIZE_OPTIONS;
use super::sorting::SortColumn;
use super::state::{ListState, ListStatus};

/// Reducer for any filtered, sorted, paginated list.
///
/// A transition that needs data bumps `issued`; the driver watches for
/// that and performs the fetch. Results are applied only when they carry
/// the latest issued generation.
pub struct ListReducer<F, C, T>(PhantomData<fn() -> (F, C, T)>);

impl<F, C, T> Reducer for ListReducer<F, C, T>
where
    F: FilterSet,
    C: SortColumn,
    T: Clone + PartialEq + Debug + Send + 'static,
{
    type State = ListState<F, C, T>;
    type Intent = ListIntent<F, C, T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Mount | ListIntent::Refresh => issue(state),

            ListIntent::SetFilter { field, value } => {
                if state.filters.get(field) == value {
                    return state;
                }
                state.filters.set(field, value);
                if F::is_debounced(field) {
                    state.debounce_token += 1;
                    state.debounce_pending = true;
                    state
                } else {
                    issue(state)
                }
            }

            ListIntent::DebounceElapsed { token } => {
                if !state.debounce_pending || token != state.debounce_token {
                    return state;
                }
                state.debounce_pending = false;
                state.pager.reset();
                issue(state)
            }

            ListIntent::ClearFilters => {
                state.filters = F::default();
                state.pager.reset();
                // Invalidate any timer still counting down.
                state.debounce_token += 1;
                state.debounce_pending = false;
                issue(state)
            }

            ListIntent::ToggleSort(column) => {
                state.sort = state.sort.toggle(column);
                issue(state)
            }

            ListIntent::NextPage => {
                if state.pager.next(state.data.as_ref()) {
                    issue(state)
                } else {
                    state
                }
            }

            ListIntent::PreviousPage => {
                if state.pager.previous(state.data.as_ref()) {
                    issue(state)
                } else {
                    state
                }
            }

            ListIntent::GoToPage(target) => {
                if state.pager.go_to(target, state.data.as_ref()) {
                    issue(state)
                } else {
                    state
                }
            }

            ListIntent::SetPageSize(size) => {
                if size == state.page_size || !PAGE_SIZE_OPTIONS.contains(&size) {
                    return state;
                }
                state.page_size = size;
                state.pager.reset();
                issue(state)
            }

            ListIntent::Loaded { generation, page } => {
                if generation != state.issued {
                    return state;
                }
                state.pager.sync(&page);
                state.data = Some(page);
                state.status = ListStatus::Loaded;
                state.applied = generation;
                state
            }

            ListIntent::Failed { generation, message } => {
                if generation != state.issued {
                    return state;
                }
                state.status = ListStatus::Error { message };
                state.applied = generation;
                state
            }
        }
    }
}

fn issue<F, C, T>(mut state: ListState<F, C, T>) -> ListState<F, C, T> {
    state.issued += 1;
    state.status = ListStatus::Loading;
    state
}

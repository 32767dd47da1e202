//! Async driver for list views.
//!
//! Owns the list state, runs intents through `ListReducer`, and performs
//! the effects the reducer asks for: fetches (when a new generation is
//! issued) and the debounce timer (when a debounced filter changes).
//! Views observe the state through a `watch` channel.

use std::fmt::Debug;
use std::sync::{Arc, Weak};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{Paginated, ServiceError};
use crate::config::ListConfig;
use crate::ui::mvi::dispatch;

use super::filters::FilterSet;
use super::intent::ListIntent;
use super::paging::Pager;
use super::reducer::ListReducer;
use super::sorting::{SortColumn, SortSpec};
use super::state::{ListRequest, ListState};

/// Where a list gets its pages from.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Filters: FilterSet;
    type Sort: SortColumn;
    type Item: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Plural noun for messages, e.g. "low stock products".
    fn label(&self) -> &'static str;

    async fn fetch(
        &self,
        request: ListRequest<Self::Filters, Self::Sort>,
    ) -> Result<Paginated<Self::Item>, ServiceError>;
}

pub type SourceState<S> =
    ListState<<S as ListSource>::Filters, <S as ListSource>::Sort, <S as ListSource>::Item>;

pub type SourceIntent<S> =
    ListIntent<<S as ListSource>::Filters, <S as ListSource>::Sort, <S as ListSource>::Item>;

type SourceReducer<S> =
    ListReducer<<S as ListSource>::Filters, <S as ListSource>::Sort, <S as ListSource>::Item>;

/// Tunables for a list controller. `page_size` is the starting size;
/// views may switch to one of `PAGE_SIZE_OPTIONS` later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    pub page_size: u32,
    pub debounce: Duration,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self::from(&ListConfig::default())
    }
}

impl From<&ListConfig> for ListSettings {
    fn from(config: &ListConfig) -> Self {
        Self {
            page_size: config.page_size,
            debounce: Duration::from_millis(config.debounce_ms),
        }
    }
}

/// Handle to a list's state machine. Cheap to clone.
///
/// Must be used from within a Tokio runtime.
pub struct ListController<S: ListSource> {
    inner: Arc<Inner<S>>,
}

struct Inner<S: ListSource> {
    source: S,
    settings: ListSettings,
    state: watch::Sender<SourceState<S>>,
    debounce_timer: Mutex<Option<JoinHandle<()>>>,
}

impl<S: ListSource> Clone for ListController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: ListSource> Drop for Inner<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.debounce_timer.get_mut().take() {
            timer.abort();
        }
    }
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: S, settings: ListSettings) -> Self {
        Self::with_state(source, settings, SourceState::<S>::default())
    }

    /// Controller opened on preset filters, sort and page instead of the
    /// defaults. Nothing is fetched until `mount`.
    pub fn with_params(
        source: S,
        settings: ListSettings,
        filters: S::Filters,
        sort: SortSpec<S::Sort>,
        page: u32,
    ) -> Self {
        let mut state = SourceState::<S>::default();
        state.filters = filters;
        state.sort = sort;
        state.pager = Pager::starting_at(page);
        Self::with_state(source, settings, state)
    }

    fn with_state(source: S, settings: ListSettings, mut state: SourceState<S>) -> Self {
        state.page_size = settings.page_size;
        let (state, _) = watch::channel(state);
        Self {
            inner: Arc::new(Inner {
                source,
                settings,
                state,
                debounce_timer: Mutex::new(None),
            }),
        }
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    pub fn settings(&self) -> ListSettings {
        self.inner.settings
    }

    pub fn subscribe(&self) -> watch::Receiver<SourceState<S>> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SourceState<S> {
        self.inner.state.borrow().clone()
    }

    /// Wait until no fetch is in flight and no debounce is pending.
    pub async fn settled(&self) -> SourceState<S> {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|state| !state.is_busy()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    pub fn mount(&self) {
        self.dispatch(ListIntent::Mount);
    }

    pub fn set_filter(&self, field: <S::Filters as FilterSet>::Field, value: impl Into<String>) {
        self.dispatch(ListIntent::SetFilter {
            field,
            value: value.into(),
        });
    }

    pub fn clear_filters(&self) {
        self.dispatch(ListIntent::ClearFilters);
    }

    pub fn toggle_sort(&self, column: S::Sort) {
        self.dispatch(ListIntent::ToggleSort(column));
    }

    pub fn next_page(&self) {
        self.dispatch(ListIntent::NextPage);
    }

    pub fn previous_page(&self) {
        self.dispatch(ListIntent::PreviousPage);
    }

    pub fn go_to_page(&self, page: u32) {
        self.dispatch(ListIntent::GoToPage(page));
    }

    pub fn set_page_size(&self, size: u32) {
        self.dispatch(ListIntent::SetPageSize(size));
    }

    /// Refetch with the current parameters. Also the retry action.
    pub fn refresh(&self) {
        self.dispatch(ListIntent::Refresh);
    }

    /// Run an intent through the reducer and start whatever it asked for.
    pub fn dispatch(&self, intent: SourceIntent<S>) {
        let mut fetch = None;
        let mut timer = None;

        self.inner.state.send_modify(|state| {
            let issued = state.issued;
            let token = state.debounce_token;

            dispatch::<SourceReducer<S>>(state, intent);

            if state.issued != issued {
                fetch = Some(state.request());
            }
            if state.debounce_token != token {
                timer = Some((state.debounce_token, state.debounce_pending));
            }
        });

        if let Some((token, pending)) = timer {
            self.restart_debounce(token, pending);
        }
        if let Some(request) = fetch {
            self.spawn_fetch(request);
        }
    }

    fn restart_debounce(&self, token: u64, pending: bool) {
        let mut slot = self.inner.debounce_timer.lock();
        // A concurrent dispatch may already have moved past `token`; its
        // timer owns the slot.
        if self.inner.state.borrow().debounce_token != token {
            return;
        }
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        if !pending {
            return;
        }

        let weak: Weak<Inner<S>> = Arc::downgrade(&self.inner);
        let delay = self.inner.settings.debounce;
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                ListController { inner }.dispatch(ListIntent::DebounceElapsed { token });
            }
        }));
    }

    fn spawn_fetch(&self, request: ListRequest<S::Filters, S::Sort>) {
        let controller = self.clone();
        tokio::spawn(async move {
            let generation = request.generation;
            let page_size = request.page_size;
            let label = controller.inner.source.label();
            tracing::debug!(
                generation,
                page = request.page,
                sort = request.sort.field.as_param(),
                "Fetching {}",
                label
            );

            let intent = match controller.inner.source.fetch(request).await {
                Ok(page) => {
                    if !page.is_consistent(page_size) {
                        tracing::warn!(
                            current_page = page.current_page,
                            total_pages = page.total_pages,
                            rows = page.data.len(),
                            "Inconsistent page of {}",
                            label
                        );
                    }
                    ListIntent::Loaded { generation, page }
                }
                Err(err) => {
                    tracing::error!(kind = err.kind(), "Failed to load {}: {}", label, err);
                    ListIntent::Failed {
                        generation,
                        message: format!("Failed to load {}", label),
                    }
                }
            };

            let latest = controller.inner.state.borrow().issued;
            if latest != generation {
                tracing::debug!(generation, latest, "Discarding stale response for {}", label);
                return;
            }
            controller.dispatch(intent);
        });
    }
}

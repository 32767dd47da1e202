//! Filtered, sorted, server-paginated list views.
//!
//! ```text
//! filters/sort/page ──→ ListReducer ──→ issued generation ──→ ListSource::fetch
//!        ↑                                                         │
//!        └──────────── Loaded / Failed { generation } ←────────────┘
//! ```

pub mod categories;
pub mod controller;
pub mod filters;
pub mod intent;
pub mod low_stock;
pub mod paging;
pub mod reducer;
pub mod sorting;
pub mod state;

pub use controller::{ListController, ListSettings, ListSource, SourceIntent, SourceState};
pub use filters::FilterSet;
pub use intent::ListIntent;
pub use paging::{Pager, PAGE_SIZE_OPTIONS};
pub use reducer::ListReducer;
pub use sorting::{SortColumn, SortSpec};
pub use state::{ListPhase, ListRequest, ListState, ListStatus};

//! Model-View-Intent primitives shared by lists, modals and forms.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── effects (fetch, timers)
//! ```
//!
//! Reducers stay pure. Anything that talks to the network or the clock
//! lives in a driver next to the reducer and feeds results back in as
//! intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;

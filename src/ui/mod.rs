//! View-side state machines: lists, modals and forms.
//!
//! Nothing here renders. Each piece exposes state plus the operations a
//! view calls, and talks to the backend only through the `api` services.

pub mod forms;
pub mod list;
pub mod modal;
pub mod mvi;
pub mod nav;

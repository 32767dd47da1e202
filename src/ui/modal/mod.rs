//! Modal dialogs.

pub mod stock_update;

pub use stock_update::{StockUpdateIntent, StockUpdateModal, StockUpdateReducer, StockUpdateState};

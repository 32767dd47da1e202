//! Stock update modal: pick ADD/REMOVE/SET and a quantity for one product.
//!
//! On success the caller's `on_updated` hook runs (usually a list refresh)
//! and the modal closes. On failure it stays open with the error message.

mod intent;
mod reducer;
mod state;

pub use intent::StockUpdateIntent;
pub use reducer::StockUpdateReducer;
pub use state::StockUpdateState;

use crate::api::{StockAlert, StockOperation, StockUpdateResult, StockUpdater};
use crate::ui::mvi::dispatch;

#[derive(Debug, Default)]
pub struct StockUpdateModal {
    state: StockUpdateState,
}

impl StockUpdateModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &StockUpdateState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: StockUpdateIntent) {
        dispatch::<StockUpdateReducer>(&mut self.state, intent);
    }

    pub fn open(&mut self, product: StockAlert) {
        self.dispatch(StockUpdateIntent::Open { product });
    }

    pub fn set_operation(&mut self, operation: StockOperation) {
        self.dispatch(StockUpdateIntent::SetOperation(operation));
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.dispatch(StockUpdateIntent::SetQuantity(quantity.into()));
    }

    pub fn close(&mut self) {
        self.dispatch(StockUpdateIntent::Close);
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Send the update. Returns `None` without a request when the input
    /// is not submittable.
    pub async fn submit<U, F>(&mut self, updater: &U, on_updated: F) -> Option<StockUpdateResult>
    where
        U: StockUpdater + ?Sized,
        F: FnOnce(&StockUpdateResult),
    {
        let update = self.state.pending_update()?;
        self.dispatch(StockUpdateIntent::SubmitStarted);

        match updater.update_stock(&update).await {
            Ok(result) => {
                tracing::info!(
                    product_id = update.product_id,
                    operation = update.operation.as_param(),
                    quantity = update.quantity,
                    new_stock = result.new_stock,
                    "Stock updated"
                );
                on_updated(&result);
                self.close();
                Some(result)
            }
            Err(e) => {
                tracing::warn!(product_id = update.product_id, error = %e, "Stock update failed");
                self.dispatch(StockUpdateIntent::SubmitFailed {
                    message: e.to_string(),
                });
                None
            }
        }
    }
}

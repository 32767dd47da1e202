use crate::api::{StockAlert, StockOperation};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StockUpdateIntent {
    /// Open the modal bound to one product.
    Open { product: StockAlert },

    SetOperation(StockOperation),

    SetQuantity(String),

    /// The update request was sent.
    SubmitStarted,

    /// The update request failed; stay open and show why.
    SubmitFailed { message: String },

    /// Cancelled, or the update succeeded.
    Close,
}

impl Intent for StockUpdateIntent {}

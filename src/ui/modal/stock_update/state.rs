//! State for the stock update modal.

use crate::api::{StockAlert, StockOperation, StockUpdate};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum StockUpdateState {
    #[default]
    Closed,

    Open {
        /// Product the modal was opened for.
        product: StockAlert,
        operation: StockOperation,
        /// Quantity as typed.
        quantity: String,
        /// Last submit error, shown inline.
        error: Option<String>,
        submitting: bool,
    },
}

impl UiState for StockUpdateState {}

impl StockUpdateState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn product(&self) -> Option<&StockAlert> {
        match self {
            Self::Open { product, .. } => Some(product),
            Self::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            Self::Closed => None,
        }
    }

    /// Payload to submit, if the input is acceptable.
    ///
    /// ADD and REMOVE need a positive amount; SET accepts zero.
    pub fn pending_update(&self) -> Option<StockUpdate> {
        let Self::Open {
            product,
            operation,
            quantity,
            submitting: false,
            ..
        } = self
        else {
            return None;
        };

        let quantity: i32 = quantity.trim().parse().ok()?;
        let valid = match operation {
            StockOperation::Add | StockOperation::Remove => quantity > 0,
            StockOperation::Set => quantity >= 0,
        };
        valid.then(|| StockUpdate {
            product_id: product.product_id,
            quantity,
            operation: *operation,
        })
    }

    pub fn can_submit(&self) -> bool {
        self.pending_update().is_some()
    }

    /// Stock level the product would have after submitting, for preview.
    pub fn preview_stock(&self) -> Option<i32> {
        let update = self.pending_update()?;
        let current = self.product()?.current_stock;
        Some(match update.operation {
            StockOperation::Add => current.saturating_add(update.quantity),
            StockOperation::Remove => current.saturating_sub(update.quantity),
            StockOperation::Set => update.quantity,
        })
    }
}

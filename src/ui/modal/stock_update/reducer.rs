use crate::api::StockOperation;
use crate::ui::mvi::Reducer;

use super::intent::StockUpdateIntent;
use super::state::StockUpdateState;

pub struct StockUpdateReducer;

impl Reducer for StockUpdateReducer {
    type State = StockUpdateState;
    type Intent = StockUpdateIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StockUpdateIntent::Open { product } => StockUpdateState::Open {
                product,
                operation: StockOperation::Add,
                quantity: String::new(),
                error: None,
                submitting: false,
            },

            StockUpdateIntent::SetOperation(operation) => match state {
                StockUpdateState::Open {
                    product,
                    quantity,
                    submitting: false,
                    ..
                } => StockUpdateState::Open {
                    product,
                    operation,
                    quantity,
                    error: None,
                    submitting: false,
                },
                other => other,
            },

            StockUpdateIntent::SetQuantity(quantity) => match state {
                StockUpdateState::Open {
                    product,
                    operation,
                    submitting: false,
                    ..
                } => StockUpdateState::Open {
                    product,
                    operation,
                    quantity,
                    error: None,
                    submitting: false,
                },
                other => other,
            },

            StockUpdateIntent::SubmitStarted => match state {
                StockUpdateState::Open {
                    product,
                    operation,
                    quantity,
                    ..
                } => StockUpdateState::Open {
                    product,
                    operation,
                    quantity,
                    error: None,
                    submitting: true,
                },
                other => other,
            },

            StockUpdateIntent::SubmitFailed { message } => match state {
                StockUpdateState::Open {
                    product,
                    operation,
                    quantity,
                    ..
                } => StockUpdateState::Open {
                    product,
                    operation,
                    quantity,
                    error: Some(message),
                    submitting: false,
                },
                other => other,
            },

            StockUpdateIntent::Close => StockUpdateState::Closed,
        }
    }
}

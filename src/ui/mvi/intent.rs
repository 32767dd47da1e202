/// Marker trait for intent objects.
///
/// Intents are user actions (typing in a filter, clicking a column
/// header) or settled effects (a page arrived, a timer elapsed).
pub trait Intent: Send + 'static {}

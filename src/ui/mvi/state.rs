/// Marker trait for view state.
///
/// `Default` is the state a view starts in when mounted.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

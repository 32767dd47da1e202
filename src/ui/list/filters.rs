use std::fmt::Debug;

/// The filter inputs of one list screen, held as the raw text the
/// user typed or selected.
///
/// `Default` is the cleared state.
pub trait FilterSet: Clone + PartialEq + Default + Debug + Send + Sync + 'static {
    type Field: Copy + Eq + Debug + Send + Sync + 'static;

    fn get(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    /// Free-text fields wait for a quiet period before refetching;
    /// selects and numeric bounds refetch immediately.
    fn is_debounced(field: Self::Field) -> bool;

    /// Whether any field differs from its cleared value.
    fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

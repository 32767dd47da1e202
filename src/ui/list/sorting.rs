use std::fmt::Debug;

use crate::api::SortDirection;

/// A column a list can be sorted by.
///
/// `Default` is the column a freshly mounted list sorts on.
pub trait SortColumn: Copy + Eq + Debug + Default + Send + Sync + 'static {
    /// Value sent as `sortBy`.
    fn as_param(self) -> &'static str;
}

/// The single active sort of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec<C> {
    pub field: C,
    pub direction: SortDirection,
}

impl<C: SortColumn> SortSpec<C> {
    pub fn new(field: C, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column-header click: same column flips, another column starts ascending.
    pub fn toggle(self, column: C) -> Self {
        if self.field == column {
            Self::new(column, self.direction.flip())
        } else {
            Self::new(column, SortDirection::Asc)
        }
    }

    /// Arrow to render next to `column`'s header, if it is the active one.
    pub fn indicator(&self, column: C) -> Option<&'static str> {
        (self.field == column).then(|| self.direction.arrow())
    }
}

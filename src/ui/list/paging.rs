use crate::api::Paginated;

/// Rows-per-page choices offered by list views.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [6, 12, 24];

/// Current page of a list view (zero-based).
///
/// Moves are checked against the last loaded page, never against
/// the server: without loaded data there is nowhere to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    current: u32,
}

impl Pager {
    /// Pager opened on a given page, before anything is loaded.
    pub fn starting_at(page: u32) -> Self {
        Self { current: page }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Follow the page the server actually returned.
    pub fn sync<T>(&mut self, page: &Paginated<T>) {
        self.current = page.current_page;
    }

    pub fn can_go_previous<T>(&self, loaded: Option<&Paginated<T>>) -> bool {
        loaded.is_some() && self.current > 0
    }

    pub fn can_go_next<T>(&self, loaded: Option<&Paginated<T>>) -> bool {
        loaded.is_some_and(|page| self.current.saturating_add(1) < page.total_pages)
    }

    /// Returns whether the page changed.
    pub fn previous<T>(&mut self, loaded: Option<&Paginated<T>>) -> bool {
        if !self.can_go_previous(loaded) {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Returns whether the page changed.
    pub fn next<T>(&mut self, loaded: Option<&Paginated<T>>) -> bool {
        if !self.can_go_next(loaded) {
            return false;
        }
        self.current += 1;
        true
    }

    /// Jump to `target` if it exists in the loaded listing.
    pub fn go_to<T>(&mut self, target: u32, loaded: Option<&Paginated<T>>) -> bool {
        let Some(page) = loaded else {
            return false;
        };
        if target == self.current || target >= page.total_pages {
            return false;
        }
        self.current = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(current_page: u32, total_pages: u32) -> Paginated<u8> {
        Paginated {
            data: vec![1],
            current_page,
            total_pages,
            total_elements: u64::from(total_pages) * 20,
            page_size: Some(20),
            number_of_elements: Some(1),
        }
    }

    #[test]
    fn no_moves_without_data() {
        let mut pager = Pager::default();
        assert!(!pager.next::<u8>(None));
        assert!(!pager.previous::<u8>(None));
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn next_disabled_on_last_page() {
        let mut pager = Pager::default();
        let data = listing(0, 2);
        assert!(pager.next(Some(&data)));
        assert_eq!(pager.current(), 1);
        assert!(!pager.can_go_next(Some(&data)));
        assert!(!pager.next(Some(&data)));
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn previous_disabled_on_first_page() {
        let mut pager = Pager::default();
        let data = listing(0, 5);
        assert!(!pager.can_go_previous(Some(&data)));
        pager.next(Some(&data));
        assert!(pager.previous(Some(&data)));
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut pager = Pager::default();
        let data = listing(0, 3);
        assert!(!pager.go_to(3, Some(&data)));
        assert!(pager.go_to(2, Some(&data)));
        assert_eq!(pager.current(), 2);
    }
}

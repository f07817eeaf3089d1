/// State shared by every list-plus-form section: which tab is showing, the
/// records last fetched from the server, and whether a request is in flight.
///
/// Form drafts live on the controllers, one per tab, so switching tabs here
/// never touches unsubmitted input.
#[derive(Debug, Clone)]
pub struct SectionState<T, Tab> {
    active_tab: Tab,
    items: Vec<T>,
    loading: bool,
}

impl<T, Tab: Copy + PartialEq> SectionState<T, Tab> {
    pub fn new(initial_tab: Tab) -> Self {
        Self {
            active_tab: initial_tab,
            items: Vec::new(),
            loading: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn push_item(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes every item matching `predicate`; returns whether any was removed.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        self.items.len() != before
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_request(&mut self) {
        self.loading = true;
    }

    pub fn end_request(&mut self) {
        self.loading = false;
    }
}

/// Trims a form field, returning `None` when nothing but whitespace was typed.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Tab {
        Add,
        View,
    }

    #[test]
    fn test_switch_tab_keeps_items() {
        let mut state: SectionState<u32, Tab> = SectionState::new(Tab::Add);
        state.replace_items(vec![1, 2]);
        state.switch_tab(Tab::View);

        assert!(state.is_active(Tab::View));
        assert_eq!(state.items(), &[1, 2]);
    }

    #[test]
    fn test_remove_where() {
        let mut state: SectionState<u32, Tab> = SectionState::new(Tab::View);
        state.replace_items(vec![1, 2, 3]);

        assert!(state.remove_where(|n| *n == 2));
        assert!(!state.remove_where(|n| *n == 42));
        assert_eq!(state.items(), &[1, 3]);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  Aspirin "), Some("Aspirin".to_string()));
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
    }
}

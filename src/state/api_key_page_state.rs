//! ApiKeyPageState - Modal Targets and Visibility for the API Keys Page
//!
//! Owned by the page view. The edit modal doubles as the create dialog:
//! an open edit modal without a target means "create new".

use crate::constants::API_KEYS_LIMIT;
use crate::domain::api_key::ApiKeyRecord;
use crate::state::disclosure::Disclosure;

/// What the page shows for a given collection size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Whether the keys table is rendered
    pub show_table: bool,
    /// Whether the "add" button accepts clicks
    pub add_enabled: bool,
    /// Whether the limit-reached message is shown next to the button
    pub show_limit_message: bool,
}

impl PageLayout {
    pub fn for_count(count: usize) -> Self {
        let can_add = ApiKeyPageState::can_add(count);
        Self {
            show_table: count > 0,
            add_enabled: can_add,
            show_limit_message: !can_add,
        }
    }
}

/// Transient UI state of the API keys page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeyPageState {
    edit_target: Option<ApiKeyRecord>,
    delete_target: Option<String>,
    edit_modal: Disclosure,
    delete_modal: Disclosure,
}

impl ApiKeyPageState {
    /// Whether another key may be added to a collection of `count` keys
    pub fn can_add(count: usize) -> bool {
        count < API_KEYS_LIMIT
    }

    /// Open the edit modal in create mode. Refused at capacity.
    pub fn open_add(&mut self, count: usize) -> bool {
        if !Self::can_add(count) {
            return false;
        }
        self.edit_target = None;
        self.edit_modal.open();
        true
    }

    /// Load `record` into the edit modal and open it
    pub fn edit_click(&mut self, record: ApiKeyRecord) {
        self.edit_target = Some(record);
        self.edit_modal.open();
    }

    pub fn close_edit(&mut self) {
        self.edit_target = None;
        self.edit_modal.close();
    }

    /// Target `record` by name for deletion and open the confirmation
    pub fn delete_click(&mut self, record: &ApiKeyRecord) {
        self.delete_target = Some(record.name.clone());
        self.delete_modal.open();
    }

    pub fn close_delete(&mut self) {
        self.delete_target = None;
        self.delete_modal.close();
    }

    pub fn edit_target(&self) -> Option<&ApiKeyRecord> {
        self.edit_target.as_ref()
    }

    pub fn delete_target(&self) -> Option<&str> {
        self.delete_target.as_deref()
    }

    pub fn edit_modal(&self) -> Disclosure {
        self.edit_modal
    }

    pub fn delete_modal(&self) -> Disclosure {
        self.delete_modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<ApiKeyRecord> {
        (0..n)
            .map(|i| ApiKeyRecord::new(format!("key-{i}"), format!("token-{i}")))
            .collect()
    }

    #[test]
    fn test_add_enabled_below_limit() {
        for count in 0..API_KEYS_LIMIT {
            let layout = PageLayout::for_count(count);
            assert!(layout.add_enabled, "count {count}");
            assert!(!layout.show_limit_message, "count {count}");
        }
    }

    #[test]
    fn test_add_disabled_at_limit() {
        let layout = PageLayout::for_count(API_KEYS_LIMIT);
        assert!(!layout.add_enabled);
        assert!(layout.show_limit_message);
        assert!(layout.show_table);
    }

    #[test]
    fn test_empty_collection_hides_table() {
        let layout = PageLayout::for_count(0);
        assert!(!layout.show_table);
        assert!(layout.add_enabled);
        assert!(PageLayout::for_count(1).show_table);
    }

    #[test]
    fn test_open_add_is_create_mode() {
        let mut state = ApiKeyPageState::default();
        assert!(state.open_add(2));
        assert!(state.edit_modal().is_open());
        assert_eq!(state.edit_target(), None);
    }

    #[test]
    fn test_open_add_refused_at_capacity() {
        let mut state = ApiKeyPageState::default();
        assert!(!state.open_add(API_KEYS_LIMIT));
        assert!(!state.edit_modal().is_open());
    }

    #[test]
    fn test_edit_click_passes_exact_record() {
        let keys = records(3);
        let mut state = ApiKeyPageState::default();
        state.edit_click(keys[1].clone());
        assert!(state.edit_modal().is_open());
        assert_eq!(state.edit_target(), Some(&keys[1]));
        assert!(!state.delete_modal().is_open());
    }

    #[test]
    fn test_close_edit_without_saving_clears_target() {
        let mut state = ApiKeyPageState::default();
        state.edit_click(ApiKeyRecord::new("prod-key", "abc123"));
        state.close_edit();
        assert!(!state.edit_modal().is_open());
        assert_eq!(state.edit_target(), None);
        assert_eq!(state, ApiKeyPageState::default());
    }

    #[test]
    fn test_delete_click_targets_name() {
        let keys = records(2);
        let mut state = ApiKeyPageState::default();
        state.delete_click(&keys[0]);
        assert!(state.delete_modal().is_open());
        assert_eq!(state.delete_target(), Some("key-0"));

        state.close_delete();
        assert!(!state.delete_modal().is_open());
        assert_eq!(state.delete_target(), None);
    }

    #[test]
    fn test_modals_have_independent_lifecycles() {
        let keys = records(2);
        let mut state = ApiKeyPageState::default();
        state.edit_click(keys[0].clone());
        state.delete_click(&keys[1]);

        // Opening delete does not clear the edit target
        assert_eq!(state.edit_target(), Some(&keys[0]));

        state.close_delete();
        assert!(state.edit_modal().is_open());
        assert_eq!(state.edit_target(), Some(&keys[0]));
    }

    #[test]
    fn test_reopen_replaces_previous_target() {
        let keys = records(2);
        let mut state = ApiKeyPageState::default();
        state.edit_click(keys[0].clone());
        state.close_edit();
        assert!(state.open_add(keys.len()));
        assert_eq!(state.edit_target(), None);
    }
}

//! ApiKeyForm - Form State for the API Key Dialogs

use crate::domain::api_key::{ApiKeyRecord, ApiKeyRequest, validate_name};
use crate::error::Result;
use crate::state::api_keys_state::MutationOutcome;

/// In-flight request and last error of a dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitState {
    pending: Option<String>,
    error: Option<String>,
}

impl SubmitState {
    /// Track `request_id` as the dialog's in-flight request
    pub fn begin(&mut self, request_id: impl Into<String>) {
        self.pending = Some(request_id.into());
        self.error = None;
    }

    /// Show an error and allow resubmitting
    pub fn fail(&mut self, message: impl Into<String>) {
        self.pending = None;
        self.error = Some(message.into());
    }

    /// Apply a settled outcome. Returns true when the dialog should close.
    pub fn settle(&mut self, outcome: MutationOutcome) -> bool {
        match outcome {
            MutationOutcome::Succeeded => {
                self.pending = None;
                self.error = None;
                true
            }
            MutationOutcome::Failed(message) => {
                self.fail(message);
                false
            }
        }
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Whether the key dialog creates a new key or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// State behind the create/edit dialog
#[derive(Debug, Clone, Default)]
pub struct ApiKeyForm {
    target: Option<ApiKeyRecord>,
    submit: SubmitState,
}

impl ApiKeyForm {
    /// `None` opens the form in create mode
    pub fn new(target: Option<ApiKeyRecord>) -> Self {
        Self {
            target,
            submit: SubmitState::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.target.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn target(&self) -> Option<&ApiKeyRecord> {
        self.target.as_ref()
    }

    /// Value the name input starts with
    pub fn initial_name(&self) -> &str {
        self.target.as_ref().map(|r| r.name.as_str()).unwrap_or_default()
    }

    pub fn title_key(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => "modal-new-title",
            FormMode::Edit => "modal-edit-title",
        }
    }

    pub fn submit_label_key(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => "action-generate",
            FormMode::Edit => "action-save",
        }
    }

    /// Turn the entered name into a write request
    pub fn build_request(&self, raw_name: &str) -> Result<ApiKeyRequest> {
        let name = validate_name(raw_name)?;
        Ok(match &self.target {
            Some(record) => ApiKeyRequest::Update {
                token: record.token.clone(),
                name,
            },
            None => ApiKeyRequest::Create { name },
        })
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    pub fn submit_state_mut(&mut self) -> &mut SubmitState {
        &mut self.submit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode() {
        let form = ApiKeyForm::new(None);
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.initial_name(), "");
        assert_eq!(form.title_key(), "modal-new-title");
        assert_eq!(
            form.build_request(" web3 project ").expect("valid"),
            ApiKeyRequest::Create {
                name: "web3 project".to_string()
            }
        );
    }

    #[test]
    fn test_edit_mode_updates_by_token() {
        let form = ApiKeyForm::new(Some(ApiKeyRecord::new("prod-key", "abc123")));
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.initial_name(), "prod-key");
        assert_eq!(form.submit_label_key(), "action-save");
        assert_eq!(
            form.build_request("prod-key-2").expect("valid"),
            ApiKeyRequest::Update {
                token: "abc123".to_string(),
                name: "prod-key-2".to_string()
            }
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let form = ApiKeyForm::new(None);
        assert!(form.build_request("   ").is_err());
    }

    #[test]
    fn test_submit_state_success_closes() {
        let mut submit = SubmitState::default();
        submit.begin("req-1");
        assert!(submit.is_submitting());
        assert_eq!(submit.pending(), Some("req-1"));

        assert!(submit.settle(MutationOutcome::Succeeded));
        assert!(!submit.is_submitting());
        assert_eq!(submit.error(), None);
    }

    #[test]
    fn test_submit_state_failure_stays_open() {
        let mut submit = SubmitState::default();
        submit.begin("req-1");
        assert!(!submit.settle(MutationOutcome::Failed("HTTP 409".to_string())));
        assert!(!submit.is_submitting());
        assert_eq!(submit.error(), Some("HTTP 409"));

        // Resubmitting clears the old error
        submit.begin("req-2");
        assert_eq!(submit.error(), None);
    }
}

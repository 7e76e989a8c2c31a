//! ApiKeysState - Request Cache for the API Keys Resource
//!
//! Holds the last fetched collection plus the status of the list query and
//! of the most recent write. Write outcomes are keyed by request id so that
//! each modal only reacts to its own request.

use chrono::{DateTime, Local};

use crate::domain::api_key::ApiKeyRecord;

/// Status of the list query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

/// Status of the most recent write request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Pending { request_id: String },
    Succeeded { request_id: String },
    Failed { request_id: String, message: String },
}

/// Settled result of a write request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Succeeded,
    Failed(String),
}

impl MutationState {
    /// Outcome of `request_id`, if that request has settled
    pub fn outcome_for(&self, request_id: &str) -> Option<MutationOutcome> {
        match self {
            MutationState::Succeeded { request_id: id } if id == request_id => {
                Some(MutationOutcome::Succeeded)
            }
            MutationState::Failed {
                request_id: id,
                message,
            } if id == request_id => Some(MutationOutcome::Failed(message.clone())),
            _ => None,
        }
    }
}

/// State for the API keys collection
#[derive(Debug, Clone, Default)]
pub struct ApiKeysState {
    records: Vec<ApiKeyRecord>,
    query: QueryStatus,
    fetched_at: Option<DateTime<Local>>,
    mutation: MutationState,
}

impl ApiKeysState {
    /// Mark the list query as in flight
    pub fn start_loading(&mut self) {
        self.query = QueryStatus::Loading;
    }

    /// Replace the collection with freshly fetched records
    pub fn set_records(&mut self, records: Vec<ApiKeyRecord>) {
        self.records = records;
        self.query = QueryStatus::Ready;
        self.fetched_at = Some(Local::now());
    }

    /// Record a failed list query; previously loaded records are kept
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.query = QueryStatus::Failed {
            message: message.into(),
        };
    }

    pub fn begin_mutation(&mut self, request_id: impl Into<String>) {
        self.mutation = MutationState::Pending {
            request_id: request_id.into(),
        };
    }

    pub fn complete_mutation(&mut self, request_id: impl Into<String>) {
        self.mutation = MutationState::Succeeded {
            request_id: request_id.into(),
        };
    }

    pub fn fail_mutation(&mut self, request_id: impl Into<String>, message: impl Into<String>) {
        self.mutation = MutationState::Failed {
            request_id: request_id.into(),
            message: message.into(),
        };
    }

    pub fn records(&self) -> &[ApiKeyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self) -> &QueryStatus {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.query, QueryStatus::Loading)
    }

    pub fn fetched_at(&self) -> Option<&DateTime<Local>> {
        self.fetched_at.as_ref()
    }

    pub fn mutation(&self) -> &MutationState {
        &self.mutation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_lifecycle() {
        let mut state = ApiKeysState::default();
        assert_eq!(state.query(), &QueryStatus::Idle);
        assert!(state.fetched_at().is_none());

        state.start_loading();
        assert!(state.is_loading());

        state.set_records(vec![ApiKeyRecord::new("prod-key", "abc")]);
        assert_eq!(state.query(), &QueryStatus::Ready);
        assert_eq!(state.len(), 1);
        assert!(state.fetched_at().is_some());
    }

    #[test]
    fn test_failed_refetch_keeps_records() {
        let mut state = ApiKeysState::default();
        state.set_records(vec![ApiKeyRecord::new("a", "1"), ApiKeyRecord::new("b", "2")]);
        state.start_loading();
        state.fail_loading("HTTP 500");

        assert_eq!(
            state.query(),
            &QueryStatus::Failed {
                message: "HTTP 500".to_string()
            }
        );
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_outcome_matches_request_id() {
        let mut state = ApiKeysState::default();
        state.begin_mutation("req-1");
        assert_eq!(state.mutation().outcome_for("req-1"), None);

        state.complete_mutation("req-1");
        assert_eq!(
            state.mutation().outcome_for("req-1"),
            Some(MutationOutcome::Succeeded)
        );
        assert_eq!(state.mutation().outcome_for("req-2"), None);
    }

    #[test]
    fn test_failed_outcome_carries_message() {
        let mut state = ApiKeysState::default();
        state.fail_mutation("req-9", "HTTP 422");
        assert_eq!(
            state.mutation().outcome_for("req-9"),
            Some(MutationOutcome::Failed("HTTP 422".to_string()))
        );
    }
}

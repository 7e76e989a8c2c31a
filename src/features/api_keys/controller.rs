//! API Keys Controller
//!
//! Bridges UI actions to the service hub and the API keys request cache.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::api_key::ApiKeyRequest;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// API keys page controller
#[derive(Clone)]
pub struct ApiKeysController {
    entities: AppEntities,
}

impl ApiKeysController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Start a background read of the collection. Never blocks rendering.
    pub fn fetch_api_keys(&self, cx: &mut App) {
        self.entities.api_keys.update(cx, |state, cx| {
            state.start_loading();
            cx.notify();
        });

        match cx.try_global::<ServiceHub>() {
            Some(hub) => hub.fetch_api_keys(),
            None => tracing::warn!("ServiceHub not installed; API keys fetch skipped"),
        }
    }

    /// Send a write request and return its id
    pub fn submit(&self, request: ApiKeyRequest, cx: &mut App) -> String {
        let request_id = uuid::Uuid::new_v4().to_string();

        self.entities.api_keys.update(cx, |state, cx| {
            state.begin_mutation(request_id.clone());
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!(
                "Sending API key {} for \"{}\"",
                request.verb(),
                request.name()
            )));
            hub.mutate(request_id.clone(), request);
        } else {
            tracing::warn!("ServiceHub not installed; API key {} dropped", request.verb());
        }

        request_id
    }

    /// Open a URL in the system browser
    pub fn open_docs(&self, url: &str, cx: &mut App) {
        tracing::debug!("Opening {}", url);
        cx.open_url(url);
    }
}

//! ServiceHub - Background Request Handling
//!
//! Owns the HTTP client on a dedicated thread with its own Tokio runtime.
//! The UI sends `ServiceCommand`s; results come back as `AppEvent`s which the
//! workspace event pump applies to the entities.
//!
//! ```text
//! UI ──ServiceCommand──▶ service thread ──HTTP──▶ backend
//! UI ◀──AppEvent──────── service thread
//! ```

use std::sync::Arc;

use gpui::Global;
use parking_lot::RwLock;

use crate::domain::api_key::ApiKeyRequest;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::services::api_client::ApiClient;

/// Commands that can be sent to the service thread
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Read the API key collection
    FetchApiKeys,
    /// Run a write request; a successful write refetches the collection
    Mutate {
        request_id: String,
        request: ApiKeyRequest,
    },
    /// Replace configuration and rebuild the HTTP client
    UpdateConfig(AppConfig),
}

/// ServiceHub manages the background request thread
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to services
    command_tx: flume::Sender<ServiceCommand>,
    /// Current configuration
    config: Arc<RwLock<AppConfig>>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its worker thread
    pub fn new(config: AppConfig, event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();
        let config = Arc::new(RwLock::new(config));

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
            config: config.clone(),
        };

        hub.start_command_handler(command_rx, config, event_tx);
        hub
    }

    /// Start the command handler thread
    fn start_command_handler(
        &self,
        command_rx: flume::Receiver<ServiceCommand>,
        config: Arc<RwLock<AppConfig>>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        let spawned = std::thread::Builder::new()
            .name("api-keys-service".to_string())
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        tracing::error!("Failed to create Tokio runtime: {}", e);
                        let _ = event_tx.send(AppEvent::error(format!(
                            "Background service unavailable: {e}"
                        )));
                        return;
                    }
                };

                rt.block_on(run_command_loop(command_rx, config, event_tx));
            });

        if let Err(e) = spawned {
            tracing::error!("Failed to spawn service thread: {}", e);
            self.log(AppEvent::error(format!("Background service unavailable: {e}")));
        }
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) {
        if self.command_tx.send(cmd).is_err() {
            tracing::warn!("Service thread is gone; command dropped");
        }
    }

    /// Read the API key collection in the background
    pub fn fetch_api_keys(&self) {
        self.send(ServiceCommand::FetchApiKeys);
    }

    /// Run a write request in the background
    pub fn mutate(&self, request_id: impl Into<String>, request: ApiKeyRequest) {
        self.send(ServiceCommand::Mutate {
            request_id: request_id.into(),
            request,
        });
    }

    /// Update configuration
    pub fn update_config(&self, config: AppConfig) {
        self.send(ServiceCommand::UpdateConfig(config));
    }

    /// Get current config
    pub fn config(&self) -> AppConfig {
        self.config.read().clone()
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Process commands in arrival order until every sender is dropped
async fn run_command_loop(
    command_rx: flume::Receiver<ServiceCommand>,
    config: Arc<RwLock<AppConfig>>,
    event_tx: flume::Sender<AppEvent>,
) {
    let mut client = build_client(&config.read(), &event_tx);

    while let Ok(cmd) = command_rx.recv_async().await {
        if let ServiceCommand::UpdateConfig(new_config) = cmd {
            client = build_client(&new_config, &event_tx);
            *config.write() = new_config.clone();
            let _ = event_tx.send(AppEvent::info("Configuration updated"));
            let _ = event_tx.send(AppEvent::ConfigLoaded { config: new_config });
            continue;
        }

        match &client {
            Some(client) => handle_command(client, cmd, &event_tx).await,
            None => reject_command(cmd, &event_tx),
        }
    }

    tracing::debug!("Service command loop finished");
}

fn build_client(config: &AppConfig, event_tx: &flume::Sender<AppEvent>) -> Option<ApiClient> {
    match ApiClient::new(&config.api) {
        Ok(client) => {
            tracing::info!("API client ready for {}", config.api.base_url);
            Some(client)
        }
        Err(e) => {
            tracing::error!("Failed to build API client: {}", e);
            let _ = event_tx.send(AppEvent::error(format!("Failed to build API client: {e}")));
            None
        }
    }
}

/// Answer a command when no client could be built
fn reject_command(cmd: ServiceCommand, event_tx: &flume::Sender<AppEvent>) {
    let message = "API client is not configured".to_string();
    let event = match cmd {
        ServiceCommand::FetchApiKeys => AppEvent::ApiKeysFetchFailed { message },
        ServiceCommand::Mutate { request_id, .. } => AppEvent::ApiKeyMutationFailed { request_id, message },
        ServiceCommand::UpdateConfig(_) => return,
    };
    let _ = event_tx.send(event);
}

/// Run one command against the backend and report the result
pub(crate) async fn handle_command(
    client: &ApiClient,
    cmd: ServiceCommand,
    event_tx: &flume::Sender<AppEvent>,
) {
    match cmd {
        ServiceCommand::FetchApiKeys => fetch_and_publish(client, event_tx).await,
        ServiceCommand::Mutate { request_id, request } => {
            match client.execute(&request).await {
                Ok(()) => {
                    tracing::info!("API key {} succeeded for {:?}", request.verb(), request.name());
                    let _ = event_tx.send(AppEvent::info(format!(
                        "API key \"{}\": {} succeeded",
                        request.name(),
                        request.verb()
                    )));
                    let _ = event_tx.send(AppEvent::ApiKeyMutated { request_id, request });
                    // The cached collection is stale after any write
                    fetch_and_publish(client, event_tx).await;
                }
                Err(e) => {
                    tracing::warn!("API key {} failed: {}", request.verb(), e);
                    let message = e.to_string();
                    let _ = event_tx.send(AppEvent::error(format!(
                        "API key \"{}\": {} failed: {}",
                        request.name(),
                        request.verb(),
                        message
                    )));
                    let _ = event_tx.send(AppEvent::ApiKeyMutationFailed { request_id, message });
                }
            }
        }
        ServiceCommand::UpdateConfig(_) => {}
    }
}

async fn fetch_and_publish(client: &ApiClient, event_tx: &flume::Sender<AppEvent>) {
    let _ = event_tx.send(AppEvent::ApiKeysLoading);
    match client.list_api_keys().await {
        Ok(keys) => {
            let _ = event_tx.send(AppEvent::debug(format!("Loaded {} API keys", keys.len())));
            let _ = event_tx.send(AppEvent::ApiKeysLoaded { keys });
        }
        Err(e) => {
            tracing::warn!("Failed to fetch API keys: {}", e);
            let message = e.to_string();
            let _ = event_tx.send(AppEvent::error(format!("Failed to fetch API keys: {message}")));
            let _ = event_tx.send(AppEvent::ApiKeysFetchFailed { message });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ApiConfig;

    fn client_for(server: &mockito::Server) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: server.url(),
            ..Default::default()
        })
        .expect("client")
    }

    fn drain(rx: &flume::Receiver<AppEvent>) -> Vec<AppEvent> {
        rx.try_iter().collect()
    }

    #[tokio::test]
    async fn test_fetch_publishes_records() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/account/api-keys")
            .with_status(200)
            .with_body(r#"[{"name":"prod-key","token":"abc"}]"#)
            .create_async()
            .await;

        let (tx, rx) = flume::unbounded();
        handle_command(&client_for(&server), ServiceCommand::FetchApiKeys, &tx).await;

        let events = drain(&rx);
        assert!(matches!(events.first(), Some(AppEvent::ApiKeysLoading)));
        assert!(events.iter().any(|e| matches!(
            e,
            AppEvent::ApiKeysLoaded { keys } if keys.len() == 1 && keys[0].name == "prod-key"
        )));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported_not_raised() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/account/api-keys")
            .with_status(503)
            .create_async()
            .await;

        let (tx, rx) = flume::unbounded();
        handle_command(&client_for(&server), ServiceCommand::FetchApiKeys, &tx).await;

        let events = drain(&rx);
        assert!(events.iter().any(|e| matches!(
            e,
            AppEvent::ApiKeysFetchFailed { message } if message.contains("503")
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            AppEvent::Log { level: crate::state::log_state::LogLevel::Error, .. }
        )));
    }

    #[tokio::test]
    async fn test_successful_mutation_refetches() {
        let mut server = mockito::Server::new_async().await;
        let _delete = server
            .mock("DELETE", "/api/account/api-keys/prod-key")
            .with_status(200)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/api/account/api-keys")
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let (tx, rx) = flume::unbounded();
        let cmd = ServiceCommand::Mutate {
            request_id: "req-1".to_string(),
            request: ApiKeyRequest::Delete {
                name: "prod-key".to_string(),
            },
        };
        handle_command(&client_for(&server), cmd, &tx).await;

        let events = drain(&rx);
        assert!(events.iter().any(|e| matches!(
            e,
            AppEvent::ApiKeyMutated { request_id, .. } if request_id == "req-1"
        )));
        assert!(events.iter().any(|e| matches!(e, AppEvent::ApiKeysLoaded { keys } if keys.is_empty())));
        list.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_mutation_reports_request_id() {
        let mut server = mockito::Server::new_async().await;
        let _create = server
            .mock("POST", "/api/account/api-keys")
            .with_status(422)
            .create_async()
            .await;

        let (tx, rx) = flume::unbounded();
        let cmd = ServiceCommand::Mutate {
            request_id: "req-7".to_string(),
            request: ApiKeyRequest::Create {
                name: "web3".to_string(),
            },
        };
        handle_command(&client_for(&server), cmd, &tx).await;

        let events = drain(&rx);
        assert!(events.iter().any(|e| matches!(
            e,
            AppEvent::ApiKeyMutationFailed { request_id, message }
                if request_id == "req-7" && message.contains("422")
        )));
        assert!(!events.iter().any(|e| matches!(e, AppEvent::ApiKeysLoading)));
    }

    #[test]
    fn test_reject_without_client() {
        let (tx, rx) = flume::unbounded();
        reject_command(
            ServiceCommand::Mutate {
                request_id: "req-3".to_string(),
                request: ApiKeyRequest::Delete {
                    name: "x".to_string(),
                },
            },
            &tx,
        );
        reject_command(ServiceCommand::FetchApiKeys, &tx);

        let events = drain(&rx);
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], AppEvent::ApiKeyMutationFailed { request_id, .. } if request_id == "req-3"));
        assert!(matches!(&events[1], AppEvent::ApiKeysFetchFailed { .. }));
    }
}

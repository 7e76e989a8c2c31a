//! ApiClient - HTTP Client for the Account API Keys Resource
//!
//! ```text
//! GET    {base}/api/account/api-keys          list
//! POST   {base}/api/account/api-keys          create  {"name": ...}
//! PUT    {base}/api/account/api-keys/{token}  rename  {"name": ...}
//! DELETE {base}/api/account/api-keys/{name}   delete
//! ```
//!
//! Every non-2xx answer becomes `Error::Network`; callers decide whether to
//! surface or ignore it.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};

use crate::constants::API_KEYS_PATH;
use crate::domain::api_key::{ApiKeyPayload, ApiKeyRecord, ApiKeyRequest};
use crate::domain::config::ApiConfig;
use crate::error::{Error, Result};

/// Client for the API keys endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| Error::Invalid {
            message: format!("invalid base URL {:?}: {e}", config.base_url),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Invalid {
                message: format!("base URL {:?} cannot carry a path", config.base_url),
            });
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// URL of the collection, or of one member when `member` is given
    pub fn endpoint(&self, member: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| Error::Invalid {
                message: format!("base URL {} cannot carry a path", self.base_url),
            })?;
            segments.pop_if_empty().extend(API_KEYS_PATH);
            if let Some(member) = member {
                segments.push(member);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Fetch the current collection
    pub async fn list_api_keys(&self) -> Result<Vec<ApiKeyRecord>> {
        let url = self.endpoint(None)?;
        tracing::debug!("GET {}", url);
        let response = self.request(Method::GET, url).send().await?;
        let records = ensure_success(response)?.json::<Vec<ApiKeyRecord>>().await?;
        Ok(records)
    }

    pub async fn create_api_key(&self, name: &str) -> Result<()> {
        let url = self.endpoint(None)?;
        tracing::debug!("POST {}", url);
        let response = self
            .request(Method::POST, url)
            .json(&ApiKeyPayload { name })
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    pub async fn update_api_key(&self, token: &str, name: &str) -> Result<()> {
        let url = self.endpoint(Some(token))?;
        tracing::debug!("PUT {}", url);
        let response = self
            .request(Method::PUT, url)
            .json(&ApiKeyPayload { name })
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    pub async fn delete_api_key(&self, name: &str) -> Result<()> {
        let url = self.endpoint(Some(name))?;
        tracing::debug!("DELETE {}", url);
        let response = self.request(Method::DELETE, url).send().await?;
        ensure_success(response)?;
        Ok(())
    }

    /// Dispatch a write request to the matching endpoint
    pub async fn execute(&self, request: &ApiKeyRequest) -> Result<()> {
        match request {
            ApiKeyRequest::Create { name } => self.create_api_key(name).await,
            ApiKeyRequest::Update { token, name } => self.update_api_key(token, name).await,
            ApiKeyRequest::Delete { name } => self.delete_api_key(name).await,
        }
    }
}

/// Map a non-success status to `Error::Network`
fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Network {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: server.url(),
            timeout_secs: 5,
            auth_token: None,
            docs_url: None,
        })
        .expect("client")
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "https://explorer.example.org/proxy/".to_string(),
            ..Default::default()
        })
        .expect("client");

        assert_eq!(
            client.endpoint(None).expect("url").as_str(),
            "https://explorer.example.org/proxy/api/account/api-keys"
        );
        assert_eq!(
            client.endpoint(Some("my key")).expect("url").as_str(),
            "https://explorer.example.org/proxy/api/account/api-keys/my%20key"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::Invalid { .. })));

        let result = ApiClient::new(&ApiConfig {
            base_url: "mailto:keys@example.org".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }

    #[tokio::test]
    async fn test_list_api_keys() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/account/api-keys")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name":"prod-key","token":"abc123"}]"#)
            .create_async()
            .await;

        let keys = client_for(&server).list_api_keys().await.expect("list");
        assert_eq!(keys, vec![ApiKeyRecord::new("prod-key", "abc123")]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_non_success_is_network_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/account/api-keys")
            .with_status(500)
            .create_async()
            .await;

        let err = client_for(&server)
            .list_api_keys()
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::Network { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/account/api-keys")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = ApiClient::new(&ApiConfig {
            base_url: server.url(),
            auth_token: Some("secret".to_string()),
            ..Default::default()
        })
        .expect("client");

        assert!(client.list_api_keys().await.expect("list").is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_execute_routes_requests() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/api/account/api-keys")
            .match_body(Matcher::Json(serde_json::json!({"name": "web3"})))
            .with_status(200)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/api/account/api-keys/abc123")
            .match_body(Matcher::Json(serde_json::json!({"name": "renamed"})))
            .with_status(200)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/account/api-keys/prod-key")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        client
            .execute(&ApiKeyRequest::Create {
                name: "web3".to_string(),
            })
            .await
            .expect("create");
        client
            .execute(&ApiKeyRequest::Update {
                token: "abc123".to_string(),
                name: "renamed".to_string(),
            })
            .await
            .expect("update");
        client
            .execute(&ApiKeyRequest::Delete {
                name: "prod-key".to_string(),
            })
            .await
            .expect("delete");

        create.assert_async().await;
        update.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/api/account/api-keys/prod-key")
            .with_status(404)
            .create_async()
            .await;

        let err = client_for(&server)
            .delete_api_key("prod-key")
            .await
            .expect_err("should fail");
        assert_eq!(err.status(), Some(404));
    }
}

//! Client module for connecting to the VoxBox backend API.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::identity::UserKey;
use crate::protocol::Envelope;

const DEFAULT_SERVER_ADDR: &str = "localhost:8080";

/// Transport-level timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for interacting with the VoxBox backend API.
///
/// The client is a single choke point for all outbound calls: it attaches
/// the per-device identity header (`X-User-Key`), applies the transport
/// timeout, and unwraps the `{success, data, message}` response envelope.
/// It is cheap to clone and safe to share between tasks.
#[derive(Clone)]
pub struct Client {
    user_key: String,
    server_addr: String,
    use_https: bool,
    path: String,
    additional_headers: Vec<(String, String)>,
    timeout: Duration,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointed at the default local backend.
    ///
    /// # Arguments
    ///
    /// * `user_key` - The per-installation identity to send with every
    ///   request (see [`UserKey::load_or_create`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use voxbox::{Client, UserKey};
    ///
    /// let key = UserKey::generate();
    /// let client = Client::new(&key);
    /// ```
    pub fn new(user_key: &UserKey) -> Self {
        Client {
            user_key: user_key.as_str().to_string(),
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            use_https: false,
            path: String::new(),
            additional_headers: Vec::new(),
            timeout: REQUEST_TIMEOUT,
            http: reqwest::Client::new(),
        }
    }

    /// Creates a new client from environment variables.
    ///
    /// Uses `VOXBOX_USER_KEY` and `VOXBOX_BASE_URL` environment variables if
    /// the corresponding parameters are `None`. The base URL falls back to
    /// the default local address when neither is given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - User key is not provided and `VOXBOX_USER_KEY` is not set
    /// - Base URL parsing fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// use voxbox::Client;
    ///
    /// // Uses environment variables
    /// let client = Client::from_env(None, None)?;
    /// # Ok::<(), voxbox::Error>(())
    /// ```
    pub fn from_env(base_url: Option<String>, user_key: Option<UserKey>) -> Result<Self> {
        let user_key = match user_key.or_else(UserKey::from_env) {
            None => {
                return Err(Error::Config(
                    "user key not provided and VOXBOX_USER_KEY not set".to_string(),
                ))
            }
            Some(key) => key,
        };
        let client = Client::new(&user_key);
        let client = match base_url.or_else(crate::base_url_from_env) {
            None => client,
            Some(base_url) => client.with_base_url(&base_url)?,
        };
        Ok(client)
    }

    /// Sets the identity sent as `X-User-Key` (builder pattern).
    pub fn with_user_key(mut self, user_key: &UserKey) -> Self {
        self.user_key = user_key.as_str().to_string();
        self
    }

    /// Sets the server address for this client (builder pattern).
    ///
    /// # Arguments
    ///
    /// * `server_addr` - The server address (e.g., "api.voxbox.example:8443")
    pub fn with_server_addr(mut self, server_addr: &str) -> Self {
        self.server_addr = server_addr.to_string();
        self
    }

    /// Sets whether to use HTTPS (builder pattern).
    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Sets the base path prepended to every endpoint (builder pattern).
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Overrides the transport timeout (builder pattern). Defaults to 60
    /// seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds an additional HTTP header to be sent with each request (builder
    /// pattern).
    pub fn with_additional_header(mut self, key: &str, value: &str) -> Self {
        self.additional_headers.push((key.to_string(), value.to_string()));
        self
    }

    /// Sets the server configuration from a complete base URL (builder
    /// pattern).
    ///
    /// Parses the URL to extract the server address, port, scheme, and path.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use voxbox::{Client, UserKey};
    ///
    /// let client = Client::new(&UserKey::generate())
    ///     .with_base_url("https://api.voxbox.example:8443/v1")?;
    /// # Ok::<(), voxbox::Error>(())
    /// ```
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let url = url::Url::parse(base_url)
            .map_err(|e| Error::Config(format!("cannot parse base URL {base_url}: {e}")))?;
        self.server_addr = url.host_str().unwrap_or(DEFAULT_SERVER_ADDR).to_string();
        if let Some(port) = url.port() {
            self.server_addr = format!("{}:{}", self.server_addr, port);
        }
        self.use_https = url.scheme() == "https";
        self.path = url.path().trim_start_matches('/').trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Returns the identity this client sends as `X-User-Key`.
    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    /// Constructs the full URL for a given endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path (e.g., "api/tts/voices")
    pub fn http_url(&self, endpoint: &str) -> String {
        let protocol = if self.use_https { "https" } else { "http" };
        if self.path.is_empty() {
            format!("{protocol}://{}/{endpoint}", self.server_addr)
        } else {
            format!("{protocol}://{}/{}/{endpoint}", self.server_addr, self.path)
        }
    }

    /// Performs a one-shot text-to-speech generation.
    ///
    /// This is a convenience method that delegates to
    /// [`crate::tts::generate`].
    pub async fn generate(&self, raw_text: &str, voice_name: &str) -> Result<crate::protocol::tts::Generated> {
        crate::tts::generate(self, raw_text, voice_name).await
    }

    /// Lists the voices offered by the classic TTS engine.
    ///
    /// This is a convenience method that delegates to [`crate::tts::voices`].
    pub async fn voices(&self) -> Result<Vec<crate::protocol::tts::Voice>> {
        crate::tts::voices(self).await
    }

    /// Synthesizes speech with the v2 engine.
    ///
    /// This is a convenience method that delegates to
    /// [`crate::tts::v2_synthesize`].
    pub async fn synthesize(
        &self,
        request: crate::protocol::tts::V2Request,
    ) -> Result<crate::protocol::tts::V2Response> {
        crate::tts::v2_synthesize(self, request).await
    }

    fn apply_headers(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request = request
            .timeout(self.timeout)
            .header("X-User-Key", &self.user_key)
            .header("x-api-source", "rust-client");
        for (key, value) in self.additional_headers.iter() {
            request = request.header(key, value);
        }
        request
    }

    /// Sends a prepared request and unwraps the response envelope.
    ///
    /// Non-2xx statuses and transport failures surface as
    /// [`Error::Transport`]; a body that is not a valid envelope surfaces as
    /// [`Error::Decode`]; a `success:false` envelope surfaces as
    /// [`Error::Api`]. Every failure is logged, none is swallowed.
    async fn dispatch(&self, url: &str, request: reqwest::RequestBuilder) -> Result<Envelope> {
        tracing::debug!(%url, "sending request");
        let response = request.send().await.map_err(|e| {
            tracing::error!(%url, error = %e, "transport failure");
            Error::Transport(e)
        })?;
        let response = response.error_for_status().map_err(|e| {
            tracing::error!(%url, error = %e, "request rejected with error status");
            Error::Transport(e)
        })?;
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(%url, error = %e, "failed to read response body");
            Error::Transport(e)
        })?;
        let envelope: Envelope = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(%url, error = %e, "response body is not a valid envelope");
            Error::Decode(e)
        })?;
        if !envelope.success {
            tracing::error!(%url, message = ?envelope.message, "backend reported failure");
        }
        Ok(envelope)
    }

    pub(crate) async fn get<T>(&self, endpoint: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.get_with_query(endpoint, &[]).await
    }

    pub(crate) async fn get_with_query<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.http_url(endpoint);
        let mut request = self.apply_headers(self.http.get(&url));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.dispatch(&url, request).await?.into_data()
    }

    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.http_url(endpoint);
        let request = self.apply_headers(self.http.post(&url)).json(body);
        self.dispatch(&url, request).await?.into_data()
    }

    /// POST with parameters in the query string and an empty body, used by
    /// the handful of endpoints that take no request body.
    pub(crate) async fn post_with_query<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.http_url(endpoint);
        let request = self.apply_headers(self.http.post(&url)).query(query);
        self.dispatch(&url, request).await?.into_data()
    }

    pub(crate) async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.http_url(endpoint);
        let request = self.apply_headers(self.http.put(&url)).json(body);
        self.dispatch(&url, request).await?.into_data()
    }

    pub(crate) async fn delete<T>(&self, endpoint: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.http_url(endpoint);
        let request = self.apply_headers(self.http.delete(&url));
        self.dispatch(&url, request).await?.into_data()
    }

    pub(crate) async fn delete_with_body<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.http_url(endpoint);
        let request = self.apply_headers(self.http.delete(&url)).json(body);
        self.dispatch(&url, request).await?.into_data()
    }

    /// Sends a multipart file upload.
    ///
    /// Upload is a parallel path next to the JSON helpers, but it carries
    /// the same identity header and interprets the same response envelope.
    pub(crate) async fn upload<T>(&self, endpoint: &str, file_name: &str, bytes: Vec<u8>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.http_url(endpoint);
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let request = self.apply_headers(self.http.post(&url)).multipart(form);
        self.dispatch(&url, request).await?.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        Client::new(&UserKey::from("test-key"))
    }

    #[test]
    fn http_url_defaults_to_local_backend() {
        let client = test_client();
        assert_eq!(client.http_url("api/tts/voices"), "http://localhost:8080/api/tts/voices");
    }

    #[test]
    fn http_url_includes_base_path() {
        let client = test_client().with_path("studio");
        assert_eq!(client.http_url("api/tts/voices"), "http://localhost:8080/studio/api/tts/voices");
    }

    #[test]
    fn http_url_uses_https_when_enabled() {
        let client = test_client().with_server_addr("api.voxbox.example").with_https(true);
        assert_eq!(client.http_url("api/auth/info"), "https://api.voxbox.example/api/auth/info");
    }

    #[test]
    fn with_base_url_extracts_all_parts() {
        let client = test_client().with_base_url("https://api.voxbox.example:8443/v1/").unwrap();
        assert_eq!(client.server_addr, "api.voxbox.example:8443");
        assert!(client.use_https);
        assert_eq!(client.path, "v1");
        assert_eq!(client.http_url("api/vip/plans"), "https://api.voxbox.example:8443/v1/api/vip/plans");
    }

    #[test]
    fn with_base_url_accepts_plain_local_address() {
        let client = test_client().with_base_url("http://127.0.0.1:9090").unwrap();
        assert_eq!(client.http_url("api/user/profile"), "http://127.0.0.1:9090/api/user/profile");
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        assert!(test_client().with_base_url("not a url").is_err());
    }

    #[test]
    fn user_key_is_exposed_and_overridable() {
        let client = test_client().with_user_key(&UserKey::from("other"));
        assert_eq!(client.user_key(), "other");
    }
}

use super::state::ApiState;
use crate::error::ApiError;
use crate::utils::error_helpers::{convert_json_error, convert_request_error, convert_url_error};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_VERSION: &str = "v5";
pub const DEFAULT_API_LANG: &str = "en-US";
pub const DEFAULT_API_PREFIX: &str = "api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("review-cli/", env!("CARGO_PKG_VERSION"));

/// Result of a single API call: the decoded payload or the reason it failed.
pub type ApiResponse<T> = Result<T, ApiError>;

/// True iff the response carries an error instead of a payload.
pub fn is_error_response<T>(response: &ApiResponse<T>) -> bool {
    response.is_err()
}

/// Effective API host. Empty when requests go through the local proxy or no
/// host is configured, so URLs stay relative to the proxy origin.
pub fn get_api_host(api_host: Option<&str>, use_insecure_proxy: bool) -> String {
    if use_insecure_proxy {
        return String::new();
    }
    api_host.unwrap_or_default().to_string()
}

/// Parts of an API URL. `None` for `prefix` or `version` drops that segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeApiUrl<'a> {
    pub host: Option<&'a str>,
    pub prefix: Option<&'a str>,
    pub version: Option<&'a str>,
    pub path: &'a str,
}

impl<'a> MakeApiUrl<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            host: None,
            prefix: Some(DEFAULT_API_PREFIX),
            version: Some(DEFAULT_API_VERSION),
            path,
        }
    }

    pub fn host(mut self, host: &'a str) -> Self {
        self.host = Some(host);
        self
    }

    pub fn prefix(mut self, prefix: Option<&'a str>) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn version(mut self, version: Option<&'a str>) -> Self {
        self.version = version;
        self
    }
}

/// `{host}/{prefix}/{version}{path}`, with `path` forced to start with `/`.
pub fn make_api_url(parts: MakeApiUrl<'_>) -> String {
    let mut url = parts.host.unwrap_or_default().trim_end_matches('/').to_string();

    if let Some(prefix) = parts.prefix {
        url.push('/');
        url.push_str(prefix);
    }
    if let Some(version) = parts.version {
        url.push('/');
        url.push_str(version);
    }
    if !parts.path.starts_with('/') {
        url.push('/');
    }
    url.push_str(parts.path);
    url
}

/// Caller's endpoint with a leading slash. Used in error messages.
pub fn with_leading_slash(endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{}", endpoint)
    }
}

/// Endpoint with both a leading and a trailing slash.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let mut path = with_leading_slash(endpoint);
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// One `call_api` invocation. Unset `version` and `lang` fall back to the
/// client's default version and the state's language.
#[derive(Debug, Clone)]
pub struct CallApiParams {
    pub endpoint: String,
    pub method: Method,
    pub version: Option<String>,
    pub lang: Option<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl CallApiParams {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::GET,
            version: None,
            lang: None,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ReviewClient {
    client: Client,
    pub api_host: String,
    pub default_version: String,
    /// Base for relative URLs when `api_host` is empty.
    pub origin: Option<Url>,
    timeout_secs: u64,
}

impl ReviewClient {
    // Create client with default settings
    pub fn new(api_host: String) -> Result<Self, ApiError> {
        Self::with_timeout(api_host, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(api_host: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::ClientInit {
                message: e.to_string(),
            })?;

        Ok(ReviewClient {
            client,
            api_host: api_host.trim_end_matches('/').to_string(),
            default_version: DEFAULT_API_VERSION.to_string(),
            origin: None,
            timeout_secs,
        })
    }

    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    pub fn with_origin(mut self, origin: &str) -> Result<Self, ApiError> {
        let url = Url::parse(origin).map_err(|e| convert_url_error(e, origin))?;
        self.origin = Some(url);
        Ok(self)
    }

    fn resolve_url(&self, url: &str) -> Result<Url, ApiError> {
        match &self.origin {
            Some(origin) if url.starts_with('/') => origin.join(url),
            _ => Url::parse(url),
        }
        .map_err(|e| convert_url_error(e, url))
    }

    /// Full request URL including `lang` and query parameters.
    pub fn request_url(&self, state: &ApiState, params: &CallApiParams) -> Result<Url, ApiError> {
        let path = normalize_endpoint(&params.endpoint);
        let version = params.version.as_deref().unwrap_or(&self.default_version);
        let raw = make_api_url(
            MakeApiUrl::new(&path)
                .host(&self.api_host)
                .version(Some(version)),
        );

        let mut url = self.resolve_url(&raw)?;
        {
            let lang = params.lang.as_deref().unwrap_or(&state.lang);
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("lang", lang);
            for (key, value) in &params.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub fn build_request(
        &self,
        state: &ApiState,
        params: &CallApiParams,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.request_url(state, params)?;
        let mut request = self.client.request(params.method.clone(), url);

        if let Some(token) = state.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &params.body {
            request = request.json(body);
        }

        Ok(request)
    }

    /// Send one request and decode the JSON body. Non-2xx statuses and
    /// transport failures come back as `Err`; nothing is retried.
    pub async fn call_api<T>(&self, state: &ApiState, params: CallApiParams) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        let method = params.method.as_str().to_string();
        let path = with_leading_slash(&params.endpoint);

        let request = self.build_request(state, &params)?;
        debug!(%method, %path, authenticated = state.is_authenticated(), "calling API");

        let response = request.send().await.map_err(|e| {
            warn!(%method, %path, error = %e, "API request failed");
            convert_request_error(e, &method, &path, self.timeout_secs)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%method, %path, status = status.as_u16(), "unexpected API status");
            return Err(ApiError::UnexpectedStatus {
                method,
                path,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| convert_request_error(e, &method, &path, self.timeout_secs))?;

        // 204 and other empty bodies decode as JSON null
        let body: &[u8] = if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map_err(|e| convert_json_error(e, &method, &path))
    }
}

//! Endpoint wrappers. Each one is `call_api` with a fixed path template.

use super::client::{ApiResponse, CallApiParams, ReviewClient};
use super::models::{User, Version, VersionsListItem};
use super::state::ApiState;
use reqwest::Method;

pub fn version_endpoint(addon_id: u64, version_id: u64) -> String {
    format!("reviewers/addon/{}/versions/{}/", addon_id, version_id)
}

pub fn versions_list_endpoint(addon_id: u64) -> String {
    format!("reviewers/addon/{}/versions/", addon_id)
}

pub fn diff_endpoint(addon_id: u64, base_version_id: u64, head_version_id: u64) -> String {
    format!(
        "reviewers/addon/{}/versions/{}/compare_to/{}/",
        addon_id, base_version_id, head_version_id
    )
}

pub const CURRENT_USER_ENDPOINT: &str = "accounts/profile/";
pub const SESSION_ENDPOINT: &str = "accounts/session/";

fn with_file(params: CallApiParams, path: Option<&str>) -> CallApiParams {
    match path {
        Some(path) => params.query("file", path),
        None => params,
    }
}

impl ReviewClient {
    /// Fetch a version, optionally selecting a file within it
    pub async fn get_version(
        &self,
        state: &ApiState,
        addon_id: u64,
        version_id: u64,
        path: Option<&str>,
    ) -> ApiResponse<Version> {
        let params = with_file(
            CallApiParams::new(version_endpoint(addon_id, version_id)),
            path,
        );
        self.call_api(state, params).await
    }

    pub async fn get_versions_list(
        &self,
        state: &ApiState,
        addon_id: u64,
    ) -> ApiResponse<Vec<VersionsListItem>> {
        self.call_api(state, CallApiParams::new(versions_list_endpoint(addon_id)))
            .await
    }

    /// Compare `head_version_id` against `base_version_id`
    pub async fn get_diff(
        &self,
        state: &ApiState,
        addon_id: u64,
        base_version_id: u64,
        head_version_id: u64,
        path: Option<&str>,
    ) -> ApiResponse<Version> {
        let params = with_file(
            CallApiParams::new(diff_endpoint(addon_id, base_version_id, head_version_id)),
            path,
        );
        self.call_api(state, params).await
    }

    pub async fn get_current_user(&self, state: &ApiState) -> ApiResponse<User> {
        self.call_api(state, CallApiParams::new(CURRENT_USER_ENDPOINT))
            .await
    }

    /// Invalidate the server-side session for the current token
    pub async fn log_out_from_server(&self, state: &ApiState) -> ApiResponse<()> {
        let params = CallApiParams::new(SESSION_ENDPOINT).method(Method::DELETE);
        let _: serde_json::Value = self.call_api(state, params).await?;
        Ok(())
    }
}

use super::client::DEFAULT_API_LANG;

/// Auth token and language preference read by every API call.
///
/// Created at startup and only changed on login/logout; the client never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiState {
    pub auth_token: Option<String>,
    pub lang: String,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            auth_token: None,
            lang: DEFAULT_API_LANG.to_string(),
        }
    }
}

impl ApiState {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            auth_token: None,
            lang: lang.into(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Token to send, if any. An empty token counts as no token.
    pub fn bearer_token(&self) -> Option<&str> {
        self.auth_token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ApiState::default();
        assert_eq!(state.lang, "en-US");
        assert!(state.auth_token.is_none());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_sent() {
        let state = ApiState::new("fr").with_token("");
        assert_eq!(state.bearer_token(), None);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_with_token() {
        let state = ApiState::new("de").with_token("secret");
        assert_eq!(state.bearer_token(), Some("secret"));
        assert_eq!(state.lang, "de");
    }
}

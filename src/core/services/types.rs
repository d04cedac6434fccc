/// Authentication state as reported by `AuthService::status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub lang: String,
}

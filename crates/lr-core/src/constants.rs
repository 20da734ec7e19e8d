pub mod token_keys {
    /// Keychain entry holding the short-lived JWT access token.
    pub const ACCESS: &str = "lr_access_token";

    /// Keychain entry holding the long-lived JWT refresh token.
    pub const REFRESH: &str = "lr_refresh_token";
}

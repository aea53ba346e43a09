/// Access service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AccessConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Messaging provider base URL (e.g. "https://api.ng.termii.com").
    pub sms_api_url: String,
    /// Messaging provider API key.
    pub sms_api_key: String,
    /// Sender ID shown on outbound messages (e.g. the estate name).
    pub sms_sender_id: String,
    /// Set the `Secure` cookie flag. Disable only for local HTTP development.
    /// Env var: `SECURE_COOKIES` (default true).
    pub secure_cookies: bool,
    /// Wrong-code guesses allowed per OTP challenge before it is invalidated.
    /// Env var: `MAX_VERIFY_ATTEMPTS` (default 5).
    pub max_verify_attempts: u32,
    /// TCP port to listen on (default 3114). Env var: `ACCESS_PORT`.
    pub access_port: u16,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            sms_api_url: std::env::var("SMS_API_URL").expect("SMS_API_URL"),
            sms_api_key: std::env::var("SMS_API_KEY").expect("SMS_API_KEY"),
            sms_sender_id: std::env::var("SMS_SENDER_ID").expect("SMS_SENDER_ID"),
            secure_cookies: std::env::var("SECURE_COOKIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            max_verify_attempts: std::env::var("MAX_VERIFY_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            access_port: std::env::var("ACCESS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
        }
    }
}

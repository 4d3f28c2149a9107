use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// SMTP settings for the welcome email. `None` disables email entirely.
    pub email: Option<EmailConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let email = EmailConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            email,
        }
    }
}

/// SMTP configuration for outgoing mail.
///
/// Email is optional: when `SMTP_HOST` is unset the server runs without a
/// mailer and signup silently skips the welcome message.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP relay hostname.
    pub smtp_host: String,
    /// SMTP relay port (default: `587`).
    pub smtp_port: u16,
    /// SMTP username, if the relay requires authentication.
    pub smtp_username: Option<String>,
    /// SMTP password, if the relay requires authentication.
    pub smtp_password: Option<String>,
    /// From address for all outgoing mail (default: `noreply@skybook.local`).
    pub from_address: String,
}

impl EmailConfig {
    /// Load SMTP configuration from environment variables.
    ///
    /// Returns `None` when `SMTP_HOST` is not set.
    ///
    /// | Env Var         | Default                 |
    /// |-----------------|-------------------------|
    /// | `SMTP_HOST`     | — (unset disables mail) |
    /// | `SMTP_PORT`     | `587`                   |
    /// | `SMTP_USERNAME` | —                       |
    /// | `SMTP_PASSWORD` | —                       |
    /// | `SMTP_FROM`     | `noreply@skybook.local` |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;

        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".into())
            .parse()
            .expect("SMTP_PORT must be a valid u16");

        let smtp_username = std::env::var("SMTP_USERNAME").ok();
        let smtp_password = std::env::var("SMTP_PASSWORD").ok();

        let from_address =
            std::env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@skybook.local".into());

        Some(Self {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            from_address,
        })
    }
}

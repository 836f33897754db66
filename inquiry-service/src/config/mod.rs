use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Variables the mail dispatcher cannot work without.
pub const REQUIRED_MAIL_VARS: [&str; 3] = ["EMAIL_USER", "EMAIL_PASS", "ADMIN_EMAIL"];

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://youngachievers-2.onrender.com",
    "http://localhost:3000",
    "http://localhost:5173",
];

#[derive(Debug, Clone)]
pub struct InquiryConfig {
    pub common: core_config::Config,
    pub mail: MailConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    /// Mail account identity; also used as the sender address.
    pub user: String,
    pub password: Secret<String>,
    pub from_name: String,
    pub admin_email: String,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl InquiryConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the service settings from any variable source.
    ///
    /// Missing mail variables only abort when `ENVIRONMENT=prod`; otherwise
    /// they are logged and sends fail later at the transport.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_prod = lookup("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()) == "prod";

        let missing: Vec<&str> = REQUIRED_MAIL_VARS
            .iter()
            .copied()
            .filter(|key| lookup(*key).map_or(true, |v| v.is_empty()))
            .collect();

        if !missing.is_empty() {
            if is_prod {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} required in production but not set",
                    missing.join(", ")
                )));
            }
            tracing::error!(
                missing = %missing.join(", "),
                "Mail environment variables missing; inquiries cannot be delivered"
            );
        }

        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("SMTP_PORT") {
            Some(raw) => raw.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("SMTP_PORT '{}' is not a port: {}", raw, e))
            })?,
            None => 587,
        };

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(InquiryConfig {
            common,
            mail: MailConfig {
                host: var("SMTP_HOST", "smtp.gmail.com"),
                port,
                user: var("EMAIL_USER", ""),
                password: Secret::new(var("EMAIL_PASS", "")),
                from_name: var("MAIL_FROM_NAME", "Young Achievers Website"),
                admin_email: var("ADMIN_EMAIL", ""),
                enabled: lookup("MAIL_ENABLED")
                    .map(|v| v.parse().unwrap_or(true))
                    .unwrap_or(true),
            },
            cors: CorsConfig { allowed_origins },
        })
    }
}

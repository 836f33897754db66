pub mod metrics;
pub mod providers;

pub use self::metrics::{get_metrics, init_metrics, record_inquiry};
pub use providers::{
    EmailMessage, EmailProvider, MockEmailProvider, ProviderError, ProviderResponse, SmtpProvider,
};

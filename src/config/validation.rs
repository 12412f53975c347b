//! Semantic configuration checks.

use crate::config::schema::WalletConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check constraints serde cannot express. Collects all failures.
pub fn validate_config(config: &WalletConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chain.chain_id == 0 {
        errors.push(ValidationError("chain.chain_id must be non-zero".into()));
    }

    if config.chain.rpc_urls.is_empty() {
        errors.push(ValidationError(
            "chain.rpc_urls must contain at least one endpoint".into(),
        ));
    }

    for url in config.chain.rpc_urls.iter().chain(&config.chain.explorer_urls) {
        if url.parse::<url::Url>().is_err() {
            errors.push(ValidationError(format!("invalid URL '{}'", url)));
        }
    }

    if config.connect.max_attempts == 0 {
        errors.push(ValidationError(
            "connect.max_attempts must be at least 1".into(),
        ));
    }

    if tracing_subscriber::EnvFilter::try_new(&config.observability.log_filter).is_err() {
        errors.push(ValidationError(format!(
            "invalid observability.log_filter directive '{}'",
            config.observability.log_filter
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

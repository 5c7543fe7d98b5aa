use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::youdao::Youdao;

/// Total number of attempts per text (one initial request plus retries).
pub const MAX_ATTEMPTS: usize = 4;

/// Translation gateway wrapping a backend provider.
///
/// The gateway resolves caller-facing language codes through the configured
/// alias table, rejects unsupported targets before any network call, and
/// retries failed backend requests with a fixed attempt budget.
#[derive(Clone)]
pub struct TranslationService {
    /// The backend provider
    provider: Arc<dyn Provider>,
    /// Alias table from the configuration
    aliases: HashMap<String, String>,
}

impl TranslationService {
    /// Create a service backed by the Youdao client from the configuration.
    pub fn new(config: &Config) -> Self {
        let provider = Arc::new(Youdao::new(
            config.appkey.clone(),
            config.secret.clone(),
            config.endpoint.clone(),
        ));
        Self {
            provider,
            aliases: config.transform.clone(),
        }
    }

    /// Create a service with an explicit provider, used by tests.
    pub fn with_provider(provider: Arc<dyn Provider>, aliases: HashMap<String, String>) -> Self {
        Self { provider, aliases }
    }

    /// Resolve a target language through the alias table and check it against
    /// the supported set. Fails without touching the network.
    pub fn resolve_target(&self, lang: &str) -> Result<String, TranslationError> {
        let resolved = language_utils::resolve_alias(lang, &self.aliases);
        if !language_utils::is_supported(resolved) {
            return Err(TranslationError::UnsupportedLanguage(lang.to_string()));
        }
        Ok(resolved.to_string())
    }

    /// Translate `text` into `target_lang`.
    ///
    /// The target is alias-resolved first; an unsupported code fails
    /// immediately with no retry. Backend failures are retried up to
    /// `MAX_ATTEMPTS` total attempts with no delay and no parameter change,
    /// and the exhausted failure comes back as an `Err` value.
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        let resolved = self.resolve_target(target_lang)?;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.provider.translate(text, &resolved).await {
                Ok(translated) => return Ok(translated),
                Err(e) if attempt == MAX_ATTEMPTS => return Err(TranslationError::Provider(e)),
                Err(e) => {
                    debug!(
                        "Translate attempt {}/{} failed: {}",
                        attempt, MAX_ATTEMPTS, e
                    );
                }
            }
        }

        unreachable!()
    }
}

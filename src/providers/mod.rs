/*!
 * Provider implementations for the translation backend.
 *
 * This module contains the client for the Youdao open API and a mock
 * implementation used by the test suite.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for translation backends
///
/// This trait defines the interface every backend implementation must follow,
/// allowing the translation service to use them interchangeably.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate `text` into `target_lang` with automatic source-language
    /// detection. A single attempt with no retry; retry policy lives in the
    /// translation service.
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `target_lang` - A backend-accepted language code (already resolved
    ///   through the alias table)
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError>;
}

pub mod mock;
pub mod youdao;

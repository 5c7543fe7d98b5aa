/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock backend that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with tagged text
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::fail_first(n)` - Fails the first n requests, then succeeds
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, echoing the input tagged with the target language
    Working,
    /// Always fails with a request error
    Failing,
    /// Fails the first n requests, then succeeds
    FailFirst(usize),
}

/// Mock provider for testing translation behavior without the network
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock provider that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock provider that fails the first `n` requests
    pub fn fail_first(n: usize) -> Self {
        Self::new(MockBehavior::FailFirst(n))
    }

    /// Number of translate calls received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// The deterministic output produced for a successful mock translation
    pub fn expected_output(text: &str, target_lang: &str) -> String {
        format!("{}:{}", target_lang, text)
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError> {
        let seen = self.request_count.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Working => Ok(Self::expected_output(text, target_lang)),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider configured to fail".to_string(),
            )),
            MockBehavior::FailFirst(n) if seen < n => Err(ProviderError::RequestFailed(format!(
                "mock provider failing request {} of {}",
                seen + 1,
                n
            ))),
            MockBehavior::FailFirst(_) => Ok(Self::expected_output(text, target_lang)),
        }
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::Duration;
use uuid::Uuid;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Youdao client for interacting with the Youdao open API
#[derive(Debug)]
pub struct Youdao {
    /// HTTP client for API requests
    client: Client,
    /// Application key for authentication
    appkey: String,
    /// Application secret used to sign requests
    secret: String,
    /// API endpoint URL
    endpoint: String,
}

/// Youdao translate response
#[derive(Debug, Deserialize)]
pub struct YoudaoResponse {
    /// Backend status code; "0" means success
    #[serde(rename = "errorCode")]
    pub error_code: String,

    /// Translated text, one entry per input
    #[serde(default)]
    pub translation: Vec<String>,
}

/// Build the `input` component of the v3 signature: the full query when it is
/// 20 characters or fewer, otherwise the first 10 characters, the character
/// count, and the last 10 characters.
pub fn signing_input(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 20 {
        return text.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 10..].iter().collect();
    format!("{}{}{}", head, chars.len(), tail)
}

impl Youdao {
    /// Create a new Youdao client
    pub fn new(
        appkey: impl Into<String>,
        secret: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            appkey: appkey.into(),
            secret: secret.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Compute the v3 request signature:
    /// sha256(appKey + input + salt + curtime + secret), lowercase hex.
    fn sign(&self, text: &str, salt: &str, curtime: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.appkey.as_bytes());
        hasher.update(signing_input(text).as_bytes());
        hasher.update(salt.as_bytes());
        hasher.update(curtime.as_bytes());
        hasher.update(self.secret.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

#[async_trait]
impl Provider for Youdao {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError> {
        let salt = Uuid::new_v4().to_string();
        let curtime = chrono::Utc::now().timestamp().to_string();
        let sign = self.sign(text, &salt, &curtime);

        let params = [
            ("q", text),
            ("from", "auto"),
            ("to", target_lang),
            ("appKey", self.appkey.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
            ("signType", "v3"),
            ("curtime", curtime.as_str()),
        ];

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let parsed = response
            .json::<YoudaoResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if parsed.error_code != "0" {
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: format!("backend returned error code {}", parsed.error_code),
            });
        }

        parsed
            .translation
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ParseError("response contained no translation".to_string()))
    }
}

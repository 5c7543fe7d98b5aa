/*!
 * Tests for provider implementations
 */

use mdtranslate::providers::Provider;
use mdtranslate::providers::mock::MockProvider;
use mdtranslate::providers::youdao::{YoudaoResponse, signing_input};

/// Test that short queries are signed verbatim
#[test]
fn test_signing_input_withShortText_shouldReturnTextUnchanged() {
    assert_eq!(signing_input("hello"), "hello");
    assert_eq!(signing_input(&"x".repeat(20)), "x".repeat(20));
}

/// Test the head + length + tail truncation for long queries
#[test]
fn test_signing_input_withLongText_shouldTruncateAroundLength() {
    let text = "abcdefghijklmnopqrstuvwxyz"; // 26 chars
    assert_eq!(signing_input(text), "abcdefghij26qrstuvwxyz");
}

/// Test that truncation counts characters, not bytes
#[test]
fn test_signing_input_withMultibyteText_shouldCountChars() {
    let text = "é".repeat(25);
    let expected = format!("{}25{}", "é".repeat(10), "é".repeat(10));
    assert_eq!(signing_input(&text), expected);
}

/// Test deserialization of a successful backend response
#[test]
fn test_youdao_response_withSuccessBody_shouldParse() {
    let body = r#"{"errorCode": "0", "translation": ["bonjour"], "query": "hello"}"#;
    let parsed: YoudaoResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.error_code, "0");
    assert_eq!(parsed.translation, vec!["bonjour"]);
}

/// Test deserialization of an error response with no translation field
#[test]
fn test_youdao_response_withErrorBody_shouldParseWithoutTranslation() {
    let body = r#"{"errorCode": "108"}"#;
    let parsed: YoudaoResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.error_code, "108");
    assert!(parsed.translation.is_empty());
}

/// Test that the working mock echoes tagged text and counts requests
#[tokio::test]
async fn test_mock_provider_withWorkingBehavior_shouldTagAndCount() {
    let mock = MockProvider::working();
    let result = mock.translate("hello", "fr").await.unwrap();
    assert_eq!(result, MockProvider::expected_output("hello", "fr"));
    assert_eq!(mock.request_count(), 1);
}

/// Test that the failing mock always errors
#[tokio::test]
async fn test_mock_provider_withFailingBehavior_shouldAlwaysFail() {
    let mock = MockProvider::failing();
    assert!(mock.translate("hello", "fr").await.is_err());
    assert!(mock.translate("hello", "fr").await.is_err());
    assert_eq!(mock.request_count(), 2);
}

/// Test that fail_first recovers after n failures
#[tokio::test]
async fn test_mock_provider_withFailFirst_shouldRecoverAfterN() {
    let mock = MockProvider::fail_first(2);
    assert!(mock.translate("hello", "fr").await.is_err());
    assert!(mock.translate("hello", "fr").await.is_err());
    assert!(mock.translate("hello", "fr").await.is_ok());
}

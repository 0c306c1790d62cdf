//! Tests for the Gemini provider against a local fake endpoint

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{extract::Query, routing::post, Json, Router};
    use serde_json::{json, Value};

    use crate::infrastructure::llm::{GeminiProvider, LLMConfig, LLMError, LLM};

    /// Serve `reply` from the generateContent path, checking the key query parameter
    async fn fake_gemini(status: u16, reply: Value) -> String {
        let app = Router::new().route(
            "/v1beta/models/:model",
            post(move |Query(q): Query<std::collections::HashMap<String, String>>, Json(body): Json<Value>| {
                let reply = reply.clone();
                async move {
                    assert_eq!(q.get("key").map(String::as_str), Some("test-key"));
                    assert!(body["contents"][0]["parts"][0]["text"].is_string());
                    (axum::http::StatusCode::from_u16(status).unwrap(), Json(reply))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn provider(base: &str) -> GeminiProvider {
        GeminiProvider::new("test-key", Some("gemini-1.5-flash"), Duration::from_secs(2))
            .unwrap()
            .with_base_url(base)
    }

    #[tokio::test]
    async fn test_generate_extracts_first_part() {
        let base = fake_gemini(200, json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "  Chain makes grinding noise.\n"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 6, "totalTokenCount": 18}
        }))
        .await;

        let response = provider(&base).generate("fix this", Some(0.2), Some(64)).await.unwrap();

        assert_eq!(response.content, "Chain makes grinding noise.");
        assert_eq!(response.model, "gemini-1.5-flash");
        assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(response.usage.and_then(|u| u.total_tokens), Some(18));
    }

    #[tokio::test]
    async fn test_missing_field_is_parse_error() {
        let base = fake_gemini(200, json!({"candidates": [{"content": {"parts": []}}]})).await;
        let err = provider(&base).generate("x", None, None).await.unwrap_err();
        assert!(matches!(err, LLMError::ParseError(_)), "got {}", err);

        let base = fake_gemini(200, json!({"promptFeedback": {"blockReason": "SAFETY"}})).await;
        let err = provider(&base).generate("x", None, None).await.unwrap_err();
        assert!(matches!(err, LLMError::ParseError(_)), "got {}", err);
    }

    #[tokio::test]
    async fn test_blank_text_is_empty_response() {
        let base = fake_gemini(200, json!({"candidates": [{"content": {"parts": [{"text": "  "}]}}]})).await;
        let err = provider(&base).generate("x", None, None).await.unwrap_err();
        assert!(matches!(err, LLMError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_status_errors() {
        let base = fake_gemini(429, json!({})).await;
        let err = provider(&base).generate("x", None, None).await.unwrap_err();
        assert!(matches!(err, LLMError::RateLimited));

        let base = fake_gemini(403, json!({"error": {"message": "API key not valid"}})).await;
        let err = provider(&base).generate("x", None, None).await.unwrap_err();
        assert!(matches!(err, LLMError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let err = provider("http://127.0.0.1:1").generate("x", None, None).await.unwrap_err();
        assert!(matches!(err, LLMError::NetworkError(_)));
        assert!(!err.to_string().contains("test-key"), "key in error: {}", err);
    }

    #[test]
    fn test_from_config_needs_key() {
        let mut config = LLMConfig::default();
        assert!(matches!(GeminiProvider::from_config(&config), Err(LLMError::MissingApiKey)));

        config.api_key = Some("   ".to_string());
        assert!(matches!(GeminiProvider::from_config(&config), Err(LLMError::MissingApiKey)));

        config.api_key = Some("k".to_string());
        assert!(GeminiProvider::from_config(&config).is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires GEMINI_API_KEY environment variable
    async fn test_gemini_live() {
        let mut config = LLMConfig::default();
        config.apply_env();
        let provider = GeminiProvider::from_config(&config).expect("GEMINI_API_KEY not set");

        let response = provider
            .generate("Reply with exactly one word: hello", Some(0.0), Some(10))
            .await
            .expect("Generate request failed");

        println!("Response: {}", response.content);
        assert!(!response.content.is_empty());
    }
}

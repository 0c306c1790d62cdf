//! Environment overrides for Config
//! Run with: cargo test --test config_env_test

use std::io::Write;

use cycle_booking::Config;

/// Single test: env vars are process-global
#[test]
fn test_env_overrides_file_values() {
    let path = std::env::temp_dir().join(format!("cycle-booking-{}.yaml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "telegram:\n  token: file-token\n  chat-id: '1'\nserver:\n  port: 9000").unwrap();
    }

    std::env::set_var("TELEGRAM_BOT_TOKEN", "env-token");
    std::env::set_var("CHAT_ID", "   ");
    std::env::set_var("GEMINI_API_KEY", "gemini-key");
    std::env::set_var("PORT", "not-a-port");

    let mut config = Config::load(&path).unwrap();
    config.apply_env();

    assert_eq!(config.telegram.token.as_deref(), Some("env-token"));
    assert_eq!(config.telegram.chat_id.as_deref(), Some("1"));
    assert_eq!(config.llm.api_key(), Some("gemini-key"));
    assert_eq!(config.server.port, 9000);

    std::env::set_var("PORT", "8081");
    let config = Config::load_env();
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.telegram.chat_id, None);
    assert!(config.telegram.credentials().is_none());

    for key in ["TELEGRAM_BOT_TOKEN", "CHAT_ID", "GEMINI_API_KEY", "PORT"] {
        std::env::remove_var(key);
    }
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_file_is_error() {
    assert!(Config::load("/nonexistent/cycle-booking.yaml").is_err());
}

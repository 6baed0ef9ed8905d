use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub completion_api_key: SecretString,
    pub completion_base_url: String,
    pub completion_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        // DASHSCOPE_API_KEY takes precedence, OPENAI_API_KEY is the fallback.
        let api_key = env::var("DASHSCOPE_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .unwrap_or_default();

        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "microwrite-local".to_string()),
            completion_api_key: SecretString::from(api_key),
            completion_base_url: env::var("COMPLETION_BASE_URL").unwrap_or_else(|_| {
                "https://dashscope.aliyuncs.com/compatible-mode/v1".to_string()
            }),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "qwen-max".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set.
    /// Panics if the completion service key is missing.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.completion_api_key.expose_secret().is_empty() {
            panic!(
                "FATAL: no completion API key set! Set DASHSCOPE_API_KEY or OPENAI_API_KEY."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "microwrite-test".to_string(),
            completion_api_key: SecretString::from("test_api_key".to_string()),
            completion_base_url: "http://localhost:9999/v1".to_string(),
            completion_model: "qwen-max".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.completion_model.is_empty());
        assert!(config.completion_base_url.starts_with("http"));
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_conn_string, "mongodb://localhost:27017");
        assert_eq!(config.mongo_db_name, "microwrite-test");
        assert_eq!(config.completion_model, "qwen-max");
    }
}

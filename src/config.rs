use secrecy::SecretString;
use std::env;

pub const DEFAULT_CHUNK_SIZE: usize = 30_000;
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_key: SecretString,
    pub llm_api_base_url: String,
    pub llm_model: String,
    pub llm_max_tokens: u32,
    pub llm_temperature: f32,
    pub llm_timeout_secs: u64,
    pub chunk_size: usize,
    pub chunk_pacing_ms: u64,
    pub max_upload_bytes: usize,
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parsed_or("WEB_SERVER_PORT", 3001),
            llm_api_key: SecretString::from(env::var("LLM_API_KEY").unwrap_or_default()),
            llm_api_base_url: env::var("LLM_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            llm_max_tokens: parsed_or("LLM_MAX_TOKENS", 4000),
            llm_temperature: parsed_or("LLM_TEMPERATURE", 0.7),
            llm_timeout_secs: parsed_or("LLM_TIMEOUT_SECS", 120),
            chunk_size: parsed_or("CHUNK_SIZE", DEFAULT_CHUNK_SIZE).max(1),
            chunk_pacing_ms: parsed_or("CHUNK_PACING_MS", 1000),
            max_upload_bytes: parsed_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
        }
    }

    /// Panics when the completion endpoint cannot possibly be reached.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.llm_api_key.expose_secret().trim().is_empty() {
            panic!("FATAL: LLM_API_KEY is not set! Question generation requires an API key.");
        }

        if !self.llm_api_base_url.starts_with("http") {
            panic!(
                "FATAL: LLM_API_BASE_URL '{}' is not an http(s) URL.",
                self.llm_api_base_url
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
            llm_api_key: SecretString::from("test_llm_key".to_string()),
            llm_api_base_url: "http://127.0.0.1:9".to_string(),
            llm_model: "test-model".to_string(),
            llm_max_tokens: 512,
            llm_temperature: 0.7,
            llm_timeout_secs: 5,
            chunk_size: 100,
            chunk_pacing_ms: 0,
            max_upload_bytes: 1024 * 1024,
        }
    }
}

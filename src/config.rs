#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub bank_url: String,
    pub bank_timeout_ms: u64,
    pub bank_adapter: String,
    pub mock_bank_behavior: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8090".to_string()),
            bank_url: std::env::var("BANK_SIMULATOR_URL")
                .unwrap_or_else(|_| "http://localhost:8080/payments".to_string()),
            bank_timeout_ms: std::env::var("BANK_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
            bank_adapter: std::env::var("BANK_ADAPTER")
                .map(|s| s.to_uppercase())
                .unwrap_or_else(|_| "SIMULATOR".to_string()),
            mock_bank_behavior: std::env::var("MOCK_BANK_BEHAVIOR")
                .unwrap_or_else(|_| "CARD_PARITY".to_string()),
        }
    }
}

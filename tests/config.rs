use card_payment_gateway::config::AppConfig;

// Only test in this binary, so touching the process environment is safe.
#[test]
fn defaults_apply_when_env_is_unset() {
    for key in [
        "BIND_ADDR",
        "BANK_SIMULATOR_URL",
        "BANK_TIMEOUT_MS",
        "BANK_ADAPTER",
        "MOCK_BANK_BEHAVIOR",
    ] {
        std::env::remove_var(key);
    }

    let cfg = AppConfig::from_env();
    assert_eq!(cfg.bind_addr, "0.0.0.0:8090");
    assert_eq!(cfg.bank_url, "http://localhost:8080/payments");
    assert_eq!(cfg.bank_timeout_ms, 2500);
    assert_eq!(cfg.bank_adapter, "SIMULATOR");
    assert_eq!(cfg.mock_bank_behavior, "CARD_PARITY");
}

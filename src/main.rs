use card_payment_gateway::bank::mock::{MockAuthorizer, MockBehavior};
use card_payment_gateway::bank::simulator::BankSimulator;
use card_payment_gateway::bank::Authorizer;
use card_payment_gateway::config::AppConfig;
use card_payment_gateway::http::routes::build_router;
use card_payment_gateway::repo::payments_repo::PaymentsRepo;
use card_payment_gateway::service::payment_service::PaymentService;
use card_payment_gateway::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let authorizer: Arc<dyn Authorizer> = match cfg.bank_adapter.as_str() {
        "MOCK" => {
            let behavior = MockBehavior::from_name(&cfg.mock_bank_behavior).ok_or_else(|| {
                anyhow::anyhow!("unknown MOCK_BANK_BEHAVIOR {}", cfg.mock_bank_behavior)
            })?;
            tracing::warn!(?behavior, "using in-process mock bank");
            Arc::new(MockAuthorizer::new(behavior))
        }
        "SIMULATOR" => Arc::new(BankSimulator {
            url: cfg.bank_url.clone(),
            timeout_ms: cfg.bank_timeout_ms,
            client: reqwest::Client::new(),
        }),
        other => anyhow::bail!("unknown BANK_ADAPTER {other}"),
    };

    let state = AppState {
        payment_service: PaymentService::new(PaymentsRepo::new(), authorizer),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(bank_url = %cfg.bank_url, "listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

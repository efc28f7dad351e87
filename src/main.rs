//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use henry::adapters::ai::{MockAdvisorAdapter, OpenAiAdapter};
use henry::adapters::persistence::MemoryLedger;
use henry::adapters::ui::tui::TuiInputPort;
use henry::ports::{AdvisorPort, InputPort, LedgerPort};
use henry::shared::config::{AiProvider, AppConfig};
use henry::usecases::{AdvisorService, AnalysisService, LedgerService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    henry::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration; using defaults");
        AppConfig::default()
    });
    let currency = cfg.currency_or_default();
    let timeout = Duration::from_secs(cfg.ai_timeout_secs_or_default());

    // --- Ledger (process memory; lost on exit) ---
    let ledger_store: Arc<dyn LedgerPort> = Arc::new(MemoryLedger::new());
    let ledger = Arc::new(LedgerService::new(ledger_store));

    // --- Advisor ---
    let advisor_port: Arc<dyn AdvisorPort> = match cfg.ai_provider_or_default() {
        AiProvider::Mock => {
            warn!("HENRY_AI_PROVIDER=mock, using mock advisor adapter");
            Arc::new(MockAdvisorAdapter::new())
        }
        AiProvider::OpenAi => {
            if cfg.is_ai_configured() {
                info!(
                    model = %cfg.ai_model_or_default(),
                    url = %cfg.ai_api_url_or_default(),
                    timeout_secs = timeout.as_secs(),
                    "AI advisor enabled"
                );
            } else {
                warn!("HENRY_AI_API_KEY / DEEPSEEK_API_KEY not set; analyses use the basic report only");
            }
            Arc::new(
                OpenAiAdapter::new(
                    cfg.ai_api_url_or_default(),
                    cfg.ai_api_key(),
                    cfg.ai_model_or_default(),
                )
                .with_timeout(timeout)
                .with_generation(cfg.ai_temperature_or_default(), cfg.ai_max_tokens_or_default())
                .with_currency(currency.clone()),
            )
        }
    };
    let advisor = Arc::new(AdvisorService::new(advisor_port, timeout, currency.clone()));

    // --- Services ---
    let analysis = Arc::new(AnalysisService::new(Arc::clone(&ledger), advisor));

    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(ledger, analysis, currency));

    // --- Run (main menu -> Create / Record / List / Analyze / Ask / Status) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("bye");
    Ok(())
}

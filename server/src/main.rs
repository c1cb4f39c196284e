mod config;
mod model;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cfg = config::ServerConfig::from_env().expect("invalid configuration");

    // Load the risk model artifact (non-fatal: predictions disabled if missing).
    let risk_model = match model::RiskModel::from_path(&cfg.model_path) {
        Ok(m) => {
            tracing::info!(
                path = %cfg.model_path.display(),
                features = m.features.len(),
                "risk model loaded"
            );
            Some(Arc::new(m))
        }
        Err(e) => {
            tracing::warn!(error = %e, "risk model not loaded — predictions disabled");
            None
        }
    };

    let state = state::AppState::new(risk_model);

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = cfg.port, "cardiocheck listening");
    axum::serve(listener, app).await.expect("server failed");
}

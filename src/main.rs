use std::sync::Arc;

use chatbot_server::{
    db::Database,
    llm::{HfTokenizer, TgiClient},
    routes::configure_routes,
    telemetry, AppConfig, AppError, AppState, ChatEngine,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init(&config.log_level)?;

    let db = Database::new(config.database.clone()).await?;
    db.ensure_schema().await?;
    info!("database schema ready");

    let inference = &config.inference;
    let tokenizer = HfTokenizer::load(&inference.tokenizer, &inference.eos_token).await?;
    let model = TgiClient::new(inference.url.clone(), inference.timeout)?;
    if let Err(e) = model.health().await {
        warn!(url = %inference.url, error = %e, "inference server is not ready yet");
    }
    info!(model = %inference.model_id, url = %inference.url, "inference backend configured");

    let chat = ChatEngine::new(Arc::new(tokenizer), Arc::new(model), config.generation.clone())?;
    let routes = configure_routes(AppState::new(db, chat));

    info!("Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}

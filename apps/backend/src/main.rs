use actix_web::{web, App, HttpServer};
use biztime::config::db::{DbKind, RuntimeEnv};
use biztime::config::server::ServerConfig;
use biztime::infra::state::build_state;
use biztime::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use biztime::routes;
use biztime::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "startup=config_failed");
            std::process::exit(1);
        }
    };

    let db_kind = match DbKind::from_env() {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "startup=config_failed");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "startup=state_failed");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, db_kind = ?db_kind, "startup=listening");

    let data = web::Data::new(app_state.clone());

    let result = HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await;

    app_state.shutdown().await;
    info!("shutdown=complete");

    result
}

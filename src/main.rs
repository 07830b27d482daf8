use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlers;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_initiation::application::service::PaymentService;
use payment_initiation::infrastructure::in_memory::InMemoryOrderStore;
use payment_initiation::interfaces::rest::{handlers, problem};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,payment_initiation=debug")),
        )
        .init();

    let store = Arc::new(InMemoryOrderStore::new());
    let service = web::Data::new(PaymentService::new(store));

    info!("listening on http://{}:{}", cli.host, cli.port);
    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(problem::json_config())
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::INTERNAL_SERVER_ERROR, problem::render_internal_error),
            )
            .configure(handlers::configure)
    })
    .bind((cli.host.as_str(), cli.port))
    .into_diagnostic()?
    .run()
    .await
    .into_diagnostic()
}

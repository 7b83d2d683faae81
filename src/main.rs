use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Pool, Sqlite};

use crate::config::dialer_config::{DialerConfig, TwilioConfig};
use crate::logger::init_logger;
use crate::services::call_log_service::CallLogService;
use crate::services::campaign_service::CampaignService;
use crate::services::command_service::CommandService;
use crate::services::provider_service::ProviderService;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

async fn setup_database() -> Pool<Sqlite> {
    // 1) Crear carpeta "data"
    std::fs::create_dir_all("data").expect("No se pudo crear directorio 'data'");

    // 2) Ruta final: ./data/calls.db
    let db_path = std::env::current_dir()
        .expect("No se pudo obtener el current_dir")
        .join("data")
        .join("calls.db");

    log::info!("Conectando a SQLite en {}", db_path.to_string_lossy());

    // 3) Conectarnos con SQLx
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);

    Pool::<Sqlite>::connect_with(options)
        .await
        .expect("No se pudo conectar a la base de datos SQLite.")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let dialer_config = DialerConfig::default();

    // Conectarnos a la DB
    let db_pool = setup_database().await;

    // CallLogService + esquema
    let call_log_service = CallLogService::new(db_pool.clone());
    if let Err(e) = call_log_service.init_schema().await {
        panic!("Fallo en el bootstrap del esquema 'calls': {:?}", e);
    }

    // Selección del proveedor: real solo si hay credenciales.
    let twilio = TwilioConfig::from_env();
    match &twilio {
        Some(tw) => log::info!("Proveedor real configurado (cuenta {}).", tw.account_sid),
        None => log::info!("Sin credenciales de proveedor: modo simulado."),
    }
    let provider_service = ProviderService::new(twilio, &dialer_config);

    // Orquestador de campañas
    let campaign_service = CampaignService::new(
        provider_service,
        call_log_service.clone(),
        dialer_config.clone(),
    );

    // Parser de comandos
    let command_service = CommandService::new();

    // Levantar servidor
    let bind_port = dialer_config.bind_port;
    log::info!("Levantando servidor en 0.0.0.0:{}", bind_port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(dialer_config.clone()))
            .app_data(web::Data::new(call_log_service.clone()))
            .app_data(web::Data::new(campaign_service.clone()))
            .app_data(web::Data::new(command_service.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind(("0.0.0.0", bind_port))?
    .run()
    .await
}

//! handlers/command_handler.rs
//! Endpoint para llamadas sueltas iniciadas por comando de texto.

use actix_web::{web, HttpResponse};
use log::error;

use crate::config::dialer_config::DialerConfig;
use crate::errors::DialerError;
use crate::handlers::reject;
use crate::models::command_model::{CommandRequest, CommandResponse};
use crate::services::campaign_service::CampaignService;
use crate::services::command_service::CommandService;

/// POST /api/commands/call
/// Extrae un número del comando, lo marca una sola vez y retorna el
/// resultado. Comparte la exclusividad con las campañas.
pub async fn command_call_endpoint(
    campaign_service: web::Data<CampaignService>,
    command_service: web::Data<CommandService>,
    config: web::Data<DialerConfig>,
    req_body: web::Json<CommandRequest>,
) -> HttpResponse {
    let req = req_body.into_inner();

    if req.command.is_empty() {
        return reject(DialerError::NoCommand);
    }

    let phone_number = match command_service.extract_number(&req.command, &config) {
        Some(n) => n,
        None => return reject(DialerError::NoNumberInCommand),
    };

    match campaign_service
        .place_single_call(&phone_number, req.ai_voice)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(CommandResponse {
            message: format!("Call initiated to {}", phone_number),
            status: outcome.status,
            command_processed: req.command,
        }),
        Err(e) => {
            error!("Comando rechazado: {}", e);
            reject(e)
        }
    }
}

//! handlers/mod.rs
//! Módulo que agrupa los distintos handlers (campañas, comandos, logs).

pub mod call_log_handler;
pub mod campaign_handler;
pub mod command_handler;

use actix_web::HttpResponse;

use crate::errors::DialerError;
use crate::models::campaign_model::ErrorResponse;

/// Mapea la taxonomía de errores a respuestas HTTP: 409 para
/// rechazos por campaña en curso, 500 para fallos internos de un
/// intento, 400 para fallos de validación.
pub(crate) fn reject(e: DialerError) -> HttpResponse {
    let body = ErrorResponse {
        error: e.to_string(),
    };
    match e {
        DialerError::CampaignInProgress => HttpResponse::Conflict().json(body),
        DialerError::CallFault => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

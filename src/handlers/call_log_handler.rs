//! handlers/call_log_handler.rs
//! Endpoint de consulta del log de llamadas.

use actix_web::{web, HttpResponse};
use log::error;

use crate::config::dialer_config::DialerConfig;
use crate::models::campaign_model::ErrorResponse;
use crate::services::call_log_service::CallLogService;

/// GET /api/calls/logs
/// Registros recientes en orden cronológico inverso más los conteos
/// conectadas/fallidas.
pub async fn call_logs_endpoint(
    call_log_service: web::Data<CallLogService>,
    config: web::Data<DialerConfig>,
) -> HttpResponse {
    match call_log_service.recent_logs(config.log_limit).await {
        Ok(logs) => HttpResponse::Ok().json(logs),
        Err(e) => {
            error!("Error leyendo el log de llamadas: {:?}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to read call logs".to_string(),
            })
        }
    }
}

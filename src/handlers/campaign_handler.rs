//! handlers/campaign_handler.rs
//! Endpoints para arrancar campañas y consultar su estado.

use actix_web::{web, HttpResponse};
use log::error;

use crate::config::dialer_config::DialerConfig;
use crate::errors::DialerError;
use crate::handlers::reject;
use crate::models::campaign_model::{StartCampaignRequest, StartCampaignResponse};
use crate::services::campaign_service::CampaignService;
use crate::services::number_service;

/// POST /api/campaigns
/// Valida y normaliza los números crudos, y arranca el ciclo de
/// marcado en background si el orquestador está libre.
pub async fn start_campaign_endpoint(
    campaign_service: web::Data<CampaignService>,
    config: web::Data<DialerConfig>,
    req_body: web::Json<StartCampaignRequest>,
) -> HttpResponse {
    let req = req_body.into_inner();

    if req.numbers.is_empty() {
        return reject(DialerError::NoNumbers);
    }

    let targets = number_service::normalize_batch(&req.numbers, &config);
    if targets.is_empty() {
        return reject(DialerError::NoValidNumbers);
    }

    match campaign_service.start_campaign(targets, req.ai_voice).await {
        Ok(total) => HttpResponse::Ok().json(StartCampaignResponse {
            message: "Calling started".to_string(),
            total,
        }),
        Err(e) => {
            error!("Campaña rechazada: {}", e);
            reject(e)
        }
    }
}

/// GET /api/campaigns/status
pub async fn campaign_status_endpoint(
    campaign_service: web::Data<CampaignService>,
) -> HttpResponse {
    HttpResponse::Ok().json(campaign_service.status().await)
}

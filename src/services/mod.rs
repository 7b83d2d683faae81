//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod call_log_service;
pub mod campaign_service;
pub mod command_service;
pub mod number_service;
pub mod provider_service;

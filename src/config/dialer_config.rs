//! config/dialer_config.rs
//! Configuración global del marcador (prefijos, delays, límites).

use serde::{Deserialize, Serialize};

/// Configuración global del marcador, con valores por defecto
/// (podría venir de un .toml, .env, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialerConfig {
    pub default_country_prefix: String, // "+91"
    pub country_calling_code: String,   // "91"
    pub tollfree_prefix: String,        // "1800"

    /// Rango (segundos) del delay simulado de una llamada mock.
    pub mock_min_delay_secs: f64,
    pub mock_max_delay_secs: f64,

    /// Rango (segundos) de la pausa entre llamadas del ciclo.
    pub intercall_min_delay_secs: f64,
    pub intercall_max_delay_secs: f64,

    /// Cuántos registros recientes retorna el log de llamadas.
    pub log_limit: i64,

    pub bind_port: u16,
}

impl Default for DialerConfig {
    fn default() -> Self {
        DialerConfig {
            default_country_prefix: "+91".to_string(),
            country_calling_code: "91".to_string(),
            tollfree_prefix: "1800".to_string(),
            mock_min_delay_secs: 2.0,
            mock_max_delay_secs: 4.0,
            intercall_min_delay_secs: 1.0,
            intercall_max_delay_secs: 3.0,
            log_limit: 100,
            bind_port: 8000,
        }
    }
}

/// Credenciales del proveedor real de telefonía.
/// Si falta alguna variable, el proceso entero opera en modo simulado.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub phone_number: String,
}

impl TwilioConfig {
    pub fn from_env() -> Option<Self> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok()?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok()?;
        let phone_number = std::env::var("TWILIO_PHONE_NUMBER").ok()?;
        Some(TwilioConfig {
            account_sid,
            auth_token,
            phone_number,
        })
    }
}

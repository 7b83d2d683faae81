//! services/number_service.rs
//! Normalización de números crudos a formato marcable.

use crate::config::dialer_config::DialerConfig;

/// Reglas por conteo de dígitos, compartidas por el lote y el
/// parser de comandos:
/// 1. solo dígitos, 10 → prefijo de país por defecto + dígitos
/// 2. solo dígitos, 12 y empieza con el código de país → "+" + dígitos
fn normalize_by_digit_count(raw: &str, config: &DialerConfig) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        Some(format!("{}{}", config.default_country_prefix, digits))
    } else if digits.len() == 12 && digits.starts_with(&config.country_calling_code) {
        Some(format!("+{}", digits))
    } else {
        None
    }
}

/// Normaliza un número crudo. Las reglas se aplican en este orden
/// exacto, gana la primera que coincide:
/// 1-2. reglas por conteo de dígitos
/// 3. el crudo empieza con "+" → pasa sin cambios
/// 4. el crudo empieza con el prefijo toll-free → pasa sin cambios
/// 5. se descarta (None)
pub fn normalize_number(raw: &str, config: &DialerConfig) -> Option<String> {
    if let Some(normalized) = normalize_by_digit_count(raw, config) {
        Some(normalized)
    } else if raw.starts_with('+') || raw.starts_with(&config.tollfree_prefix) {
        Some(raw.to_string())
    } else {
        None
    }
}

/// Filtra un lote crudo conservando el orden. Los inválidos se
/// descartan en silencio; un resultado vacío se rechaza en el borde.
pub fn normalize_batch(raw_numbers: &[String], config: &DialerConfig) -> Vec<String> {
    raw_numbers
        .iter()
        .filter_map(|n| normalize_number(n, config))
        .collect()
}

/// Variante para números extraídos de un comando: mismas reglas de
/// conteo de dígitos y, si ninguna coincide, el capturado pasa sin
/// cambios.
pub fn normalize_command_capture(raw: &str, config: &DialerConfig) -> String {
    normalize_by_digit_count(raw, config).unwrap_or_else(|| raw.to_string())
}

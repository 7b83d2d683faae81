//! services/provider_service.rs
//! Capacidad de colocar llamadas: proveedor real (Twilio) con
//! fallback transparente al proveedor simulado.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;

use crate::config::dialer_config::{DialerConfig, TwilioConfig};
use crate::models::call_model::{CallDisposition, CallOutcome};

const TWILIO_API_BASE: &str = "https://api.twilio.com";
const DEMO_VOICE_URL: &str = "http://demo.twilio.com/docs/voice.xml";

/// Tabla fija de resultados simulados: (estado, duración mm:ss).
const MOCK_OUTCOMES: [(&str, &str); 6] = [
    ("connected - call answered", "00:25"),
    ("connected - voicemail", "00:15"),
    ("failed - busy signal", "00:00"),
    ("failed - number not in service", "00:00"),
    ("connected - call answered", "00:32"),
    ("failed - no answer", "00:00"),
];

const AI_VOICE_SCRIPT: &str = "Hello! This is an AI-powered autodialer demonstration. \
    We are testing our automated calling system. \
    This call is using advanced Text-to-Speech technology. \
    Thank you for your attention. Goodbye!";

#[derive(Clone)]
pub struct ProviderService {
    twilio: Option<TwilioConfig>,
    http_client: Client,
    api_base: String,
    mock_min_delay_secs: f64,
    mock_max_delay_secs: f64,
}

impl ProviderService {
    /// La selección real/simulado ocurre aquí, una vez, según haya
    /// credenciales; el orquestador nunca vuelve a consultarlas.
    pub fn new(twilio: Option<TwilioConfig>, config: &DialerConfig) -> Self {
        ProviderService {
            twilio,
            http_client: Client::new(),
            api_base: TWILIO_API_BASE.to_string(),
            mock_min_delay_secs: config.mock_min_delay_secs,
            mock_max_delay_secs: config.mock_max_delay_secs,
        }
    }

    /// Constructor para tests: permite apuntar a un endpoint
    /// inalcanzable y anular los delays simulados.
    #[cfg(test)]
    pub fn new_test(twilio: Option<TwilioConfig>, api_base: &str) -> Self {
        Self::new_test_with_delay(twilio, api_base, 0.0)
    }

    /// Como `new_test`, con un delay simulado fijo.
    #[cfg(test)]
    pub fn new_test_with_delay(
        twilio: Option<TwilioConfig>,
        api_base: &str,
        mock_delay_secs: f64,
    ) -> Self {
        ProviderService {
            twilio,
            http_client: Client::new(),
            api_base: api_base.to_string(),
            mock_min_delay_secs: mock_delay_secs,
            mock_max_delay_secs: mock_delay_secs,
        }
    }

    /// Coloca una llamada. Nunca falla hacia afuera: cualquier error
    /// del proveedor real degrada al simulado para ese intento.
    pub async fn place_call(&self, phone_number: &str, use_ai_voice: bool) -> CallOutcome {
        if let Some(twilio) = &self.twilio {
            match self
                .place_twilio_call(twilio, phone_number, use_ai_voice)
                .await
            {
                Ok(outcome) => return outcome,
                Err(e) => {
                    log::warn!(
                        "Proveedor real falló para {}: {:?}. Usando llamada simulada.",
                        phone_number,
                        e
                    );
                }
            }
        }

        self.place_mock_call(phone_number, use_ai_voice).await
    }

    async fn place_twilio_call(
        &self,
        twilio: &TwilioConfig,
        phone_number: &str,
        use_ai_voice: bool,
    ) -> Result<CallOutcome> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.api_base, twilio.account_sid
        );

        let mut params = vec![
            ("To".to_string(), phone_number.to_string()),
            ("From".to_string(), twilio.phone_number.clone()),
        ];
        if use_ai_voice {
            let twiml = format!(
                r#"<Response><Say voice="alice" language="en-US">{}</Say></Response>"#,
                AI_VOICE_SCRIPT
            );
            params.push(("Twiml".to_string(), twiml));
        } else {
            params.push(("Url".to_string(), DEMO_VOICE_URL.to_string()));
        }

        let resp = self
            .http_client
            .post(&url)
            .basic_auth(&twilio.account_sid, Some(&twilio.auth_token))
            .form(&params)
            .send()
            .await
            .context("No se pudo contactar al proveedor de telefonía")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Proveedor respondió {}: {}", status, body));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .context("Respuesta del proveedor no es JSON válido")?;
        let sid = body
            .get("sid")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(CallOutcome {
            call_id: sid,
            status: "connected - AI voice delivered".to_string(),
            duration: None,
            simulated: false,
        })
    }

    /// Llamada simulada: delay uniforme y resultado al azar de la
    /// tabla fija.
    async fn place_mock_call(&self, _phone_number: &str, use_ai_voice: bool) -> CallOutcome {
        // El RNG no puede vivir a través del await.
        let (delay_secs, outcome_idx, sid_suffix) = {
            let mut rng = rand::thread_rng();
            use rand::Rng;
            (
                rng.gen_range(self.mock_min_delay_secs..=self.mock_max_delay_secs),
                rng.gen_range(0..MOCK_OUTCOMES.len()),
                rng.gen_range(1000..10000),
            )
        };

        tokio::time::sleep(Duration::from_secs_f64(delay_secs)).await;

        let (status, duration) = MOCK_OUTCOMES[outcome_idx];
        let mut status = status.to_string();

        if use_ai_voice && CallDisposition::classify(&status) == CallDisposition::Connected {
            status.push_str(" with AI voice");
        }

        CallOutcome {
            call_id: format!("mock_{}", sid_suffix),
            status,
            duration: Some(duration.to_string()),
            simulated: true,
        }
    }
}

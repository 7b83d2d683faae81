//! services/campaign_service.rs
//! Orquestador de campañas: estados Idle/Running, ciclo de marcado
//! en background y exclusividad de una sola campaña a la vez.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::config::dialer_config::DialerConfig;
use crate::errors::DialerError;
use crate::models::call_model::CallOutcome;
use crate::models::campaign_model::CampaignStatus;
use crate::services::call_log_service::CallLogService;
use crate::services::provider_service::ProviderService;

#[derive(Clone)]
pub struct CampaignService {
    status: Arc<RwLock<CampaignStatus>>,
    cancelled: Arc<AtomicBool>,
    provider: ProviderService,
    call_logs: CallLogService,
    config: DialerConfig,
}

impl CampaignService {
    pub fn new(
        provider: ProviderService,
        call_logs: CallLogService,
        config: DialerConfig,
    ) -> Self {
        CampaignService {
            status: Arc::new(RwLock::new(CampaignStatus::default())),
            cancelled: Arc::new(AtomicBool::new(false)),
            provider,
            call_logs,
            config,
        }
    }

    /// Snapshot del estado actual. Los lectores nunca ven una
    /// actualización a medias: todo cambio ocurre bajo el write lock.
    pub async fn status(&self) -> CampaignStatus {
        self.status.read().await.clone()
    }

    /// Arranca una campaña sobre una lista ya normalizada y no vacía.
    /// El check-and-set Idle→Running es atómico bajo el write lock:
    /// dos starts simultáneos jamás admiten dos ciclos.
    pub async fn start_campaign(
        &self,
        targets: Vec<String>,
        use_ai_voice: bool,
    ) -> Result<usize, DialerError> {
        let total = targets.len();

        {
            let mut status = self.status.write().await;
            if status.running {
                return Err(DialerError::CampaignInProgress);
            }
            *status = CampaignStatus {
                running: true,
                progress: 0,
                current_target: String::new(),
                total,
            };
        }
        self.cancelled.store(false, Ordering::SeqCst);

        log::info!("Campaña aceptada: {} números.", total);

        let service = self.clone();
        tokio::spawn(async move {
            if let Err(e) = service.run_dial_loop(targets, use_ai_voice).await {
                log::error!("Fallo inesperado en el ciclo de marcado: {:?}", e);
            }
            // Vuelta a Idle pase lo que pase; el resto de los campos
            // queda como quedó, para inspección.
            let mut status = service.status.write().await;
            status.running = false;
            log::info!("Campaña finalizada, orquestador en reposo.");
        });

        Ok(total)
    }

    /// El ciclo de marcado: un número a la vez, en orden.
    async fn run_dial_loop(&self, targets: Vec<String>, use_ai_voice: bool) -> Result<()> {
        let total = targets.len();

        for (idx, number) in targets.iter().enumerate() {
            if self.cancelled.load(Ordering::SeqCst) {
                log::warn!(
                    "Campaña cancelada en el objetivo {}/{}.",
                    idx + 1,
                    total
                );
                break;
            }

            {
                let mut status = self.status.write().await;
                status.current_target = format!("Calling {}/{}: {}", idx + 1, total, number);
            }

            let outcome = self.provider.place_call(number, use_ai_voice).await;
            log::info!(
                "Llamada {} a {}: {} (simulada={})",
                outcome.call_id,
                number,
                outcome.status,
                outcome.simulated
            );

            // Un fallo de persistencia pierde solo este registro.
            if let Err(e) = self
                .call_logs
                .append(number, &outcome.status, outcome.duration.as_deref())
                .await
            {
                log::error!("No se pudo registrar la llamada a {}: {:?}", number, e);
            }

            {
                let mut status = self.status.write().await;
                status.progress = ((idx + 1) * 100 / total) as u8;
            }

            // Pausa entre llamadas para no saturar al proveedor.
            let delay_secs = {
                use rand::Rng;
                rand::thread_rng().gen_range(
                    self.config.intercall_min_delay_secs..=self.config.intercall_max_delay_secs,
                )
            };
            tokio::time::sleep(Duration::from_secs_f64(delay_secs)).await;
        }

        Ok(())
    }

    /// Llamada suelta iniciada por comando. Comparte la exclusividad
    /// de las campañas (mismo check-and-set sobre `running`) pero no
    /// toca progress/total/current_target: no es una campaña con
    /// tamaño definido.
    ///
    /// La secuencia llamada→registro→reposo corre en una tarea
    /// propia, igual que el ciclo de campaña: si el caller abandona
    /// el await (actix descarta el future del handler cuando el
    /// cliente se desconecta), la llamada termina igual y `running`
    /// vuelve a false.
    pub async fn place_single_call(
        &self,
        phone_number: &str,
        use_ai_voice: bool,
    ) -> Result<CallOutcome, DialerError> {
        {
            let mut status = self.status.write().await;
            if status.running {
                return Err(DialerError::CampaignInProgress);
            }
            status.running = true;
        }

        let service = self.clone();
        let number = phone_number.to_string();
        let handle = tokio::spawn(async move {
            let outcome = service.provider.place_call(&number, use_ai_voice).await;

            // Un fallo de persistencia pierde solo este registro.
            if let Err(e) = service
                .call_logs
                .append(&number, &outcome.status, outcome.duration.as_deref())
                .await
            {
                log::error!("No se pudo registrar la llamada a {}: {:?}", number, e);
            }

            let mut status = service.status.write().await;
            status.running = false;
            outcome
        });

        match handle.await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                // Pánico o aborto dentro de la tarea: vuelta a reposo
                // controlada en lugar de dejar el flag colgado.
                log::error!("Fallo inesperado en la llamada suelta: {:?}", e);
                let mut status = self.status.write().await;
                status.running = false;
                Err(DialerError::CallFault)
            }
        }
    }

    /// Gancho interno de cancelación: el ciclo lo revisa en cada
    /// iteración. Nada lo invoca por defecto; una campaña corre
    /// completa salvo pedido explícito.
    #[allow(dead_code)]
    pub fn request_cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

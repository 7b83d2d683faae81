//! services/call_log_service.rs
//! Persistencia append-only del log de llamadas.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::models::call_model::{CallDisposition, CallLogRecord, CallLogsResponse};

#[derive(Debug, Clone)]
pub struct CallLogService {
    db_pool: Pool<Sqlite>,
}

impl CallLogService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        CallLogService { db_pool }
    }

    /// Crea la tabla `calls` si no existe. Idempotente, se corre al
    /// arranque.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS calls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                phone_number TEXT NOT NULL,
                status TEXT NOT NULL,
                call_duration TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db_pool)
        .await
        .context("Fallo al crear la tabla 'calls'")?;

        Ok(())
    }

    /// Inserta un registro por intento de llamada. Se escribe de
    /// forma síncrona antes de avanzar el ciclo; los registros nunca
    /// se mutan ni se borran.
    pub async fn append(
        &self,
        phone_number: &str,
        status: &str,
        duration: Option<&str>,
    ) -> Result<()> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO calls (phone_number, status, call_duration, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(phone_number)
        .bind(status)
        .bind(duration)
        .bind(now)
        .execute(&self.db_pool)
        .await
        .context("Fallo al insertar registro de llamada")?;

        Ok(())
    }

    /// Retorna los registros más recientes en orden cronológico
    /// inverso, más los conteos conectadas/fallidas.
    pub async fn recent_logs(&self, limit: i64) -> Result<CallLogsResponse> {
        let items: Vec<CallLogRecord> = sqlx::query_as(
            r#"
            SELECT id, phone_number, status, call_duration, created_at
            FROM calls
            ORDER BY created_at DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al leer el log de llamadas")?;

        let total_calls = items.len();
        let connected_calls = items
            .iter()
            .filter(|r| CallDisposition::classify(&r.status) == CallDisposition::Connected)
            .count();
        let failed_calls = total_calls - connected_calls;

        Ok(CallLogsResponse {
            total_calls,
            connected_calls,
            failed_calls,
            items,
        })
    }
}

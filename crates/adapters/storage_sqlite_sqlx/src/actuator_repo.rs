//! `SQLite` implementation of [`ActuatorRepository`].

use std::future::Future;
use std::sync::Arc;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hearth_app::ports::ActuatorRepository;
use hearth_domain::actuator::{Actuator, ActuatorRegistry};
use hearth_domain::error::HearthError;
use hearth_domain::id::{ActuatorId, DeviceId};
use hearth_persistence::assembler::{ActuatorDataModelAssembler, DataModelAssembler};
use hearth_persistence::data_model::ActuatorDataModel;
use hearth_persistence::visitor::project_actuator;

use crate::error::StorageError;

/// Wrapper for converting database rows into [`ActuatorDataModel`].
struct Record(ActuatorDataModel);

impl<'r> FromRow<'r, SqliteRow> for Record {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(ActuatorDataModel {
            actuator_id: row.try_get("id")?,
            device_id: row.try_get("device_id")?,
            model_path: row.try_get("model_path")?,
            actuator_type_id: row.try_get("actuator_type_id")?,
            actuator_name: row.try_get("name")?,
            integer_lower_limit: row.try_get("integer_lower_limit")?,
            integer_upper_limit: row.try_get("integer_upper_limit")?,
            decimal_lower_limit: row.try_get("decimal_lower_limit")?,
            decimal_upper_limit: row.try_get("decimal_upper_limit")?,
        }))
    }
}

fn into_records(rows: Vec<Record>) -> Vec<ActuatorDataModel> {
    rows.into_iter().map(|r| r.0).collect()
}

const INSERT: &str = "INSERT INTO actuators \
    (id, device_id, model_path, actuator_type_id, name, \
    integer_lower_limit, integer_upper_limit, decimal_lower_limit, decimal_upper_limit) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM actuators WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM actuators ORDER BY rowid";
const SELECT_BY_DEVICE: &str = "SELECT * FROM actuators WHERE device_id = ? ORDER BY rowid";

/// `SQLite`-backed actuator repository.
pub struct SqliteActuatorRepository {
    pool: SqlitePool,
    assembler: ActuatorDataModelAssembler,
}

impl SqliteActuatorRepository {
    /// Create a new repository using the given connection pool; stored rows
    /// are rebuilt through `registry`.
    #[must_use]
    pub fn new(pool: SqlitePool, registry: Arc<ActuatorRegistry>) -> Self {
        Self {
            pool,
            assembler: ActuatorDataModelAssembler::new(registry),
        }
    }
}

impl ActuatorRepository for SqliteActuatorRepository {
    fn create(
        &self,
        actuator: Actuator,
    ) -> impl Future<Output = Result<Actuator, HearthError>> + Send {
        let pool = self.pool.clone();
        async move {
            let record = project_actuator(&actuator);
            tracing::debug!(%record, "storing actuator");
            sqlx::query(INSERT)
                .bind(&record.actuator_id)
                .bind(&record.device_id)
                .bind(&record.model_path)
                .bind(&record.actuator_type_id)
                .bind(&record.actuator_name)
                .bind(record.integer_lower_limit)
                .bind(record.integer_upper_limit)
                .bind(record.decimal_lower_limit)
                .bind(record.decimal_upper_limit)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(actuator)
        }
    }

    fn get_by_id(
        &self,
        id: ActuatorId,
    ) -> impl Future<Output = Result<Option<Actuator>, HearthError>> + Send {
        let pool = self.pool.clone();
        let assembler = self.assembler.clone();
        async move {
            let row: Option<Record> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|r| assembler.to_domain(&r.0)).transpose()
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Actuator>, HearthError>> + Send {
        let pool = self.pool.clone();
        let assembler = self.assembler.clone();
        async move {
            let rows: Vec<Record> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            assembler.to_domain_all(&into_records(rows))
        }
    }

    fn find_by_device(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Actuator>, HearthError>> + Send {
        let pool = self.pool.clone();
        let assembler = self.assembler.clone();
        async move {
            let rows: Vec<Record> = sqlx::query_as(SELECT_BY_DEVICE)
                .bind(device_id.as_str())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            assembler.to_domain_all(&into_records(rows))
        }
    }
}

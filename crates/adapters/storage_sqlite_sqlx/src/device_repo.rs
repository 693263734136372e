//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hearth_app::ports::DeviceRepository;
use hearth_domain::device::Device;
use hearth_domain::error::HearthError;
use hearth_domain::id::DeviceId;
use hearth_persistence::assembler::{DataModelAssembler, DeviceDataModelAssembler};
use hearth_persistence::data_model::DeviceDataModel;

use crate::error::StorageError;

/// Wrapper for converting database rows into [`DeviceDataModel`].
struct Record(DeviceDataModel);

impl<'r> FromRow<'r, SqliteRow> for Record {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(DeviceDataModel {
            device_id: row.try_get("id")?,
            room_id: row.try_get("room_id")?,
            device_name: row.try_get("name")?,
            device_type_id: row.try_get("device_type_id")?,
            active: row.try_get("active")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO devices (id, room_id, name, device_type_id, active) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY rowid";
const UPDATE: &str =
    "UPDATE devices SET room_id = ?, name = ?, device_type_id = ?, active = ? WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send {
        let pool = self.pool.clone();
        async move {
            let record = DeviceDataModel::from(&device);
            sqlx::query(INSERT)
                .bind(&record.device_id)
                .bind(&record.room_id)
                .bind(&record.device_name)
                .bind(&record.device_type_id)
                .bind(record.active)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HearthError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Record> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|r| DeviceDataModelAssembler.to_domain(&r.0))
                .transpose()
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HearthError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Record> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let records: Vec<DeviceDataModel> = rows.into_iter().map(|r| r.0).collect();
            DeviceDataModelAssembler.to_domain_all(&records)
        }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send {
        let pool = self.pool.clone();
        async move {
            let record = DeviceDataModel::from(&device);
            sqlx::query(UPDATE)
                .bind(&record.room_id)
                .bind(&record.device_name)
                .bind(&record.device_type_id)
                .bind(record.active)
                .bind(&record.device_id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }
}

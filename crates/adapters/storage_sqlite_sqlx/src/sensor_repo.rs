//! `SQLite` implementation of [`SensorRepository`].
//!
//! Every kind lands in the same `sensors` table: the row is the kind's
//! [`SensorDataModel`], and loading goes back through the kind registry.

use std::future::Future;
use std::sync::Arc;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hearth_app::ports::SensorRepository;
use hearth_domain::error::HearthError;
use hearth_domain::id::{DeviceId, SensorId};
use hearth_domain::sensor::{Sensor, SensorRegistry};
use hearth_persistence::assembler::{DataModelAssembler, SensorDataModelAssembler};
use hearth_persistence::data_model::SensorDataModel;
use hearth_persistence::visitor::project_sensor;

use crate::error::StorageError;

/// Wrapper for converting database rows into [`SensorDataModel`].
struct Record(SensorDataModel);

impl<'r> FromRow<'r, SqliteRow> for Record {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(SensorDataModel {
            sensor_id: row.try_get("id")?,
            device_id: row.try_get("device_id")?,
            model_path: row.try_get("model_path")?,
            sensor_type_id: row.try_get("sensor_type_id")?,
            sensor_name: row.try_get("name")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
        }))
    }
}

fn into_records(rows: Vec<Record>) -> Vec<SensorDataModel> {
    rows.into_iter().map(|r| r.0).collect()
}

const INSERT: &str = "INSERT INTO sensors \
    (id, device_id, model_path, sensor_type_id, name, latitude, longitude, start_date, end_date) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM sensors WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM sensors ORDER BY rowid";
const SELECT_BY_DEVICE: &str = "SELECT * FROM sensors WHERE device_id = ? ORDER BY rowid";

/// `SQLite`-backed sensor repository.
pub struct SqliteSensorRepository {
    pool: SqlitePool,
    assembler: SensorDataModelAssembler,
}

impl SqliteSensorRepository {
    /// Create a new repository using the given connection pool; stored rows
    /// are rebuilt through `registry`.
    #[must_use]
    pub fn new(pool: SqlitePool, registry: Arc<SensorRegistry>) -> Self {
        Self {
            pool,
            assembler: SensorDataModelAssembler::new(registry),
        }
    }
}

impl SensorRepository for SqliteSensorRepository {
    fn create(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, HearthError>> + Send {
        let pool = self.pool.clone();
        async move {
            let record = project_sensor(&sensor);
            tracing::debug!(%record, "storing sensor");
            sqlx::query(INSERT)
                .bind(&record.sensor_id)
                .bind(&record.device_id)
                .bind(&record.model_path)
                .bind(&record.sensor_type_id)
                .bind(&record.sensor_name)
                .bind(&record.latitude)
                .bind(&record.longitude)
                .bind(&record.start_date)
                .bind(&record.end_date)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(sensor)
        }
    }

    fn get_by_id(
        &self,
        id: SensorId,
    ) -> impl Future<Output = Result<Option<Sensor>, HearthError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, HearthError>> + Send {
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
    ) -> impl Future<Output = Result<Vec<Sensor>, HearthError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_repo::SqliteDeviceRepository;
    use crate::pool::Config;
    use hearth_app::ports::DeviceRepository;
    use hearth_domain::device::Device;
    use hearth_domain::id::RoomId;
    use hearth_domain::sensor::catalogue::sensor_registry;
    use hearth_domain::sensor::{ElectricConsumptionWhSensor, SunsetTimeSensor, TemperatureSensor};
    use hearth_domain::value::{
        DatePeriod, DeviceName, DeviceTypeId, Gps, ModelPath, SensorName, SensorTypeId,
    };

    async fn setup() -> (SqliteSensorRepository, SqlitePool) {
        let db = Config::new("sqlite::memory:").build().await.unwrap();
        let devices = SqliteDeviceRepository::new(db.pool().clone());
        for id in ["device-1", "device-2"] {
            let device = Device::builder()
                .id(DeviceId::new(id).unwrap())
                .room_id(RoomId::new("garden").unwrap())
                .name(DeviceName::new("Weather station").unwrap())
                .device_type_id(DeviceTypeId::new("WeatherStation").unwrap())
                .build()
                .unwrap();
            devices.create(device).await.unwrap();
        }
        let repo =
            SqliteSensorRepository::new(db.pool().clone(), Arc::new(sensor_registry().unwrap()));
        (repo, db.pool().clone())
    }

    fn temperature(device_id: &str) -> Sensor {
        TemperatureSensor::new(
            DeviceId::new(device_id).unwrap(),
            ModelPath::new("TemperatureSensor").unwrap(),
            SensorTypeId::new("Temperature").unwrap(),
            SensorName::new("Kitchen").unwrap(),
        )
        .unwrap()
        .into()
    }

    fn sunset() -> Sensor {
        SunsetTimeSensor::new(
            DeviceId::new("device-1").unwrap(),
            ModelPath::new("SunsetTimeSensor").unwrap(),
            SensorTypeId::new("SunsetTime").unwrap(),
            SensorName::new("Garden").unwrap(),
            Gps::new(41.15, -8.61).unwrap(),
        )
        .unwrap()
        .into()
    }

    fn consumption() -> Sensor {
        let start = "2024-01-01T00:00:00".parse().unwrap();
        let end = "2024-02-01T00:00:00".parse().unwrap();
        ElectricConsumptionWhSensor::new(
            DeviceId::new("device-1").unwrap(),
            ModelPath::new("ElectricConsumptionWhSensor").unwrap(),
            SensorTypeId::new("ElectricConsumptionWh").unwrap(),
            SensorName::new("Main meter").unwrap(),
            DatePeriod::new(start, end).unwrap(),
        )
        .unwrap()
        .into()
    }

    #[tokio::test]
    async fn should_store_and_rebuild_each_shape_of_sensor() {
        let (repo, _) = setup().await;
        for sensor in [temperature("device-1"), sunset(), consumption()] {
            repo.create(sensor.clone()).await.unwrap();
            let fetched = repo.get_by_id(sensor.id().clone()).await.unwrap().unwrap();
            assert_eq!(fetched, sensor);
        }
    }

    #[tokio::test]
    async fn should_keep_milliseconds_of_stored_period() {
        let (repo, pool) = setup().await;
        let start = "2024-03-01T06:30:00.250".parse().unwrap();
        let end = "2024-03-01T06:30:00.750".parse().unwrap();
        let sensor: Sensor = ElectricConsumptionWhSensor::new(
            DeviceId::new("device-1").unwrap(),
            ModelPath::new("ElectricConsumptionWhSensor").unwrap(),
            SensorTypeId::new("ElectricConsumptionWh").unwrap(),
            SensorName::new("Sub meter").unwrap(),
            DatePeriod::new(start, end).unwrap(),
        )
        .unwrap()
        .into();
        repo.create(sensor.clone()).await.unwrap();

        let (start_date,): (Option<String>,) =
            sqlx::query_as("SELECT start_date FROM sensors WHERE id = ?")
                .bind(sensor.id().as_str())
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(start_date.as_deref(), Some("2024-03-01T06:30:00.250"));

        let fetched = repo.get_by_id(sensor.id().clone()).await.unwrap().unwrap();
        assert_eq!(fetched, sensor);
    }

    #[tokio::test]
    async fn should_leave_unused_extras_null_in_row() {
        let (repo, pool) = setup().await;
        let sensor = sunset();
        repo.create(sensor.clone()).await.unwrap();

        let (latitude, start_date): (Option<String>, Option<String>) =
            sqlx::query_as("SELECT latitude, start_date FROM sensors WHERE id = ?")
                .bind(sensor.id().as_str())
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(latitude.as_deref(), Some("41.15"));
        assert!(start_date.is_none());
    }

    #[tokio::test]
    async fn should_list_all_and_by_device_in_insertion_order() {
        let (repo, _) = setup().await;
        let first = temperature("device-1");
        let second = temperature("device-2");
        let third = sunset();
        for sensor in [&first, &second, &third] {
            repo.create(sensor.clone()).await.unwrap();
        }

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![first.clone(), second, third.clone()]);

        let on_device = repo
            .find_by_device(DeviceId::new("device-1").unwrap())
            .await
            .unwrap();
        assert_eq!(on_device, vec![first, third]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_nothing_stored() {
        let (repo, _) = setup().await;
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_fail_loading_row_with_unknown_model_path() {
        let (repo, pool) = setup().await;
        sqlx::query(
            "INSERT INTO sensors (id, device_id, model_path, sensor_type_id, name) \
             VALUES ('legacy', 'device-1', 'GeigerCounter', 'Radiation', 'Old')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let result = repo.get_by_id(SensorId::new("legacy").unwrap()).await;
        assert!(matches!(result, Err(HearthError::UnsupportedKind { .. })));
    }

    #[tokio::test]
    async fn should_reject_sensor_for_unknown_device() {
        let (repo, _) = setup().await;
        let result = repo.create(temperature("device-9")).await;
        assert!(matches!(result, Err(HearthError::Storage(_))));
    }
}

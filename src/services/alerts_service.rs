use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::{AlertError, Result};
use crate::models::{Alert, AlertType, CreateAlertInput, UpdateAlertInput};
use crate::store::AlertStore;

/// CRUD over the injected alert store.
///
/// Every mutation is a load → modify → save of the whole collection, run
/// under a single lock so two mutations can never interleave and drop each
/// other's writes. `list` reads without locking.
#[derive(Clone)]
pub struct AlertsService {
    store: Arc<dyn AlertStore>,
    write_lock: Arc<Mutex<()>>,
}

impl AlertsService {
    pub fn new(store: Arc<dyn AlertStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All alerts, in store (insertion) order.
    pub fn list(&self) -> Vec<Alert> {
        self.store.load()
    }

    /// Validates the input, assigns identity and defaults, appends the new
    /// alert and persists. `asset_id`, `type` and `target_value` are
    /// required; `asset_symbol` falls back to a `SYMBOL_<asset_id>`
    /// placeholder.
    pub fn create(&self, input: CreateAlertInput) -> Result<Alert> {
        let (Some(asset_id), Some(type_str), Some(target_value)) =
            (input.asset_id, input.alert_type, input.target_value)
        else {
            return Err(AlertError::Validation(
                "missing required fields: asset_id, type, target_value".to_string(),
            ));
        };

        let alert_type = parse_alert_type(&type_str)?;

        let alert = Alert {
            id: Uuid::new_v4().to_string(),
            asset_symbol: input
                .asset_symbol
                .unwrap_or_else(|| format!("SYMBOL_{asset_id}")),
            asset_id,
            alert_type,
            target_value,
            is_active: true,
            created_at: now_iso(),
            triggered_at: None,
        };

        let _guard = self.lock_mutations();
        let mut alerts = self.store.load();
        alerts.push(alert.clone());
        self.store.save(&alerts)?;

        Ok(alert)
    }

    /// Merges the supplied fields into the alert with the given id and
    /// persists. Only fields present in the input overwrite; an explicit
    /// `is_active: false` counts as present. `triggered_at` is carried
    /// through untouched, including when an alert is re-activated.
    pub fn update(&self, id: &str, input: UpdateAlertInput) -> Result<Alert> {
        let _guard = self.lock_mutations();
        let mut alerts = self.store.load();

        let Some(existing) = alerts.iter_mut().find(|a| a.id == id) else {
            return Err(AlertError::NotFound);
        };

        if let Some(type_str) = input.alert_type.as_deref() {
            existing.alert_type = parse_alert_type(type_str)?;
        }
        if let Some(asset_id) = input.asset_id {
            existing.asset_id = asset_id;
        }
        if let Some(asset_symbol) = input.asset_symbol {
            existing.asset_symbol = asset_symbol;
        }
        if let Some(target_value) = input.target_value {
            existing.target_value = target_value;
        }
        if let Some(is_active) = input.is_active {
            existing.is_active = is_active;
        }

        let updated = existing.clone();
        self.store.save(&alerts)?;

        Ok(updated)
    }

    /// Removes the alert with the given id, persists the survivors in their
    /// original order and returns the removed record.
    pub fn delete(&self, id: &str) -> Result<Alert> {
        let _guard = self.lock_mutations();
        let mut alerts = self.store.load();

        let Some(pos) = alerts.iter().position(|a| a.id == id) else {
            return Err(AlertError::NotFound);
        };

        let removed = alerts.remove(pos);
        self.store.save(&alerts)?;

        Ok(removed)
    }

    fn lock_mutations(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn parse_alert_type(s: &str) -> Result<AlertType> {
    AlertType::parse(s).ok_or_else(|| {
        AlertError::Validation(format!(
            "invalid alert type {s:?}, must be one of: {}",
            AlertType::VALID_VALUES
        ))
    })
}

fn now_iso() -> String {
    // millisecond precision, `Z` suffix: 2026-08-31T12:00:00.000Z
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

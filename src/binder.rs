//! Field persistence binding
//!
//! Wires three behaviors at component initialization: restore a stored value
//! (honoring expiry), then subscribe to changes and write each new value
//! back. Restore runs synchronously before the subscription is registered,
//! so a binding never clobbers a freshly restored value with the default.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::clock::{Clock, EpochMillis};
use crate::error::PersistError;
use crate::record::PersistedRecord;
use crate::reltime::parse_relative_time;
use crate::storage::KeyValueStore;
use crate::watch::{ReactiveField, WatchOptions};

/// Caller-facing persistence options.
#[derive(Debug, Clone)]
pub struct PersistOptions {
    /// Relative-duration spec ("30m", "2d"); `None` means never expires.
    pub expiry: Option<String>,
    /// Explicit storage key; `None` derives one from component + field name.
    pub key: Option<String>,
    /// Fire the write subscription once immediately at bind time.
    pub immediate: bool,
    /// Structural comparison when deciding whether the field changed.
    pub deep: bool,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            expiry: None,
            key: None,
            immediate: false,
            deep: true,
        }
    }
}

/// Options resolved against a component/field name. Immutable once built.
#[derive(Debug, Clone)]
pub struct BindingConfig {
    pub storage_key: String,
    pub expiry_spec: Option<String>,
    pub trigger_on_bind: bool,
    pub deep_watch: bool,
}

impl BindingConfig {
    /// Resolve options for a named field.
    ///
    /// The default key is the lower-cased component name joined to the field
    /// name with an underscore; an anonymous component falls back to `"_"`.
    pub fn resolve(component: &str, field: &str, options: PersistOptions) -> Self {
        let storage_key = options.key.unwrap_or_else(|| {
            let name = if component.is_empty() {
                "_".to_string()
            } else {
                component.to_lowercase()
            };
            format!("{name}_{field}")
        });
        Self {
            storage_key,
            expiry_spec: options.expiry,
            trigger_on_bind: options.immediate,
            deep_watch: options.deep,
        }
    }
}

/// Read the stored value for `config`, if one is present and unexpired.
///
/// Unreadable or corrupt entries are logged and reported as absent; this
/// path never fails. Expired records stay in storage until the next write
/// overwrites them.
pub fn restore<T, S>(store: &S, config: &BindingConfig, now: EpochMillis) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let raw = match store.get(&config.storage_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("failed to read stored value: {err}");
            return None;
        }
    };
    match serde_json::from_str::<PersistedRecord<T>>(&raw) {
        Ok(record) if record.is_live(now) => {
            log::info!("restored {:?} from storage", config.storage_key);
            Some(record.value)
        }
        Ok(_) => {
            log::info!("stored value under {:?} has expired", config.storage_key);
            None
        }
        Err(err) => {
            log::warn!(
                "discarding corrupt record under {:?}: {err}",
                config.storage_key
            );
            None
        }
    }
}

/// Write `value` under the binding's key, overwriting any prior record.
///
/// Expiry is recomputed from the spec relative to `now` on every write, so a
/// configured expiry slides forward with each change.
pub fn write<T, S>(
    store: &S,
    config: &BindingConfig,
    value: &T,
    now: EpochMillis,
) -> Result<(), PersistError>
where
    T: Serialize,
    S: KeyValueStore,
{
    let expiry = match &config.expiry_spec {
        Some(spec) => Some(parse_relative_time(spec, now)?),
        None => None,
    };
    let record = PersistedRecord { value, expiry };
    let json = serde_json::to_string(&record)?;
    store.set(&config.storage_key, &json)?;
    Ok(())
}

/// Bind `field` to persistent storage for the component's lifetime.
///
/// Restores synchronously, then registers the write-back subscription with
/// the configured `immediate`/`deep` options passed through verbatim. Write
/// failures after binding propagate to whoever triggers the change; the
/// restore step itself never fails.
pub fn bind<T, F, S, C>(
    component: &str,
    field_name: &str,
    options: PersistOptions,
    field: &mut F,
    store: S,
    clock: C,
) -> Result<(), PersistError>
where
    T: Serialize + DeserializeOwned + 'static,
    F: ReactiveField<T>,
    S: KeyValueStore + 'static,
    C: Clock + 'static,
{
    let config = BindingConfig::resolve(component, field_name, options);
    bind_with_config(config, field, store, clock)
}

/// Bind with an already-resolved config.
pub fn bind_with_config<T, F, S, C>(
    config: BindingConfig,
    field: &mut F,
    store: S,
    clock: C,
) -> Result<(), PersistError>
where
    T: Serialize + DeserializeOwned + 'static,
    F: ReactiveField<T>,
    S: KeyValueStore + 'static,
    C: Clock + 'static,
{
    if let Some(value) = restore::<T, _>(&store, &config, clock.now_ms()) {
        field.set(value)?;
    }
    let watch = WatchOptions {
        immediate: config.trigger_on_bind,
        deep: config.deep_watch,
    };
    field.subscribe(
        Box::new(move |value| write(&store, &config, value, clock.now_ms())),
        watch,
    )
}

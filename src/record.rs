//! Persisted record envelope
//!
//! Wire format: `{"value": <json>, "expiry"?: <integer epoch ms>}`.

use serde::{Deserialize, Serialize};

use crate::clock::EpochMillis;

/// One serialized snapshot of a field's value.
///
/// Written fresh on every change; the previous record under the same key is
/// overwritten wholesale. `expiry` is an absolute instant and is omitted
/// from the JSON when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord<T> {
    pub value: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<EpochMillis>,
}

impl<T> PersistedRecord<T> {
    /// Whether the record is still valid at `now`.
    ///
    /// A record expiring exactly at `now` is already dead; only a strictly
    /// positive remaining lifetime counts.
    pub fn is_live(&self, now: EpochMillis) -> bool {
        match self.expiry {
            None => true,
            Some(expiry) => expiry - now > 0,
        }
    }
}

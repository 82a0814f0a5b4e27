//! Persist Field - reactive field persistence with sliding expiry
//!
//! Core modules:
//! - `reltime`: Relative-duration spec parsing ("30m" -> epoch ms)
//! - `binder`: Restore-on-bind / write-on-change wiring
//! - `record`: Serialized record envelope
//! - `storage`: Key-value backends (LocalStorage on web)
//! - `watch`: Change-subscription surface
//! - `clock`: Browser/native time abstraction
//!
//! A field is bound once at component initialization: any live stored value
//! is restored first, then every subsequent change is written back as a
//! fresh JSON record. A configured expiry is recomputed relative to each
//! write, so it slides forward while the field stays active.

pub mod binder;
pub mod clock;
pub mod error;
pub mod record;
pub mod reltime;
pub mod storage;
pub mod watch;

pub use binder::{BindingConfig, PersistOptions, bind, bind_with_config, restore, write};
pub use clock::{Clock, EpochMillis, FixedClock, SystemClock};
pub use error::{ParseTimeError, PersistError};
pub use record::PersistedRecord;
pub use reltime::parse_relative_time;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use watch::{ReactiveField, WatchCallback, WatchOptions, Watched};

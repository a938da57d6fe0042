use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io::ErrorKind;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use charmloom_core::snapshot::{
    decode_snapshot, encode_snapshot, validate_snapshot, ConfigSnapshot, SlotRecord,
    CONFIG_SNAPSHOT_VERSION,
};

use crate::builder::{BuilderCore, BuilderSnapshot};
use crate::input::SWAP_HINT_DELAY_MS;

pub const SNAPSHOT_KEY: &str = "charmloom.snapshot.v1";
pub const PREFS_KEY: &str = "charmloom.prefs.v1";

pub const AUTOSAVE_INTERVAL_MS: f32 = 5000.0;

pub trait SnapshotStore {
    fn save(&mut self, key: &str, raw: &str) -> Result<(), String>;
    fn load(&self, key: &str) -> Option<String>;
    fn clear(&mut self, key: &str) -> Result<(), String>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, key: &str, raw: &str) -> Result<(), String> {
        self.entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn clear(&mut self, key: &str) -> Result<(), String> {
        self.entries.remove(key);
        Ok(())
    }
}

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, key: &str, raw: &str) -> Result<(), String> {
        fs::create_dir_all(&self.dir).map_err(|err| err.to_string())?;
        fs::write(self.path_for(key), raw).map_err(|err| err.to_string())
    }

    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn clear(&mut self, key: &str) -> Result<(), String> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.to_string()),
        }
    }
}

pub fn build_config_snapshot(snapshot: &BuilderSnapshot) -> ConfigSnapshot {
    ConfigSnapshot {
        version: CONFIG_SNAPSHOT_VERSION,
        holder_id: snapshot.holder.map(|holder| holder.id.to_string()),
        metal: snapshot.metal,
        length: snapshot.length,
        slots: snapshot
            .slots
            .iter()
            .map(|slot| SlotRecord {
                id: slot.id,
                angle: slot.angle,
                charm_id: slot.charm.map(|charm| charm.id.to_string()),
            })
            .collect(),
    }
}

pub fn save_configuration(
    store: &mut dyn SnapshotStore,
    config: &ConfigSnapshot,
) -> Result<(), String> {
    let bytes = encode_snapshot(config).ok_or_else(|| "snapshot encode failed".to_string())?;
    let raw = STANDARD.encode(bytes);
    store.save(SNAPSHOT_KEY, &raw)?;
    debug!("configuration saved ({} slots)", config.slots.len());
    Ok(())
}

// Missing, corrupt, stale-version and invalid snapshots all come back as
// None; callers fall back to the default empty configuration.
pub fn load_configuration(store: &dyn SnapshotStore) -> Option<ConfigSnapshot> {
    let raw = store.load(SNAPSHOT_KEY)?;
    if raw.is_empty() {
        return None;
    }
    let Ok(bytes) = STANDARD.decode(raw.as_bytes()) else {
        warn!("persisted configuration is not valid base64, discarding");
        return None;
    };
    let Some(config) = decode_snapshot(&bytes) else {
        warn!("persisted configuration failed to decode, discarding");
        return None;
    };
    if config.version != CONFIG_SNAPSHOT_VERSION {
        debug!(
            "persisted configuration version {} != {}, discarding",
            config.version, CONFIG_SNAPSHOT_VERSION
        );
        return None;
    }
    if let Err(reason) = validate_snapshot(&config) {
        warn!("persisted configuration invalid ({reason}), discarding");
        return None;
    }
    Some(config)
}

pub fn restore_configuration(core: &BuilderCore, store: &dyn SnapshotStore) -> bool {
    match load_configuration(store) {
        Some(config) => {
            core.restore(&config);
            true
        }
        None => false,
    }
}

pub fn clear_configuration(store: &mut dyn SnapshotStore) -> Result<(), String> {
    store.clear(SNAPSHOT_KEY)
}

// Gated twice: at most one attempt per interval, and a write only happens
// when the stable configuration changed since the last save.
pub struct Autosaver {
    interval_ms: f32,
    last_attempt_ms: Option<f32>,
    last_fingerprint: Option<u64>,
}

impl Default for Autosaver {
    fn default() -> Self {
        Self::new()
    }
}

impl Autosaver {
    pub fn new() -> Self {
        Self::with_interval(AUTOSAVE_INTERVAL_MS)
    }

    pub fn with_interval(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            last_attempt_ms: None,
            last_fingerprint: None,
        }
    }

    pub fn tick(
        &mut self,
        snapshot: &BuilderSnapshot,
        store: &mut dyn SnapshotStore,
        now_ms: f32,
    ) -> bool {
        if let Some(last) = self.last_attempt_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_attempt_ms = Some(now_ms);
        let fingerprint = config_fingerprint(snapshot);
        if self.last_fingerprint == Some(fingerprint) {
            return false;
        }
        let config = build_config_snapshot(snapshot);
        if let Err(reason) = save_configuration(store, &config) {
            warn!("autosave failed: {reason}");
            return false;
        }
        self.last_fingerprint = Some(fingerprint);
        true
    }
}

fn config_fingerprint(snapshot: &BuilderSnapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    snapshot.holder.map(|holder| holder.id).hash(&mut hasher);
    snapshot.metal.hash(&mut hasher);
    snapshot.length.hash(&mut hasher);
    for slot in &snapshot.slots {
        slot.id.hash(&mut hasher);
        slot.angle.to_bits().hash(&mut hasher);
        slot.charm.map(|charm| charm.id).hash(&mut hasher);
    }
    hasher.finish()
}

// Hover is pointless on touch-only devices, so hosts can disable or retune
// the affordance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BuilderPrefs {
    pub swap_hint_enabled: bool,
    pub swap_hint_delay_ms: f32,
}

impl Default for BuilderPrefs {
    fn default() -> Self {
        Self {
            swap_hint_enabled: true,
            swap_hint_delay_ms: SWAP_HINT_DELAY_MS,
        }
    }
}

pub fn save_prefs(store: &mut dyn SnapshotStore, prefs: &BuilderPrefs) -> Result<(), String> {
    let raw = serde_json::to_string(prefs).map_err(|err| err.to_string())?;
    store.save(PREFS_KEY, &raw)
}

pub fn load_prefs(store: &dyn SnapshotStore) -> BuilderPrefs {
    let Some(raw) = store.load(PREFS_KEY) else {
        return BuilderPrefs::default();
    };
    match serde_json::from_str(&raw) {
        Ok(prefs) => prefs,
        Err(err) => {
            debug!("preferences unreadable ({err}), using defaults");
            BuilderPrefs::default()
        }
    }
}

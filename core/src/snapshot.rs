use rkyv::rancor::Error;
use rkyv::{Archive, Deserialize, Serialize};

use crate::collision::is_in_exclusion_zone;

pub const CONFIG_SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
pub enum Metal {
    #[default]
    SterlingSilver,
    GoldVermeil,
}

impl Metal {
    pub fn id(self) -> &'static str {
        match self {
            Metal::SterlingSilver => "sterling-silver",
            Metal::GoldVermeil => "gold-vermeil",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim() {
            "sterling-silver" => Some(Metal::SterlingSilver),
            "gold-vermeil" => Some(Metal::GoldVermeil),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
pub enum ChainLength {
    In16,
    #[default]
    In18,
    In20,
}

impl ChainLength {
    pub fn inches(self) -> u32 {
        match self {
            ChainLength::In16 => 16,
            ChainLength::In18 => 18,
            ChainLength::In20 => 20,
        }
    }

    pub fn from_inches(inches: u32) -> Option<Self> {
        match inches {
            16 => Some(ChainLength::In16),
            18 => Some(ChainLength::In18),
            20 => Some(ChainLength::In20),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub struct SlotRecord {
    pub id: u64,
    pub angle: f32,
    pub charm_id: Option<String>,
}

// Stable configuration only. Tool, selection, swap and preview state are
// session-local and never serialized.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub version: u32,
    pub holder_id: Option<String>,
    pub metal: Metal,
    pub length: ChainLength,
    pub slots: Vec<SlotRecord>,
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self {
            version: CONFIG_SNAPSHOT_VERSION,
            holder_id: None,
            metal: Metal::default(),
            length: ChainLength::default(),
            slots: Vec::new(),
        }
    }
}

pub fn validate_snapshot(snapshot: &ConfigSnapshot) -> Result<(), String> {
    if let Some(holder_id) = snapshot.holder_id.as_deref() {
        if holder_id.trim().is_empty() {
            return Err("missing holder id".to_string());
        }
    }
    for record in &snapshot.slots {
        if !record.angle.is_finite() {
            return Err(format!("slot {} has a non-finite angle", record.id));
        }
        if is_in_exclusion_zone(record.angle) {
            return Err(format!("slot {} sits in the clasp arc", record.id));
        }
        if let Some(charm_id) = record.charm_id.as_deref() {
            if charm_id.trim().is_empty() {
                return Err(format!("slot {} has an empty charm id", record.id));
            }
        }
    }
    Ok(())
}

pub fn encode_snapshot(snapshot: &ConfigSnapshot) -> Option<Vec<u8>> {
    rkyv::to_bytes::<Error>(snapshot)
        .ok()
        .map(|bytes| bytes.into_vec())
}

pub fn decode_snapshot(bytes: &[u8]) -> Option<ConfigSnapshot> {
    rkyv::from_bytes::<ConfigSnapshot, Error>(bytes).ok()
}

use crate::catalog::{charm_by_id, CharmEntry};
use crate::collision::can_place;
use crate::geometry::normalize_angle;
use crate::snapshot::SlotRecord;

pub type SlotId = u64;

#[derive(Clone, Copy, Debug)]
pub struct Slot {
    pub id: SlotId,
    pub angle: f32,
    pub charm: Option<&'static CharmEntry>,
}

// Mutations re-validate their input and degrade to silent no-ops when the
// operation is illegal. Ids come from a monotone counter and are never
// reused within a registry's lifetime.
#[derive(Clone, Debug, Default)]
pub struct SlotRegistry {
    slots: Vec<Slot>,
    next_id: SlotId,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn occupied_angles(&self) -> Vec<f32> {
        self.slots.iter().map(|slot| slot.angle).collect()
    }

    pub fn charm_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.charm.is_some()).count()
    }

    pub fn charms_total_price(&self) -> u32 {
        self.slots
            .iter()
            .filter_map(|slot| slot.charm)
            .map(|charm| charm.price)
            .sum()
    }

    pub fn add_slot(&mut self, angle: f32) -> Option<SlotId> {
        if !angle.is_finite() {
            return None;
        }
        let angle = normalize_angle(angle);
        if !can_place(angle, &self.occupied_angles()) {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            angle,
            charm: None,
        });
        Some(id)
    }

    pub fn remove_slot(&mut self, id: SlotId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.id != id);
        self.slots.len() != before
    }

    pub fn assign_charm(&mut self, id: SlotId, charm: &'static CharmEntry) -> bool {
        match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => {
                slot.charm = Some(charm);
                true
            }
            None => false,
        }
    }

    pub fn clear_charm(&mut self, id: SlotId) -> bool {
        match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => {
                slot.charm = None;
                true
            }
            None => false,
        }
    }

    pub fn swap_charms(&mut self, a: SlotId, b: SlotId) -> bool {
        if a == b {
            return false;
        }
        let index_a = self.slots.iter().position(|slot| slot.id == a);
        let index_b = self.slots.iter().position(|slot| slot.id == b);
        let (Some(index_a), Some(index_b)) = (index_a, index_b) else {
            return false;
        };
        let charm_a = self.slots[index_a].charm;
        self.slots[index_a].charm = self.slots[index_b].charm;
        self.slots[index_b].charm = charm_a;
        true
    }

    // Records that violate the placement invariants are dropped, as are
    // duplicate ids. Unknown charm ids keep the slot but drop the occupant.
    pub fn from_records(records: &[SlotRecord]) -> Self {
        let mut registry = Self::new();
        for record in records {
            if !record.angle.is_finite() {
                continue;
            }
            let angle = normalize_angle(record.angle);
            if !can_place(angle, &registry.occupied_angles()) {
                continue;
            }
            if registry.slot(record.id).is_some() {
                continue;
            }
            let charm = record.charm_id.as_deref().and_then(charm_by_id);
            registry.slots.push(Slot {
                id: record.id,
                angle,
                charm,
            });
            if record.id >= registry.next_id {
                registry.next_id = record.id + 1;
            }
        }
        registry
    }

    pub fn to_records(&self) -> Vec<SlotRecord> {
        self.slots
            .iter()
            .map(|slot| SlotRecord {
                id: slot.id,
                angle: slot.angle,
                charm_id: slot.charm.map(|charm| charm.id.to_string()),
            })
            .collect()
    }
}

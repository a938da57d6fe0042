use std::cell::RefCell;
use std::rc::Rc;

use charmloom_core::catalog::{charm_by_id, holder_by_id, HolderEntry};
use charmloom_core::collision::{
    has_collision, is_in_exclusion_zone, is_within_placement_band, MIN_ANGULAR_DISTANCE_DEG,
};
use charmloom_core::geometry::{angle_from_pointer, radial_distance, CENTER_X, CENTER_Y};
use charmloom_core::registry::{Slot, SlotId, SlotRegistry};
use charmloom_core::snapshot::{ChainLength, ConfigSnapshot, Metal};

use crate::input::SwapHint;
use crate::persist::BuilderPrefs;

pub type BuilderSubscriber = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    None,
    Add,
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwapGesture {
    #[default]
    Inactive,
    ChoosingSource,
    AwaitingTarget {
        source: SlotId,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementPreview {
    pub angle: f32,
    pub collides: bool,
}

struct BuilderState {
    holder: Option<&'static HolderEntry>,
    metal: Metal,
    length: ChainLength,
    registry: SlotRegistry,
    tool: Tool,
    active_slot: Option<SlotId>,
    swap: SwapGesture,
    preview: Option<PlacementPreview>,
    swap_hint: SwapHint,
}

impl BuilderState {
    fn new() -> Self {
        Self {
            holder: None,
            metal: Metal::default(),
            length: ChainLength::default(),
            registry: SlotRegistry::new(),
            tool: Tool::None,
            active_slot: None,
            swap: SwapGesture::Inactive,
            preview: None,
            swap_hint: SwapHint::new(),
        }
    }

    fn clear_interaction(&mut self) {
        self.tool = Tool::None;
        self.active_slot = None;
        self.swap = SwapGesture::Inactive;
        self.preview = None;
        self.swap_hint.dismiss();
    }
}

#[derive(Clone)]
pub struct BuilderSnapshot {
    pub holder: Option<&'static HolderEntry>,
    pub metal: Metal,
    pub length: ChainLength,
    pub slots: Vec<Slot>,
    pub tool: Tool,
    pub active_slot: Option<SlotId>,
    pub swap: SwapGesture,
    pub preview: Option<PlacementPreview>,
    pub swap_hint_slot: Option<SlotId>,
}

impl BuilderSnapshot {
    pub fn total_price(&self) -> u32 {
        let base = self.holder.map(|holder| holder.base_price).unwrap_or(0);
        let charms: u32 = self
            .slots
            .iter()
            .filter_map(|slot| slot.charm)
            .map(|charm| charm.price)
            .sum();
        base + charms
    }

    pub fn charm_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.charm.is_some()).count()
    }
}

struct SnapshotBuffer {
    front: BuilderSnapshot,
    back: BuilderSnapshot,
}

impl SnapshotBuffer {
    fn new(state: &BuilderState) -> Self {
        let snapshot = build_snapshot_from_state(state);
        Self {
            front: snapshot.clone(),
            back: snapshot,
        }
    }

    fn refresh_from_state(&mut self, state: &BuilderState) {
        fill_snapshot_from_state(state, &mut self.back);
        std::mem::swap(&mut self.front, &mut self.back);
    }
}

fn build_snapshot_from_state(state: &BuilderState) -> BuilderSnapshot {
    BuilderSnapshot {
        holder: state.holder,
        metal: state.metal,
        length: state.length,
        slots: state.registry.slots().to_vec(),
        tool: state.tool,
        active_slot: state.active_slot,
        swap: state.swap,
        preview: state.preview,
        swap_hint_slot: state.swap_hint.visible_slot(),
    }
}

fn fill_snapshot_from_state(state: &BuilderState, snapshot: &mut BuilderSnapshot) {
    snapshot.holder = state.holder;
    snapshot.metal = state.metal;
    snapshot.length = state.length;
    snapshot.slots.clear();
    snapshot.slots.extend_from_slice(state.registry.slots());
    snapshot.tool = state.tool;
    snapshot.active_slot = state.active_slot;
    snapshot.swap = state.swap;
    snapshot.preview = state.preview;
    snapshot.swap_hint_slot = state.swap_hint.visible_slot();
}

pub struct BuilderCore {
    state: RefCell<BuilderState>,
    snapshots: RefCell<SnapshotBuffer>,
    subscribers: Rc<RefCell<Vec<BuilderSubscriber>>>,
}

impl BuilderCore {
    pub fn new() -> Rc<Self> {
        let state = BuilderState::new();
        let snapshots = SnapshotBuffer::new(&state);
        Rc::new(Self {
            state: RefCell::new(state),
            snapshots: RefCell::new(snapshots),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub fn subscribe(&self, subscriber: BuilderSubscriber) -> BuilderSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        BuilderSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub fn snapshot(&self) -> BuilderSnapshot {
        self.snapshots.borrow().front.clone()
    }

    fn notify(&self) {
        {
            let state = self.state.borrow();
            self.snapshots.borrow_mut().refresh_from_state(&state);
        }
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    // reselecting the active tool toggles back to None
    pub fn select_tool(&self, tool: Tool) {
        {
            let mut state = self.state.borrow_mut();
            state.tool = if state.tool == tool { Tool::None } else { tool };
            state.active_slot = None;
            state.swap = SwapGesture::Inactive;
            state.preview = None;
            state.swap_hint.dismiss();
        }
        self.notify();
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        let changed = {
            let mut state = self.state.borrow_mut();
            let next = if state.tool == Tool::Add && state.swap == SwapGesture::Inactive {
                preview_at(&state.registry, x, y)
            } else {
                None
            };
            if state.preview == next {
                false
            } else {
                state.preview = next;
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    pub fn pointer_leave(&self) {
        let changed = {
            let mut state = self.state.borrow_mut();
            state.preview.take().is_some()
        };
        if changed {
            self.notify();
        }
    }

    // A successful add disarms the tool; remove stays latched across its
    // own removals.
    pub fn canvas_click(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.tool != Tool::Add {
                return;
            }
            let Some(preview) = state.preview else {
                return;
            };
            if preview.collides {
                return;
            }
            let Some(id) = state.registry.add_slot(preview.angle) else {
                return;
            };
            state.active_slot = Some(id);
            state.tool = Tool::None;
            state.preview = None;
        }
        self.notify();
    }

    // precedence: remove tool, swap source, swap resolution, selection
    pub fn slot_click(&self, id: SlotId) {
        {
            let mut state = self.state.borrow_mut();
            if state.registry.slot(id).is_none() {
                return;
            }
            if state.tool == Tool::Remove {
                remove_slot(&mut state, id);
            } else {
                match state.swap {
                    SwapGesture::ChoosingSource => {
                        let occupied = state
                            .registry
                            .slot(id)
                            .map(|slot| slot.charm.is_some())
                            .unwrap_or(false);
                        if !occupied {
                            return;
                        }
                        state.swap = SwapGesture::AwaitingTarget { source: id };
                    }
                    SwapGesture::AwaitingTarget { source } => {
                        if source != id {
                            state.registry.swap_charms(source, id);
                        }
                        state.swap = SwapGesture::Inactive;
                    }
                    SwapGesture::Inactive => {
                        state.active_slot = Some(id);
                        state.swap_hint.dismiss();
                    }
                }
            }
        }
        self.notify();
    }

    pub fn enter_swap_mode(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.tool != Tool::None {
                return;
            }
            state.swap = SwapGesture::ChoosingSource;
            state.active_slot = None;
            state.swap_hint.dismiss();
        }
        self.notify();
    }

    // hover-affordance entry: the hovered slot becomes the source directly
    pub fn begin_swap(&self, id: SlotId) {
        {
            let mut state = self.state.borrow_mut();
            if state.tool != Tool::None || state.registry.len() <= 1 {
                return;
            }
            let occupied = state
                .registry
                .slot(id)
                .map(|slot| slot.charm.is_some())
                .unwrap_or(false);
            if !occupied {
                return;
            }
            state.swap = SwapGesture::AwaitingTarget { source: id };
            state.active_slot = None;
            state.swap_hint.dismiss();
        }
        self.notify();
    }

    pub fn assign_charm(&self, charm_id: &str) {
        {
            let mut state = self.state.borrow_mut();
            let Some(active) = state.active_slot else {
                return;
            };
            let Some(charm) = charm_by_id(charm_id) else {
                return;
            };
            if !state.registry.assign_charm(active, charm) {
                return;
            }
            state.active_slot = None;
        }
        self.notify();
    }

    pub fn clear_active_slot(&self) {
        let changed = {
            let mut state = self.state.borrow_mut();
            state.active_slot.take().is_some()
        };
        if changed {
            self.notify();
        }
    }

    pub fn select_holder(&self, holder_id: &str) {
        {
            let mut state = self.state.borrow_mut();
            let Some(holder) = holder_by_id(holder_id) else {
                return;
            };
            state.holder = Some(holder);
        }
        self.notify();
    }

    pub fn set_metal(&self, metal: Metal) {
        {
            let mut state = self.state.borrow_mut();
            if state.metal == metal {
                return;
            }
            state.metal = metal;
        }
        self.notify();
    }

    pub fn set_length(&self, length: ChainLength) {
        {
            let mut state = self.state.borrow_mut();
            if state.length == length {
                return;
            }
            state.length = length;
        }
        self.notify();
    }

    // back to the holder gallery; slots, metal and length survive
    pub fn return_to_selection(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.holder = None;
            state.clear_interaction();
        }
        self.notify();
    }

    pub fn reset_configuration(&self) {
        {
            let mut state = self.state.borrow_mut();
            *state = BuilderState::new();
        }
        self.notify();
    }

    pub fn slot_hover(&self, id: SlotId, now_ms: f32) {
        let mut state = self.state.borrow_mut();
        if state.tool != Tool::None || state.swap != SwapGesture::Inactive {
            return;
        }
        if state.registry.len() <= 1 {
            return;
        }
        let occupied = state
            .registry
            .slot(id)
            .map(|slot| slot.charm.is_some())
            .unwrap_or(false);
        if !occupied {
            return;
        }
        state.swap_hint.arm(id, now_ms);
    }

    pub fn slot_hover_leave(&self) {
        let changed = {
            let mut state = self.state.borrow_mut();
            state.swap_hint.dismiss()
        };
        if changed {
            self.notify();
        }
    }

    // hosts drive this with the same clock they pass to slot_hover
    pub fn tick(&self, now_ms: f32) {
        let fired = {
            let mut state = self.state.borrow_mut();
            state.swap_hint.fire(now_ms)
        };
        if fired {
            self.notify();
        }
    }

    pub fn apply_prefs(&self, prefs: &BuilderPrefs) {
        {
            let mut state = self.state.borrow_mut();
            state.swap_hint.set_enabled(prefs.swap_hint_enabled);
            state.swap_hint.set_delay(prefs.swap_hint_delay_ms);
        }
        self.notify();
    }

    pub fn restore(&self, snapshot: &ConfigSnapshot) {
        {
            let mut state = self.state.borrow_mut();
            state.holder = snapshot.holder_id.as_deref().and_then(holder_by_id);
            state.metal = snapshot.metal;
            state.length = snapshot.length;
            state.registry = SlotRegistry::from_records(&snapshot.slots);
            state.clear_interaction();
        }
        self.notify();
    }
}

fn preview_at(registry: &SlotRegistry, x: f32, y: f32) -> Option<PlacementPreview> {
    let dx = x - CENTER_X;
    let dy = y - CENTER_Y;
    if !is_within_placement_band(radial_distance(dx, dy)) {
        return None;
    }
    let angle = angle_from_pointer(dx, dy);
    if is_in_exclusion_zone(angle) {
        return None;
    }
    Some(PlacementPreview {
        angle,
        collides: has_collision(angle, &registry.occupied_angles(), MIN_ANGULAR_DISTANCE_DEG),
    })
}

// removal drops every reference to the slot: selection, swap, hover hint
fn remove_slot(state: &mut BuilderState, id: SlotId) {
    if !state.registry.remove_slot(id) {
        return;
    }
    if state.active_slot == Some(id) {
        state.active_slot = None;
    }
    state.swap = SwapGesture::Inactive;
    state.swap_hint.dismiss();
}

pub struct BuilderSubscription {
    subscriber: BuilderSubscriber,
    subscribers: Rc<RefCell<Vec<BuilderSubscriber>>>,
}

impl Drop for BuilderSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

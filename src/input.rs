use charmloom_core::geometry::VIEW_SIZE;
use charmloom_core::registry::SlotId;

pub const SWAP_HINT_DELAY_MS: f32 = 600.0;

#[derive(Clone, Copy, Debug)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

pub fn screen_to_canvas(screen_x: f32, screen_y: f32, rect: CanvasRect) -> Option<(f32, f32)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (screen_x - rect.left) * VIEW_SIZE / rect.width;
    let y = (screen_y - rect.top) * VIEW_SIZE / rect.height;
    Some((x, y))
}

// Debounced hover affordance. Timestamps are caller-supplied milliseconds;
// the host owns the clock. A dismissed timer never fires late.
#[derive(Clone, Copy, Debug)]
pub struct SwapHint {
    enabled: bool,
    delay_ms: f32,
    pending: Option<(SlotId, f32)>,
    visible: Option<SlotId>,
}

impl Default for SwapHint {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapHint {
    pub fn new() -> Self {
        Self::with_delay(SWAP_HINT_DELAY_MS)
    }

    pub fn with_delay(delay_ms: f32) -> Self {
        Self {
            enabled: true,
            delay_ms,
            pending: None,
            visible: None,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending = None;
            self.visible = None;
        }
    }

    pub fn set_delay(&mut self, delay_ms: f32) {
        self.delay_ms = delay_ms.max(0.0);
    }

    pub fn visible_slot(&self) -> Option<SlotId> {
        self.visible
    }

    pub fn arm(&mut self, id: SlotId, now_ms: f32) {
        if !self.enabled {
            return;
        }
        if self.visible != Some(id) {
            self.visible = None;
        }
        self.pending = Some((id, now_ms));
    }

    // returns true when the hint just became visible
    pub fn fire(&mut self, now_ms: f32) -> bool {
        let Some((id, armed_ms)) = self.pending else {
            return false;
        };
        if now_ms - armed_ms < self.delay_ms {
            return false;
        }
        self.pending = None;
        self.visible = Some(id);
        true
    }

    pub fn dismiss(&mut self) -> bool {
        let had_state = self.pending.is_some() || self.visible.is_some();
        self.pending = None;
        self.visible = None;
        had_state
    }
}

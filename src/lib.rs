pub mod builder;
pub mod input;
pub mod persist;

pub use builder::{
    BuilderCore, BuilderSnapshot, BuilderSubscription, PlacementPreview, SwapGesture, Tool,
};
pub use input::{screen_to_canvas, CanvasRect, SwapHint, SWAP_HINT_DELAY_MS};
pub use persist::{
    build_config_snapshot, clear_configuration, load_configuration, load_prefs,
    restore_configuration, save_configuration, save_prefs, Autosaver, BuilderPrefs, FileStore,
    MemoryStore, SnapshotStore, AUTOSAVE_INTERVAL_MS, PREFS_KEY, SNAPSHOT_KEY,
};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use charmloom::builder::{BuilderCore, Tool};
use charmloom::persist::{
    build_config_snapshot, clear_configuration, load_configuration, load_prefs,
    restore_configuration, save_configuration, save_prefs, Autosaver, BuilderPrefs, FileStore,
    MemoryStore, SnapshotStore, PREFS_KEY, SNAPSHOT_KEY,
};
use charmloom_core::geometry::{position_on_circle, CHAIN_RADIUS};
use charmloom_core::snapshot::{encode_snapshot, ChainLength, ConfigSnapshot, Metal, SlotRecord};

fn build_core_with_config() -> std::rc::Rc<BuilderCore> {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = BuilderCore::new();
    core.select_holder("rope-chain");
    core.set_metal(Metal::GoldVermeil);
    core.set_length(ChainLength::In20);
    for (angle, charm) in [(100.0, Some("c5")), (150.0, None)] {
        core.select_tool(Tool::Add);
        let (x, y) = position_on_circle(angle, CHAIN_RADIUS);
        core.pointer_move(x, y);
        core.canvas_click();
        if let Some(charm_id) = charm {
            core.assign_charm(charm_id);
        }
    }
    core
}

#[test]
fn configuration_round_trips_through_a_store() {
    let source = build_core_with_config();
    let mut store = MemoryStore::new();
    let config = build_config_snapshot(&source.snapshot());
    save_configuration(&mut store, &config).unwrap();

    let restored = BuilderCore::new();
    assert!(restore_configuration(&restored, &store));
    let snapshot = restored.snapshot();
    assert_eq!(snapshot.holder.unwrap().id, "rope-chain");
    assert_eq!(snapshot.metal, Metal::GoldVermeil);
    assert_eq!(snapshot.length, ChainLength::In20);
    assert_eq!(snapshot.slots.len(), 2);
    assert_eq!(snapshot.slots[0].charm.unwrap().id, "c5");
    assert!(snapshot.slots[1].charm.is_none());
    // interaction state comes back as defaults
    assert_eq!(snapshot.tool, Tool::None);
    assert_eq!(snapshot.active_slot, None);
}

#[test]
fn missing_or_empty_storage_degrades_to_default() {
    let store = MemoryStore::new();
    assert!(load_configuration(&store).is_none());

    let core = BuilderCore::new();
    assert!(!restore_configuration(&core, &store));
    assert!(core.snapshot().holder.is_none());
    assert!(core.snapshot().slots.is_empty());
}

#[test]
fn corrupt_payloads_are_discarded() {
    let mut store = MemoryStore::new();
    store.save(SNAPSHOT_KEY, "not-base64!!!").unwrap();
    assert!(load_configuration(&store).is_none());

    store.save(SNAPSHOT_KEY, &STANDARD.encode(b"garbage bytes")).unwrap();
    assert!(load_configuration(&store).is_none());
}

#[test]
fn version_mismatch_is_discarded() {
    let stale = ConfigSnapshot {
        version: 999,
        ..ConfigSnapshot::default()
    };
    let raw = STANDARD.encode(encode_snapshot(&stale).unwrap());
    let mut store = MemoryStore::new();
    store.save(SNAPSHOT_KEY, &raw).unwrap();
    assert!(load_configuration(&store).is_none());
}

#[test]
fn invalid_records_fail_validation_on_load() {
    let bad = ConfigSnapshot {
        slots: vec![SlotRecord {
            id: 1,
            angle: f32::NAN,
            charm_id: None,
        }],
        ..ConfigSnapshot::default()
    };
    let raw = STANDARD.encode(encode_snapshot(&bad).unwrap());
    let mut store = MemoryStore::new();
    store.save(SNAPSHOT_KEY, &raw).unwrap();
    assert!(load_configuration(&store).is_none());
}

#[test]
fn clear_configuration_removes_the_saved_blob() {
    let source = build_core_with_config();
    let mut store = MemoryStore::new();
    save_configuration(&mut store, &build_config_snapshot(&source.snapshot())).unwrap();
    assert!(load_configuration(&store).is_some());

    clear_configuration(&mut store).unwrap();
    assert!(load_configuration(&store).is_none());
}

#[test]
fn autosaver_respects_the_interval() {
    let core = build_core_with_config();
    let mut store = MemoryStore::new();
    let mut autosaver = Autosaver::with_interval(5000.0);

    assert!(autosaver.tick(&core.snapshot(), &mut store, 0.0));
    core.set_metal(Metal::SterlingSilver);
    // changed, but inside the interval
    assert!(!autosaver.tick(&core.snapshot(), &mut store, 3000.0));
    assert!(autosaver.tick(&core.snapshot(), &mut store, 5000.0));
}

#[test]
fn autosaver_skips_unchanged_configurations() {
    let core = build_core_with_config();
    let mut store = MemoryStore::new();
    let mut autosaver = Autosaver::with_interval(5000.0);

    assert!(autosaver.tick(&core.snapshot(), &mut store, 0.0));
    assert!(!autosaver.tick(&core.snapshot(), &mut store, 6000.0));

    // interaction-only changes do not dirty the stable configuration
    core.select_tool(Tool::Add);
    assert!(!autosaver.tick(&core.snapshot(), &mut store, 12000.0));

    core.set_length(ChainLength::In16);
    assert!(autosaver.tick(&core.snapshot(), &mut store, 18000.0));
}

#[test]
fn prefs_round_trip_and_default_on_garbage() {
    let mut store = MemoryStore::new();
    assert_eq!(load_prefs(&store), BuilderPrefs::default());

    let prefs = BuilderPrefs {
        swap_hint_enabled: false,
        swap_hint_delay_ms: 250.0,
    };
    save_prefs(&mut store, &prefs).unwrap();
    assert_eq!(load_prefs(&store), prefs);

    store.save(PREFS_KEY, "{ not json").unwrap();
    assert_eq!(load_prefs(&store), BuilderPrefs::default());
}

#[test]
fn file_store_round_trips_on_disk() {
    let dir = std::env::temp_dir().join(format!("charmloom-test-{}", std::process::id()));
    let mut store = FileStore::new(&dir);

    let source = build_core_with_config();
    save_configuration(&mut store, &build_config_snapshot(&source.snapshot())).unwrap();
    let loaded = load_configuration(&store).expect("file store should round trip");
    assert_eq!(loaded.holder_id.as_deref(), Some("rope-chain"));
    assert_eq!(loaded.slots.len(), 2);

    clear_configuration(&mut store).unwrap();
    assert!(load_configuration(&store).is_none());
    let _ = std::fs::remove_dir_all(&dir);
}

pub mod catalog;
pub mod collision;
pub mod geometry;
pub mod registry;
pub mod snapshot;

pub use catalog::{
    category_by_id, charm_by_id, charm_by_sku, charms_in_category, holder_by_id, CategoryEntry,
    CharmEntry, HolderEntry, CATEGORIES, CHARM_CATALOG, HOLDER_CATALOG,
};
pub use collision::{
    can_place, has_collision, is_in_exclusion_zone, is_within_placement_band,
    EXCLUDE_END_DEG, EXCLUDE_START_DEG, MIN_ANGULAR_DISTANCE_DEG,
};
pub use geometry::{
    angle_from_pointer, angular_distance, chain_point, normalize_angle, placement_point,
    position_on_circle, radial_distance, CENTER_X, CENTER_Y, CHAIN_RADIUS, PLACEMENT_RADIUS,
    VIEW_SIZE,
};
pub use registry::{Slot, SlotId, SlotRegistry};
pub use snapshot::{
    decode_snapshot, encode_snapshot, validate_snapshot, ChainLength, ConfigSnapshot, Metal,
    SlotRecord, CONFIG_SNAPSHOT_VERSION,
};

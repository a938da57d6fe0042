use crate::geometry::{angular_distance, normalize_angle, CHAIN_RADIUS, PLACEMENT_RADIUS};

pub const MIN_ANGULAR_DISTANCE_DEG: f32 = 20.0;

// clasp arc, exclusive on both ends: exactly 250 or 290 is legal
pub const EXCLUDE_START_DEG: f32 = 250.0;
pub const EXCLUDE_END_DEG: f32 = 290.0;

pub const BAND_INNER_MARGIN: f32 = 60.0;
pub const BAND_OUTER_MARGIN: f32 = 50.0;

pub fn is_in_exclusion_zone(angle_deg: f32) -> bool {
    let angle = normalize_angle(angle_deg);
    angle > EXCLUDE_START_DEG && angle < EXCLUDE_END_DEG
}

pub fn is_within_placement_band(radial_dist: f32) -> bool {
    radial_dist > CHAIN_RADIUS - BAND_INNER_MARGIN && radial_dist < PLACEMENT_RADIUS + BAND_OUTER_MARGIN
}

// exactly min_separation_deg apart is not a collision
pub fn has_collision(angle_deg: f32, existing: &[f32], min_separation_deg: f32) -> bool {
    existing
        .iter()
        .any(|other| angular_distance(*other, angle_deg) < min_separation_deg)
}

pub fn can_place(angle_deg: f32, existing: &[f32]) -> bool {
    !is_in_exclusion_zone(angle_deg) && !has_collision(angle_deg, existing, MIN_ANGULAR_DISTANCE_DEG)
}

pub const VIEW_SIZE: f32 = 500.0;
pub const CENTER_X: f32 = 250.0;
pub const CENTER_Y: f32 = 250.0;

pub const CHAIN_RADIUS: f32 = 160.0;
pub const PLACEMENT_RADIUS: f32 = 192.0;

pub fn normalize_angle(mut angle: f32) -> f32 {
    angle = angle % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

// shortest circular distance, in [0, 180]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = normalize_angle(a - b);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

pub fn position_on_circle(angle_deg: f32, radius: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (CENTER_X + radius * rad.cos(), CENTER_Y + radius * rad.sin())
}

pub fn placement_point(angle_deg: f32) -> (f32, f32) {
    position_on_circle(angle_deg, PLACEMENT_RADIUS)
}

pub fn chain_point(angle_deg: f32) -> (f32, f32) {
    position_on_circle(angle_deg, CHAIN_RADIUS)
}

// screen space: y grows downward, so "up" is 270
pub fn angle_from_pointer(dx: f32, dy: f32) -> f32 {
    let mut angle = dy.atan2(dx).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

pub fn radial_distance(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

use glam::Vec2;

#[inline]
/// Half-size of the z = 0 plane visible from a perspective camera on the
/// +Z axis looking at the origin.
///
/// - `fov_y_deg`: vertical field of view in degrees
/// - `distance`: camera distance from the plane
/// - `aspect`: viewport width / height
pub fn visible_half_extent(fov_y_deg: f32, distance: f32, aspect: f32) -> Vec2 {
    let half_h = distance * (fov_y_deg.to_radians() * 0.5).tan();
    Vec2::new(half_h * aspect, half_h)
}

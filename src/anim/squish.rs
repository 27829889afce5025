//! Contact deformation for the bouncing object.

use glam::{Vec3, vec3};

/// Computes a non-uniform scale that squashes an object as it approaches a
/// ground plane along one axis: the axis of approach compresses while the
/// other two axes expand, both proportionally to how deep the object's
/// radius overlaps the plane. Away from the plane the scale is identity.
///
/// There is no clamp on `proximity`; a caller whose bounds let the object
/// sink far enough can drive the compressed axis negative.
pub fn squish_scale(
    object_axis_pos: f32,
    radius: f32,
    plane_pos: f32,
    compress: f32,
    expand: f32,
) -> Vec3 {
    if object_axis_pos <= plane_pos + radius {
        let proximity = (object_axis_pos - radius - plane_pos).abs();
        vec3(
            1.0 + expand * proximity,
            1.0 - compress * proximity,
            1.0 + expand * proximity,
        )
    } else {
        Vec3::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_near(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).abs().max_element() < 1e-6,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_identity_away_from_plane() {
        assert_eq!(squish_scale(0.5, 0.15, -0.6, 0.75, 0.75), Vec3::ONE);
    }

    #[test]
    fn test_zero_proximity_at_touch_point() {
        // Resting exactly radius-deep on the plane: proximity is zero.
        assert_vec3_near(squish_scale(-0.45, 0.15, -0.6, 0.75, 0.75), Vec3::ONE);
    }

    #[test]
    fn test_object_centered_on_plane() {
        // Center level with the plane: the radius is fully submerged.
        assert_vec3_near(
            squish_scale(-0.6, 0.15, -0.6, 0.75, 0.75),
            vec3(1.1125, 0.8875, 1.1125),
        );
    }

    #[test]
    fn test_compresses_and_expands_with_depth() {
        let scale = squish_scale(-0.7, 0.15, -0.6, 0.75, 0.75);
        assert_vec3_near(scale, vec3(1.1875, 0.8125, 1.1875));
    }
}

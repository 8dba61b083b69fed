use super::Quaternion;

/// Quaternion from yaw (around Y), pitch (around X) and roll (around Z), in radians.
pub fn quaternion_from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Quaternion {
    let (sin_roll, cos_roll) = (roll * 0.5).sin_cos();
    let (sin_pitch, cos_pitch) = (pitch * 0.5).sin_cos();
    let (sin_yaw, cos_yaw) = (yaw * 0.5).sin_cos();

    Quaternion::from_xyzw(
        cos_yaw * sin_pitch * cos_roll + sin_yaw * cos_pitch * sin_roll,
        sin_yaw * cos_pitch * cos_roll - cos_yaw * sin_pitch * sin_roll,
        cos_yaw * cos_pitch * sin_roll - sin_yaw * sin_pitch * cos_roll,
        cos_yaw * cos_pitch * cos_roll + sin_yaw * sin_pitch * sin_roll,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_zero_angles_give_identity() {
        assert_eq!(quaternion_from_yaw_pitch_roll(0.0, 0.0, 0.0), Quaternion::IDENTITY);
    }

    #[test]
    fn test_single_axis_angles_match_glam() {
        let angle = 0.8;
        assert!(quaternion_from_yaw_pitch_roll(angle, 0.0, 0.0)
            .abs_diff_eq(Quaternion::from_rotation_y(angle), EPSILON));
        assert!(quaternion_from_yaw_pitch_roll(0.0, angle, 0.0)
            .abs_diff_eq(Quaternion::from_rotation_x(angle), EPSILON));
        assert!(quaternion_from_yaw_pitch_roll(0.0, 0.0, angle)
            .abs_diff_eq(Quaternion::from_rotation_z(angle), EPSILON));
    }

    #[test]
    fn test_result_is_unit_length() {
        let q = quaternion_from_yaw_pitch_roll(0.3, -1.2, 2.5);
        assert!((q.length() - 1.0).abs() < 1e-5);
    }
}

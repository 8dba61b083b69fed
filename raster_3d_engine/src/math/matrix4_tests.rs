use super::*;
use crate::math::Vector3;

const EPSILON: f32 = 1e-5;

fn assert_matrix_near(actual: &Matrix4, expected: &Matrix4) {
    for row in 0..4 {
        for col in 0..4 {
            let (a, e) = (actual.get(row, col), expected.get(row, col));
            assert!(
                (a - e).abs() < EPSILON,
                "M[{}][{}] = {}, expected {}", row, col, a, e
            );
        }
    }
}

// ============================================================================
// Layout and accessors
// ============================================================================

#[test]
fn test_identity_has_unit_diagonal() {
    let m = Matrix4::IDENTITY;
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(m.get(row, col), if row == col { 1.0 } else { 0.0 });
        }
    }
    assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
    assert_eq!(Matrix4::from_diagonal(1.0), Matrix4::IDENTITY);
}

#[test]
fn test_from_rows_is_row_major() {
    let m = Matrix4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ]);

    assert_eq!(m.get(0, 1), 2.0);
    assert_eq!(m.get(2, 3), 12.0);
    assert_eq!(m.row(3), Vector4::new(13.0, 14.0, 15.0, 16.0));
    assert_eq!(m.to_rows()[1], [5.0, 6.0, 7.0, 8.0]);
    assert_eq!(m.transpose().get(3, 2), 12.0);
}

#[test]
fn test_set_writes_single_element() {
    let mut m = Matrix4::IDENTITY;
    m.set(3, 0, 7.5);
    assert_eq!(m.get(3, 0), 7.5);
    assert_eq!(m.get(0, 3), 0.0);
}

// ============================================================================
// Row-vector convention
// ============================================================================

#[test]
fn test_transform_is_row_vector_times_matrix() {
    let m = Matrix4::from_rows([
        [1.0, 2.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    // x' = x*M11 + y*M21 ..., y' = x*M12 + y*M22 ...
    let v = m.transform(Vector4::new(1.0, 1.0, 0.0, 1.0));
    assert_eq!(v, Vector4::new(1.0, 3.0, 0.0, 1.0));
}

#[test]
fn test_translation_lives_in_fourth_row() {
    let m = Matrix4::create_translation(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(m.get(3, 0), 1.0);
    assert_eq!(m.get(3, 1), 2.0);
    assert_eq!(m.get(3, 2), 3.0);

    let v = m.transform(Vector4::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 1.0));
}

#[test]
fn test_multiply_applies_left_operand_first() {
    let scale = Matrix4::create_scale(Vector3::splat(2.0));
    let translate = Matrix4::create_translation(Vector3::new(1.0, 0.0, 0.0));
    let p = Vector4::new(1.0, 0.0, 0.0, 1.0);

    // scale then translate: (1*2)+1 = 3
    assert_eq!((scale * translate).transform(p).x, 3.0);
    // translate then scale: (1+1)*2 = 4
    assert_eq!(translate.multiply(&scale).transform(p).x, 4.0);
}

#[test]
fn test_add_is_componentwise() {
    let sum = Matrix4::IDENTITY + Matrix4::IDENTITY;
    assert_eq!(sum, Matrix4::from_diagonal(2.0));
}

// ============================================================================
// Rotations
// ============================================================================

#[test]
fn test_rotation_x_layout() {
    let angle = 0.3_f32;
    let m = Matrix4::create_rotation_x(angle);
    assert!((m.get(1, 1) - angle.cos()).abs() < EPSILON);
    assert!((m.get(1, 2) - angle.sin()).abs() < EPSILON);
    assert!((m.get(2, 1) + angle.sin()).abs() < EPSILON);
    assert!((m.get(2, 2) - angle.cos()).abs() < EPSILON);
}

#[test]
fn test_rotation_y_layout() {
    let angle = 0.7_f32;
    let m = Matrix4::create_rotation_y(angle);
    assert!((m.get(0, 2) + angle.sin()).abs() < EPSILON);
    assert!((m.get(2, 0) - angle.sin()).abs() < EPSILON);
}

#[test]
fn test_rotation_z_layout() {
    let angle = 1.1_f32;
    let m = Matrix4::create_rotation_z(angle);
    assert!((m.get(0, 1) - angle.sin()).abs() < EPSILON);
    assert!((m.get(1, 0) + angle.sin()).abs() < EPSILON);
}

#[test]
fn test_axis_angle_matches_axis_rotations() {
    let angle = 0.9;
    assert_matrix_near(
        &Matrix4::create_from_axis_angle(Vector3::X, angle),
        &Matrix4::create_rotation_x(angle),
    );
    assert_matrix_near(
        &Matrix4::create_from_axis_angle(Vector3::Z, angle),
        &Matrix4::create_rotation_z(angle),
    );
}

#[test]
fn test_yaw_pitch_roll_pure_yaw_is_rotation_y() {
    let yaw = 0.4;
    assert_matrix_near(
        &Matrix4::create_from_yaw_pitch_roll(yaw, 0.0, 0.0),
        &Matrix4::create_rotation_y(yaw),
    );
}

// ============================================================================
// View / projection
// ============================================================================

#[test]
fn test_perspective_writes_negative_z_into_w() {
    let (near, far) = (0.1_f32, 100.0_f32);
    let fov = std::f32::consts::FRAC_PI_2;
    let m = Matrix4::create_perspective_field_of_view(fov, 4.0 / 3.0, near, far);

    assert_eq!(m.get(2, 3), -1.0);
    assert_eq!(m.get(3, 3), 0.0);
    assert!((m.get(2, 2) - far / (near - far)).abs() < EPSILON);
    assert!((m.get(3, 2) - near * far / (near - far)).abs() < 1e-4);

    let y_scale = 1.0 / (fov * 0.5).tan();
    assert!((m.get(1, 1) - y_scale).abs() < EPSILON);
    assert!((m.get(0, 0) - y_scale * 3.0 / 4.0).abs() < EPSILON);

    let clip = m.transform(Vector4::new(0.0, 0.0, -5.0, 1.0));
    assert!((clip.w - 5.0).abs() < EPSILON);
}

#[test]
fn test_look_at_basis() {
    let eye = Vector3::new(0.0, 0.0, 5.0);
    let m = Matrix4::create_look_at(eye, Vector3::ZERO, Vector3::Y);

    // z = normalize(eye - target) = +Z, x = up × z = +X, y = z × x = +Y
    assert_matrix_near(&m, &Matrix4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, -5.0, 1.0],
    ]));

    // The target ends up straight ahead on -Z
    let target = m.transform(Vector4::new(0.0, 0.0, 0.0, 1.0));
    assert!((target.z + 5.0).abs() < EPSILON);
}

#[test]
fn test_try_look_at_rejects_degenerate_basis() {
    let eye = Vector3::new(1.0, 2.0, 3.0);
    assert!(Matrix4::try_create_look_at(eye, eye, Vector3::Y).is_none());
    assert!(Matrix4::try_create_look_at(Vector3::Y, Vector3::ZERO, Vector3::Y).is_none());
    assert!(Matrix4::try_create_look_at(eye, Vector3::ZERO, Vector3::Y).is_some());
}

#[test]
fn test_orthographic_layout() {
    let (near, far) = (0.5_f32, 10.0_f32);
    let m = Matrix4::create_orthographic(4.0, 2.0, near, far);

    assert!((m.get(0, 0) - 0.5).abs() < EPSILON);
    assert!((m.get(1, 1) - 1.0).abs() < EPSILON);
    assert!((m.get(2, 2) - 1.0 / (near - far)).abs() < EPSILON);
    assert!((m.get(3, 2) - near / (near - far)).abs() < EPSILON);
    assert_eq!(m.get(3, 0), 0.0);
    assert_eq!(m.get(2, 3), 0.0);
    assert_eq!(m.get(3, 3), 1.0);
}

//! Unit tests for Texture
//!
//! Covers the bounds contract of the pixel accessors and the byte layout.

use super::*;

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_new_texture_is_zeroed() {
    let texture = Texture::new(3, 2);
    assert_eq!(texture.width(), 3);
    assert_eq!(texture.height(), 2);
    assert_eq!(texture.pixel_count(), 6);
    assert_eq!(texture.pixels().len(), 3 * 2 * 4);
    assert!(texture.pixels().iter().all(|&b| b == 0));
}

#[test]
fn test_byte_len() {
    assert_eq!(byte_len(3, 2), Some(24));
    assert_eq!(byte_len(0, 5), Some(0));
    assert_eq!(byte_len(u32::MAX, u32::MAX), None);
}

#[test]
#[should_panic]
fn test_new_panics_on_unaddressable_size() {
    let _ = Texture::new(u32::MAX, u32::MAX);
}

#[test]
fn test_from_bytes_copies_matching_data() {
    let data: Vec<u8> = (0..16).collect();
    let texture = Texture::from_bytes(2, 2, &data);
    assert_eq!(texture.pixels(), data.as_slice());
    assert_eq!(texture.get(1, 0), Color::new(4, 5, 6, 7));
}

#[test]
fn test_from_bytes_size_mismatch_keeps_zeroed_texture() {
    // width * height bytes is one byte per pixel: not an RGBA8 source
    let data = vec![255u8; 4];
    let texture = Texture::from_bytes(2, 2, &data);
    assert_eq!(texture.pixels().len(), 16);
    assert!(texture.pixels().iter().all(|&b| b == 0));
}

#[test]
fn test_zero_sized_texture_is_empty() {
    let texture = Texture::new(0, 5);
    assert!(texture.pixels().is_empty());
    assert_eq!(texture.get(0, 0), Color::TRANSPARENT);
}

// ============================================================================
// 2D ACCESSORS
// ============================================================================

#[test]
fn test_set_then_get_round_trips_at_byte_offset() {
    let mut texture = Texture::new(4, 3);
    let color = Color::new(10, 20, 30, 40);
    texture.set(2, 1, color);

    assert_eq!(texture.get(2, 1), color);
    let offset = (2 + 1 * 4) * 4;
    assert_eq!(&texture.pixels()[offset..offset + 4], &[10, 20, 30, 40]);
}

#[test]
fn test_get_out_of_range_is_transparent_black() {
    let mut texture = Texture::new(4, 3);
    texture.fill(Color::WHITE);

    assert_eq!(texture.get(4, 0), Color::TRANSPARENT);
    assert_eq!(texture.get(0, 3), Color::TRANSPARENT);
    assert_eq!(texture.get(u32::MAX, u32::MAX), Color::TRANSPARENT);
}

#[test]
fn test_set_out_of_range_leaves_buffer_unchanged() {
    let mut texture = Texture::new(4, 3);
    let before = texture.pixels().to_vec();

    texture.set(4, 0, Color::RED);
    texture.set(0, 3, Color::RED);
    texture.set(u32::MAX, 1, Color::RED);

    assert_eq!(texture.pixels(), before.as_slice());
}

// ============================================================================
// LINEAR ACCESSORS / FILL
// ============================================================================

#[test]
fn test_linear_index_matches_2d_layout() {
    let mut texture = Texture::new(5, 5);
    texture.set_index(7, Color::GREEN);
    assert_eq!(texture.get(2, 1), Color::GREEN);
    assert_eq!(texture.get_index(7), Color::GREEN);
}

#[test]
#[should_panic]
fn test_linear_index_out_of_range_panics() {
    let texture = Texture::new(2, 2);
    texture.get_index(4);
}

#[test]
fn test_fill_sets_every_pixel() {
    let mut texture = Texture::new(7, 3);
    let color = Color::new(1, 2, 3, 4);
    texture.fill(color);
    for i in 0..texture.pixel_count() {
        assert_eq!(texture.get_index(i), color);
    }
}

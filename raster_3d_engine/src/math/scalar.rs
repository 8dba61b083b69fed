//! Scalar helpers used by the rasterizer and by shader uniforms.

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics when `min > max` (`max` wins),
/// and a NaN `value` becomes `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation from `min` to `max`, `gradient` clamped to `[0, 1]`
pub fn interpolate(min: f32, max: f32, gradient: f32) -> f32 {
    min + (max - min) * clamp(gradient, 0.0, 1.0)
}

/// Wrap `value` into `[min, max)`, working for negative inputs too.
///
/// An empty range (`max == min`) returns `min`.
pub fn wrap(value: f32, max: f32, min: f32) -> f32 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }
    let wrapped = (value - min) % range;
    if wrapped < 0.0 {
        wrapped + range + min
    } else {
        wrapped + min
    }
}

/// Bounce `t` back and forth between `0` and `length`
pub fn ping_pong(t: f32, length: f32) -> f32 {
    let period = 2.0 * length;
    let t = t % period;
    if (0.0..length).contains(&t) {
        t
    } else {
        period - t
    }
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;

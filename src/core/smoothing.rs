//! Frame-rate independent exponential smoothing.
//!
//! A value approaching a target with `rate` covers the same fraction of the
//! remaining gap per second no matter how the second is sliced into frames.

use bevy::color::Mix;
use bevy::prelude::*;

/// Fraction of the remaining distance to cover this frame.
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    if rate <= 0.0 || dt <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate * dt).exp()
}

/// Move a linear colour toward `target`.
pub fn blend_linear(current: LinearRgba, target: LinearRgba, rate: f32, dt: f32) -> LinearRgba {
    current.mix(&target, smoothing_factor(rate, dt))
}

/// Move a colour toward `target`, blending in linear space.
pub fn blend_color(current: Color, target: Color, rate: f32, dt: f32) -> Color {
    Color::from(blend_linear(current.to_linear(), target.to_linear(), rate, dt))
}

/// Turn `transform` about Y toward a horizontal `direction`.
///
/// The body's forward is -Z; a zero direction leaves the rotation alone.
pub fn turn_toward(transform: &mut Transform, direction: Vec3, rate: f32, dt: f32) {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() < 1e-6 {
        return;
    }
    let target = Transform::IDENTITY.looking_to(flat, Vec3::Y).rotation;
    transform.rotation = transform.rotation.slerp(target, smoothing_factor(rate, dt));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_is_zero_without_time_or_rate() {
        assert_eq!(smoothing_factor(4.0, 0.0), 0.0);
        assert_eq!(smoothing_factor(0.0, 0.5), 0.0);
    }

    #[test]
    fn factor_stays_below_one() {
        let t = smoothing_factor(1000.0, 1.0);
        assert!(t > 0.99 && t <= 1.0);
    }

    #[test]
    fn blending_does_not_depend_on_frame_slicing() {
        let start = LinearRgba::rgb(0.0, 1.0, 0.0);
        let target = LinearRgba::rgb(1.0, 0.0, 0.0);

        let one_step = blend_linear(start, target, 2.0, 0.5);
        let mut sliced = start;
        for _ in 0..5 {
            sliced = blend_linear(sliced, target, 2.0, 0.1);
        }

        assert!((one_step.red - sliced.red).abs() < 1e-4);
        assert!((one_step.green - sliced.green).abs() < 1e-4);
    }

    #[test]
    fn blending_approaches_without_overshoot() {
        let mut color = LinearRgba::rgb(0.0, 1.0, 0.0);
        let target = LinearRgba::rgb(1.0, 0.0, 0.0);
        let mut previous = color.red;
        for _ in 0..50 {
            color = blend_linear(color, target, 1.0, 0.1);
            assert!(color.red >= previous);
            assert!(color.red <= 1.0);
            previous = color.red;
        }
        assert!(color.red > 0.99);
    }

    #[test]
    fn turn_toward_ignores_zero_direction() {
        let mut transform = Transform::from_rotation(Quat::from_rotation_y(0.7));
        let before = transform.rotation;
        turn_toward(&mut transform, Vec3::Y * 3.0, 10.0, 0.1);
        assert_eq!(transform.rotation, before);
    }
}

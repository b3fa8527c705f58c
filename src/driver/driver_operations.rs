//! Driver Operations - Pure DOP Functions

use super::driver_data::PingPongDriverData;
use crate::interpolation::lerp_scalar;

pub fn create_ping_pong_driver(speed: f32, min: f32, max: f32) -> PingPongDriverData {
    PingPongDriverData { speed, min, max }
}

/// Bounce `t` linearly between 0 and `length`
///
/// Rises from 0 to `length` over the first `length` units, then falls back.
/// A non-positive length yields 0.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if !(length > 0.0) {
        return 0.0;
    }
    let period = length * 2.0;
    let wrapped = (t - (t / period).floor() * period).clamp(0.0, period);
    length - (wrapped - length).abs()
}

/// Control value for a driver `elapsed` seconds after it started
pub fn sample_ping_pong(driver: &PingPongDriverData, elapsed: f32) -> f32 {
    lerp_scalar(driver.min, driver.max, ping_pong(elapsed * driver.speed, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_pong_shape() {
        assert_eq!(ping_pong(0.0, 1.0), 0.0);
        assert_eq!(ping_pong(0.25, 1.0), 0.25);
        assert_eq!(ping_pong(1.0, 1.0), 1.0);
        assert_eq!(ping_pong(1.5, 1.0), 0.5);
        assert_eq!(ping_pong(2.0, 1.0), 0.0);
        assert_eq!(ping_pong(3.0, 2.0), 1.0);
        assert_eq!(ping_pong(-0.5, 1.0), 0.5);
        assert_eq!(ping_pong(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_sample_stays_in_range() {
        let driver = create_ping_pong_driver(0.5, 0.2, 0.8);
        assert_eq!(sample_ping_pong(&driver, 0.0), 0.2);
        assert_eq!(sample_ping_pong(&driver, 2.0), 0.8);
        for i in 0..200 {
            let value = sample_ping_pong(&driver, i as f32 * 0.037);
            assert!((0.2 - 1e-6..=0.8 + 1e-6).contains(&value), "value {} out of range", value);
        }
    }

    #[test]
    fn test_default_driver() {
        let driver = PingPongDriverData::default();
        assert_eq!(sample_ping_pong(&driver, 0.5), 0.5);
        assert_eq!(sample_ping_pong(&driver, 1.0), 1.0);
    }
}

pub mod time_utils;

pub use time_utils::{Clock, FixedClock, SystemClock};

/// Rounds `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

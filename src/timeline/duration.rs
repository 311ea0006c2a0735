//! Frame count to wall-clock duration conversion.

use crate::constants::frame_rate;
use crate::error::{Error, Result};
use std::fmt;

/// Timeline frame rate in frames per second.
///
/// Always finite and within [`frame_rate::MIN`]..=[`frame_rate::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FrameRate(f64);

impl FrameRate {
    /// Create a frame rate, rejecting non-finite or out-of-range values.
    pub fn new(fps: f64) -> Result<Self> {
        if fps.is_finite() && (frame_rate::MIN..=frame_rate::MAX).contains(&fps) {
            Ok(Self(fps))
        } else {
            Err(Error::InvalidFrameRate {
                value: fps,
                min: frame_rate::MIN,
                max: frame_rate::MAX,
            })
        }
    }

    /// Frames per second.
    pub fn fps(self) -> f64 {
        self.0
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_FRAME_RATE)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a frame count to whole seconds.
///
/// Halves round to even (`12.5s -> 12`, `13.5s -> 14`).
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn frames_to_seconds(frames: u64, rate: FrameRate) -> u64 {
    (frames as f64 / rate.fps()).round_ties_even() as u64
}

/// Format whole seconds as `HH:MM:SS`.
///
/// Hours are zero-padded to two digits and grow past 99 as needed.
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

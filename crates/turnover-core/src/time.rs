//! Time representation for timeline interchange.
//!
//! Frame positions and durations stay integral; rates are rational numbers
//! rounded to millifps precision, so no floating point touches the value path.

use num_rational::Rational64;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};

/// Frame rate as a rational number (e.g., 24000/1001 for 23.976 fps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    /// Numerator (e.g., 24000)
    pub numerator: u32,
    /// Denominator (e.g., 1001)
    pub denominator: u32,
}

impl FrameRate {
    /// Create a new frame rate.
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Convert to frames per second as f64.
    #[inline]
    pub fn to_fps_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Normalize to the rate used on interchange clips: fps rounded to three
    /// decimal places, collapsed to a whole number when the fraction is zero.
    pub fn normalized(self) -> Rate {
        Rate::from_fps(self.to_fps_f64())
    }

    /// Common frame rates
    pub const FPS_23_976: Self = Self::new(24000, 1001);
    pub const FPS_24: Self = Self::new(24, 1);
    pub const FPS_25: Self = Self::new(25, 1);
    pub const FPS_29_97: Self = Self::new(30000, 1001);
    pub const FPS_30: Self = Self::new(30, 1);
    pub const FPS_50: Self = Self::new(50, 1);
    pub const FPS_59_94: Self = Self::new(60000, 1001);
    pub const FPS_60: Self = Self::new(60, 1);
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_24
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.normalized())
    }
}

/// A normalized playback rate: fps rounded to three decimal places, held as
/// an exact rational with a denominator dividing 1000.
///
/// Whole rates serialize as JSON integers (`24`), fractional rates as floats
/// (`23.976`). Interchange consumers distinguish the two, so a numerically
/// whole rate must not leak a trailing `.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rate {
    fps: Rational64,
}

impl Rate {
    /// Build a rate from fps, rounding to three decimal places.
    pub fn from_fps(fps: f64) -> Self {
        Self {
            fps: Rational64::new((fps * 1000.0).round() as i64, 1000),
        }
    }

    /// Build a whole rate directly.
    #[inline]
    pub const fn whole(fps: i64) -> Self {
        Self {
            fps: Rational64::new_raw(fps, 1),
        }
    }

    /// True when the rounded fps has no fractional part.
    #[inline]
    pub fn is_whole(self) -> bool {
        *self.fps.denom() == 1
    }

    /// Rate as f64 (exact for whole rates, rounded-to-millifps otherwise).
    #[inline]
    pub fn to_f64(self) -> f64 {
        *self.fps.numer() as f64 / *self.fps.denom() as f64
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.fps.numer())
        } else {
            write!(f, "{}", self.to_f64())
        }
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(*self.fps.numer())
        } else {
            serializer.serialize_f64(self.to_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Rate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fps = f64::deserialize(deserializer)?;
        Ok(Self::from_fps(fps))
    }
}

/// A time value expressed as an integral frame count at a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RationalTime {
    /// Frame count
    pub value: i64,
    /// Frames per second
    pub rate: Rate,
}

impl RationalTime {
    /// Create a new time from a frame count and a rate.
    #[inline]
    pub const fn new(value: i64, rate: Rate) -> Self {
        Self { value, rate }
    }

    /// Zero frames at the given rate.
    #[inline]
    pub const fn zero(rate: Rate) -> Self {
        Self { value: 0, rate }
    }

    /// Convert to seconds as f64.
    #[inline]
    pub fn to_seconds_f64(self) -> f64 {
        self.value as f64 / self.rate.to_f64()
    }

    /// Check if this time is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.value == 0
    }
}

impl Add for RationalTime {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.rate, rhs.rate);
        Self {
            value: self.value + rhs.value,
            rate: self.rate,
        }
    }
}

impl Sub for RationalTime {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        debug_assert_eq!(self.rate, rhs.rate);
        Self {
            value: self.value - rhs.value,
            rate: self.rate,
        }
    }
}

impl fmt::Display for RationalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.rate)
    }
}

/// A time range with inclusive start and exclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start time (inclusive)
    pub start: RationalTime,
    /// Duration of the range
    pub duration: RationalTime,
}

impl TimeRange {
    /// Create a new time range from start and duration.
    #[inline]
    pub const fn new(start: RationalTime, duration: RationalTime) -> Self {
        Self { start, duration }
    }

    /// Create a range from integral frames at a rate.
    #[inline]
    pub const fn from_frames(start: i64, duration: i64, rate: Rate) -> Self {
        Self {
            start: RationalTime::new(start, rate),
            duration: RationalTime::new(duration, rate),
        }
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(self) -> RationalTime {
        self.start + self.duration
    }
}

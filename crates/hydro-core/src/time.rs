//! Record timestamps.
//!
//! A `Dmy` is the calendar stamp attached to one output record.  It is
//! produced by the driver's model clock and written verbatim: no calendar
//! validation, rounding, or timezone handling happens here.  A month of 13
//! is serialized as 13.

use std::fmt;

/// Seconds in one model day.  Reporting intervals shorter than this carry a
/// sub-day seconds field in the record header.
pub const SEC_PER_DAY: f64 = 86_400.0;

/// Calendar timestamp of one output record.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dmy {
    pub year:        u16,
    /// 1–12 by convention; not checked.
    pub month:       u8,
    /// 1–31 by convention; not checked.
    pub day:         u8,
    /// Seconds since midnight, `[0, 86400)` by convention.
    pub day_seconds: u32,
}

impl Dmy {
    pub fn new(year: u16, month: u8, day: u8, day_seconds: u32) -> Self {
        Self { year, month, day, day_seconds }
    }

    /// Midnight of the given day.
    pub fn date(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0)
    }
}

/// `true` when a reporting interval of `dt` seconds is shorter than a day.
#[inline]
pub fn is_subdaily(dt: f64) -> bool {
    dt < SEC_PER_DAY
}

impl fmt::Display for Dmy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}+{:05}",
            self.year, self.month, self.day, self.day_seconds
        )
    }
}

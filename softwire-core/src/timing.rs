//! Bus timing parameters
//!
//! Every delay the transport inserts comes from one [`BusTiming`] value, so
//! the bus clock rate is a single tunable.
//!
//! - `half_period_us`: half of one clock-high pulse. A sent bit holds the
//!   clock high for two half-periods; a read bit samples the data line after
//!   the first one.
//! - `settle_us`: settling time after the START edges and between releasing
//!   the clock and the data line.

/// Bus timing configuration
///
/// The half-period is never zero, so a read always samples strictly after
/// the clock has risen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTiming {
    half_period_us: u32,
    settle_us: u32,
}

impl Default for BusTiming {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BusTiming {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self::new(5, 10);

    /// Closest whole-microsecond timing to fast mode
    ///
    /// 1.25 µs cannot be expressed, so the half-period rounds up to 2 µs
    /// and the bus actually runs at 250 kHz.
    pub const FAST: Self = Self::new(2, 4);

    /// Tick-paced timing for schedulers that only offer millisecond delays
    ///
    /// 10 ms per bit and per settle. Slow, but tolerant of a coarse timing
    /// source that cannot split a bit period any finer.
    pub const LEGACY: Self = Self::new(5_000, 10_000);

    /// Build a timing from microsecond values
    ///
    /// A zero half-period is raised to 1 µs.
    pub const fn new(half_period_us: u32, settle_us: u32) -> Self {
        let half_period_us = if half_period_us == 0 {
            1
        } else {
            half_period_us
        };
        Self {
            half_period_us,
            settle_us,
        }
    }

    /// Half of the clock-high pulse, in microseconds
    pub const fn half_period_us(&self) -> u32 {
        self.half_period_us
    }

    /// Settling time around START and release, in microseconds
    pub const fn settle_us(&self) -> u32 {
        self.settle_us
    }

    /// Derive timing for a target clock frequency
    ///
    /// The half-period is rounded up so the bus never runs faster than
    /// requested, and is never shorter than 1 µs. A zero frequency is
    /// treated as 1 Hz.
    pub fn from_frequency(frequency_hz: u32) -> Self {
        let frequency_hz = frequency_hz.max(1);
        let half_period_us = 500_000u32.div_ceil(frequency_hz);
        Self::new(half_period_us, half_period_us.saturating_mul(2))
    }

    /// Duration the clock is held high for one bit
    pub const fn bit_period_us(&self) -> u32 {
        self.half_period_us.saturating_mul(2)
    }

    /// Approximate clock frequency this timing produces
    ///
    /// Ignores the time spent toggling pins, so the real bus is slower.
    pub fn frequency_hz(&self) -> u32 {
        500_000 / self.half_period_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(BusTiming::default(), BusTiming::STANDARD);
        assert_eq!(BusTiming::STANDARD.frequency_hz(), 100_000);
    }

    #[test]
    fn test_from_frequency() {
        assert_eq!(BusTiming::from_frequency(100_000), BusTiming::STANDARD);

        // 400 kHz needs 1.25 us, rounded up to 2 us
        let fast = BusTiming::from_frequency(400_000);
        assert_eq!(fast, BusTiming::FAST);
        assert_eq!(fast.frequency_hz(), 250_000);

        // Absurdly high frequencies clamp to the 1 us floor
        let floor = BusTiming::from_frequency(10_000_000);
        assert_eq!(floor.half_period_us(), 1);
        assert_eq!(floor.settle_us(), 2);

        // Zero is not a divide-by-zero
        assert_eq!(BusTiming::from_frequency(0).half_period_us(), 500_000);
    }

    #[test]
    fn test_bit_period() {
        assert_eq!(BusTiming::STANDARD.bit_period_us(), 10);
        assert_eq!(BusTiming::LEGACY.bit_period_us(), 10_000);

        let huge = BusTiming::new(u32::MAX, 0);
        assert_eq!(huge.bit_period_us(), u32::MAX);
    }

    #[test]
    fn test_zero_half_period_is_clamped() {
        let timing = BusTiming::new(0, 0);

        assert_eq!(timing.half_period_us(), 1);
        assert_eq!(timing.settle_us(), 0);
        assert_eq!(timing.bit_period_us(), 2);
        assert_eq!(timing.frequency_hz(), 500_000);
    }
}

//! Bit-level transport
//!
//! Produces and consumes single bits on the two-wire bus. Correctness here
//! is entirely a matter of ordering: which line changes direction or level
//! first, and where the delays sit relative to the clock edges.
//!
//! ```text
//!          claim          send bit        read bit          release
//!  SDA ‾‾‾‾\_______ X═══════════════ ┄┄┄┄┄(slave)┄┄┄┄ ═══════════/‾‾‾‾
//!  SCL ‾‾‾‾‾‾‾\____ ____/‾‾‾‾‾‾\____ ____/‾‾‾‾:‾‾‾\___ ____/‾‾‾‾‾‾‾‾‾‾
//!                                            sample
//! ```

use embedded_hal::delay::DelayNs;
use softwire_hal::FlexPin;

use crate::timing::BusTiming;

/// Software I2C master driving two GPIO pins
///
/// Both lines are expected to have external pull-ups: releasing a line
/// means switching it to an input, never driving it high against the slave.
///
/// # Preconditions
///
/// The bus has exactly one owner and no internal locking. Bit operations
/// ([`send_bit`](Self::send_bit), [`read_bit`](Self::read_bit)) are only
/// valid between [`claim_bus`](Self::claim_bus) and
/// [`release_bus`](Self::release_bus); debug builds assert this.
pub struct SoftI2c<SDA, SCL, D> {
    sda: SDA,
    scl: SCL,
    delay: D,
    timing: BusTiming,
    /// True while both lines are driven by us
    claimed: bool,
}

impl<SDA, SCL, D> SoftI2c<SDA, SCL, D>
where
    SDA: FlexPin,
    SCL: FlexPin,
    D: DelayNs,
{
    /// Create a new bus master
    ///
    /// Both lines are left released: output level latched high, direction
    /// input. The first claim therefore starts from an idle bus instead of
    /// whatever level the pins were reset to.
    pub fn new(mut sda: SDA, mut scl: SCL, delay: D, timing: BusTiming) -> Self {
        sda.set_high();
        sda.set_as_input();
        scl.set_high();
        scl.set_as_input();

        Self {
            sda,
            scl,
            delay,
            timing,
            claimed: false,
        }
    }

    /// Tear down the bus and return the pins and delay
    pub fn free(self) -> (SDA, SCL, D) {
        (self.sda, self.scl, self.delay)
    }

    /// Current timing parameters
    pub fn timing(&self) -> BusTiming {
        self.timing
    }

    /// Change the timing used by subsequent bit operations
    pub fn set_timing(&mut self, timing: BusTiming) {
        self.timing = timing;
    }

    /// Check if the bus is currently claimed
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub(crate) fn sda_mut(&mut self) -> &mut SDA {
        &mut self.sda
    }

    /// Claim the bus with a START condition
    ///
    /// Both lines become outputs (still high from the idle latch), then data
    /// falls while the clock is high, then the clock falls.
    pub fn claim_bus(&mut self) {
        self.sda.set_as_output();
        self.scl.set_as_output();

        self.sda.set_low();
        self.delay.delay_us(self.timing.settle_us());
        self.scl.set_low();
        self.delay.delay_us(self.timing.settle_us());

        self.claimed = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("i2c: bus claimed");
    }

    /// Clock one bit out to the slave
    ///
    /// Data only changes while the clock is low; the clock is then held
    /// high for one full bit period.
    pub fn send_bit(&mut self, level: bool) {
        debug_assert!(self.claimed, "send_bit on a released bus");

        self.sda.set_level(level);
        self.scl.set_high();
        self.delay.delay_us(self.timing.bit_period_us());
        self.scl.set_low();
    }

    /// Clock one bit in from the slave
    ///
    /// The data line is sampled exactly once, half a bit period after the
    /// clock rises, and is driven again only after the clock has fallen.
    pub fn read_bit(&mut self) -> bool {
        debug_assert!(self.claimed, "read_bit on a released bus");

        self.sda.set_as_input();
        self.scl.set_high();
        self.delay.delay_us(self.timing.half_period_us());
        let level = self.sda.is_high();
        self.delay.delay_us(self.timing.half_period_us());
        self.scl.set_low();
        self.sda.set_as_output();

        level
    }

    /// Release the bus back to the pull-ups
    ///
    /// The clock is released before the data line, so data rising while the
    /// clock is already high reads as STOP.
    pub fn release_bus(&mut self) {
        self.scl.set_high();
        self.scl.set_as_input();
        self.delay.delay_us(self.timing.settle_us());
        self.sda.set_high();
        self.sda.set_as_input();

        self.claimed = false;

        #[cfg(feature = "defmt")]
        defmt::trace!("i2c: bus released");
    }
}

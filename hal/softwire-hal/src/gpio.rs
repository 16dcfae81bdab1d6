//! GPIO pin abstractions
//!
//! A bit-banged bus needs more than the usual split between input and output
//! pins: the data line changes direction in the middle of every byte to read
//! the acknowledgment bit. [`FlexPin`] captures exactly that.

/// Digital pin whose direction can be switched at run time
///
/// The output level is latched independently of the direction: calling
/// [`set_high`](Self::set_high) while the pin is an input only takes effect
/// on the wire once the pin is switched back to an output. Implementations
/// should configure the pin without internal pull resistors and without
/// interrupts; the bus relies on external pull-ups.
pub trait FlexPin {
    /// Stop driving the pin and let the external pull-up take over
    fn set_as_input(&mut self);

    /// Drive the pin with the latched output level
    fn set_as_output(&mut self);

    /// Latch a high output level (logic 1)
    fn set_high(&mut self);

    /// Latch a low output level (logic 0)
    fn set_low(&mut self);

    /// Latch a specific output level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin reads high (logic 1)
    ///
    /// Takes `&mut self` because some GPIO blocks need a register access
    /// with side effects to sample the input.
    fn is_high(&mut self) -> bool;
}

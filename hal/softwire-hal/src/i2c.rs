//! Two-wire master interface
//!
//! Drivers that only need whole-message transfers depend on [`I2cBus`]
//! instead of the bit-banged master's own methods.

/// Blocking two-wire master
///
/// Every call runs one complete transfer: START, address byte, payload,
/// then the bus is handed back to the pull-ups, on success and on error.
/// Addresses are 7-bit; the read/write bit is added by the implementation.
pub trait I2cBus {
    /// Transfer failure, typically a NACK carrying the rejected byte
    type Error;

    /// Send `data` to `address`
    ///
    /// Stops at the first byte the slave does not acknowledge; nothing
    /// after it is clocked out. An empty `data` only checks that the
    /// address is acknowledged.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf` with bytes clocked in from `address`
    ///
    /// The master ACKs every byte except the last, which it NACKs to tell
    /// the slave to stop driving the data line. Only the address byte can
    /// fail; the slave has no way to refuse the bytes it sends.
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

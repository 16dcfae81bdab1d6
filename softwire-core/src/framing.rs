//! Byte framing
//!
//! A byte on the wire is eight data bits, most significant first, followed
//! by one acknowledgment bit driven by the receiver: low means ACK, high
//! means NACK.

use embedded_hal::delay::DelayNs;
use softwire_hal::FlexPin;

use crate::error::BusError;
use crate::transport::SoftI2c;

/// Highest valid 7-bit address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Transfer direction encoded in bit 0 of the address byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Master writes to the slave (R/W bit 0)
    Write,
    /// Master reads from the slave (R/W bit 1)
    Read,
}

/// Build the first byte of a transaction from a 7-bit address
///
/// `0x3C` written to becomes `0x78`.
pub fn address_byte(address: u8, direction: Direction) -> Result<u8, BusError> {
    if address > MAX_ADDRESS {
        return Err(BusError::InvalidAddress(address));
    }

    let rw = match direction {
        Direction::Write => 0,
        Direction::Read => 1,
    };
    Ok((address << 1) | rw)
}

impl<SDA, SCL, D> SoftI2c<SDA, SCL, D>
where
    SDA: FlexPin,
    SCL: FlexPin,
    D: DelayNs,
{
    /// Send one byte MSB first and check the slave's acknowledgment
    ///
    /// Any high level on the acknowledgment clock is a NACK. There is no
    /// retry; the caller decides whether to abort the transaction.
    pub fn send_byte(&mut self, byte: u8) -> Result<(), BusError> {
        for bit in (0..8).rev() {
            self.send_bit((byte >> bit) & 1 == 1);
        }

        if self.read_bit() {
            #[cfg(feature = "defmt")]
            defmt::warn!("i2c: NACK after byte {=u8:#04x}", byte);
            return Err(BusError::Nack(byte));
        }

        Ok(())
    }

    /// Receive one byte MSB first, then acknowledge it or end the read
    ///
    /// Pass `ack = false` for the last byte of a read so the slave stops
    /// driving the data line.
    pub fn read_byte(&mut self, ack: bool) -> u8 {
        // Idle level latched high so re-enabling the output between bits
        // never pulls the slave's data low.
        self.sda_mut().set_high();

        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit() as u8;
        }

        self.send_bit(!ack);
        byte
    }
}

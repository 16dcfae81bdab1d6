//! [`I2cBus`] implementation for the bit-banged master
//!
//! Each call is one complete transaction, so the bus is idle again when the
//! call returns, whether it succeeded or not.

use embedded_hal::delay::DelayNs;
use softwire_hal::{FlexPin, I2cBus};

use crate::error::BusError;
use crate::framing::{address_byte, Direction};
use crate::link::Transaction;
use crate::transport::SoftI2c;

impl<SDA, SCL, D> I2cBus for SoftI2c<SDA, SCL, D>
where
    SDA: FlexPin,
    SCL: FlexPin,
    D: DelayNs,
{
    type Error = BusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        let mut txn = Transaction::begin_write(self, address)?;
        txn.write_bytes(data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        let address = address_byte(address, Direction::Read)?;
        let mut txn = Transaction::begin(self);
        txn.send_byte(address)?;

        let last = buf.len().saturating_sub(1);
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = txn.read_byte(i != last);
        }

        Ok(())
    }
}

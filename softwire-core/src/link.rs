//! Byte links and scoped transactions
//!
//! [`ByteLink`] is the seam between the bus and the protocols layered on
//! top of it: claim, framed byte writes, release. Display drivers depend on
//! this trait rather than on [`SoftI2c`], which keeps them testable with a
//! byte-level mock.
//!
//! [`Transaction`] pairs every claim with a release. The release runs from
//! `Drop`, so it happens on every exit path, including an early `?` return
//! after a NACK.

use core::ops::{Deref, DerefMut};

use embedded_hal::delay::DelayNs;
use softwire_hal::FlexPin;

use crate::error::BusError;
use crate::framing::{address_byte, Direction};
use crate::transport::SoftI2c;

/// Byte-oriented access to a claimed bus
pub trait ByteLink {
    /// Issue START and take ownership of the bus
    fn claim(&mut self);

    /// Send one byte and check its acknowledgment
    fn write_byte(&mut self, byte: u8) -> Result<(), BusError>;

    /// Hand the bus back to the pull-ups
    fn release(&mut self);
}

impl<SDA, SCL, D> ByteLink for SoftI2c<SDA, SCL, D>
where
    SDA: FlexPin,
    SCL: FlexPin,
    D: DelayNs,
{
    fn claim(&mut self) {
        self.claim_bus();
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), BusError> {
        self.send_byte(byte)
    }

    fn release(&mut self) {
        self.release_bus();
    }
}

impl<L: ByteLink + ?Sized> ByteLink for &mut L {
    fn claim(&mut self) {
        (**self).claim();
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), BusError> {
        (**self).write_byte(byte)
    }

    fn release(&mut self) {
        (**self).release();
    }
}

/// One claimed stretch of bus traffic, released on drop
///
/// Dereferences to the underlying link so link-specific operations (such
/// as [`SoftI2c::read_byte`]) stay available inside the transaction.
pub struct Transaction<'a, L: ByteLink> {
    link: &'a mut L,
}

impl<'a, L: ByteLink> Transaction<'a, L> {
    /// Claim the bus
    pub fn begin(link: &'a mut L) -> Self {
        link.claim();
        Self { link }
    }

    /// Claim the bus and address a slave for writing
    ///
    /// An invalid address is rejected before the bus is touched. A NACK on
    /// the address byte releases the bus again before returning.
    pub fn begin_write(link: &'a mut L, address: u8) -> Result<Self, BusError> {
        let address = address_byte(address, Direction::Write)?;
        let mut txn = Self::begin(link);
        txn.write_byte(address)?;
        Ok(txn)
    }

    /// Send one byte
    pub fn write_byte(&mut self, byte: u8) -> Result<(), BusError> {
        self.link.write_byte(byte)
    }

    /// Send bytes in order, stopping at the first NACK
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BusError> {
        for &byte in bytes {
            self.link.write_byte(byte)?;
        }
        Ok(())
    }
}

impl<L: ByteLink> Deref for Transaction<'_, L> {
    type Target = L;

    fn deref(&self) -> &L {
        &*self.link
    }
}

impl<L: ByteLink> DerefMut for Transaction<'_, L> {
    fn deref_mut(&mut self) -> &mut L {
        &mut *self.link
    }
}

impl<L: ByteLink> Drop for Transaction<'_, L> {
    fn drop(&mut self) {
        self.link.release();
    }
}

//! Board-agnostic bit-banged I2C master
//!
//! This crate drives an I2C bus from two [`FlexPin`]s and a blocking
//! [`DelayNs`] timing source, with no I2C peripheral involved:
//!
//! - Bit-level transport (START, single bits, release) in [`transport`]
//! - Byte framing with acknowledgment checking in [`framing`]
//! - Bus timing parameters in [`timing`]
//! - Scoped transactions that always release the bus in [`link`]
//! - A generic [`I2cBus`] implementation in [`master`]
//!
//! # Bus ownership
//!
//! [`SoftI2c`] owns both pins for its whole lifetime. It has no locking:
//! one transaction (claim, framed bytes, release) must complete before the
//! next begins, and the bus must never be driven from two tasks at once.
//!
//! [`FlexPin`]: softwire_hal::FlexPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs
//! [`I2cBus`]: softwire_hal::I2cBus

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod framing;
pub mod link;
pub mod master;
pub mod timing;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use error::BusError;
pub use framing::{address_byte, Direction};
pub use link::{ByteLink, Transaction};
pub use timing::BusTiming;
pub use transport::SoftI2c;

//! SH1106 OLED command protocol
//!
//! Drives an SH1106 (132x64, 8 pages) over any [`ByteLink`], normally the
//! bit-banged [`SoftI2c`] master from `softwire-core`.
//!
//! Every byte sent to the controller is preceded by a control byte:
//! `0x80` when a single command byte follows, `0xC0` when a single data
//! byte follows. Multi-step operations stop at the first byte the
//! controller does not acknowledge.
//!
//! # Example
//!
//! ```ignore
//! use softwire_core::{BusTiming, SoftI2c};
//! use softwire_sh1106::{Sh1106, Sh1106Config};
//!
//! let bus = SoftI2c::new(sda, scl, delay, BusTiming::STANDARD);
//! let mut display = Sh1106::new(bus, Sh1106Config::default());
//! display.init()?;
//! display.toggle()?; // on
//! let bus = display.deinit();
//! ```
//!
//! [`ByteLink`]: softwire_core::ByteLink
//! [`SoftI2c`]: softwire_core::SoftI2c

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod addressing;
pub mod cmd;
pub mod config;
pub mod driver;
pub mod error;
pub mod protocol;

#[cfg(test)]
pub(crate) mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use addressing::{COLUMNS, PAGES};
pub use config::Sh1106Config;
pub use driver::{PowerState, Sh1106};
pub use error::DisplayError;

//! Softwire Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the bit-banged I2C
//! master is written against. Chip-specific HALs (STM32F0, etc.) implement
//! them so the same bus and display code runs on any board with two free
//! GPIO pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  softwire-sh1106 (command protocol)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  softwire-core (bit transport, framing) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  softwire-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ softwire-hal- │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::FlexPin`] - Digital I/O with run-time direction switching
//! - [`i2c::I2cBus`] - I2C master operations
//!
//! Timing is not abstracted here: the bus consumes
//! `embedded_hal::delay::DelayNs` directly.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::FlexPin;
pub use i2c::I2cBus;

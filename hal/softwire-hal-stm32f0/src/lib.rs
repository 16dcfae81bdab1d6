//! STM32F0-specific HAL for Softwire
//!
//! This crate implements the `softwire-hal` traits on top of `embassy-stm32`
//! for STM32F0 chips, including:
//!
//! - STM32F042F6 / STM32F042K6
//!
//! # Features
//!
//! - `stm32f042f6`, `stm32f042k6` - Select the chip (one, via the firmware)
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod gpio;

pub use gpio::OpenDrainLine;

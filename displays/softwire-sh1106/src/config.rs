//! Display configuration

use crate::cmd::value;

/// Usual 7-bit address of SH1106 modules (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// 7-bit address with SA0 pulled high
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// SH1106 initialisation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sh1106Config {
    /// 7-bit I2C address
    pub address: u8,
    /// Multiplex ratio value (rows - 1)
    pub multiplex_ratio: u8,
    /// Common signals pad configuration value
    pub com_pins: u8,
    /// Mirror columns horizontally (segment remap)
    pub mirror_x: bool,
}

impl Default for Sh1106Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Sh1106Config {
    /// 128x64 module at the default address, columns mirrored
    pub const DEFAULT: Self = Self {
        address: DEFAULT_ADDRESS,
        multiplex_ratio: value::MULTIPLEX_RATIO_64,
        com_pins: value::COM_PINS_ALTERNATIVE,
        mirror_x: true,
    };

    /// Default configuration at a different address
    pub fn with_address(address: u8) -> Self {
        Self {
            address,
            ..Self::DEFAULT
        }
    }
}

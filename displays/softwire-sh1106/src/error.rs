//! Error types for the SH1106 driver

use softwire_core::BusError;

/// Errors that can occur during display operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// A byte was not acknowledged (or the address was invalid)
    Bus(BusError),
    /// Page index above 7
    PageOutOfRange(u8),
    /// Column index above 131
    ColumnOutOfRange(u8),
}

impl From<BusError> for DisplayError {
    fn from(e: BusError) -> Self {
        DisplayError::Bus(e)
    }
}

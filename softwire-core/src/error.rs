//! Bus error types

/// Errors raised by the bit-banged bus
///
/// The bus cannot tell an absent slave from one that rejected a byte: both
/// leave the data line high during the acknowledgment clock and surface as
/// [`BusError::Nack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The slave did not acknowledge the contained byte
    Nack(u8),
    /// 7-bit address out of range (above 0x7F)
    InvalidAddress(u8),
}

impl BusError {
    /// Check if this is an acknowledgment failure
    pub fn is_nack(&self) -> bool {
        matches!(self, BusError::Nack(_))
    }
}

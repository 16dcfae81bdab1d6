//! Page and column addressing
//!
//! The controller's memory is 8 horizontal bands of 8 pixel rows (pages),
//! each 132 columns wide. Column addresses are split into two nibble
//! commands.

use crate::cmd;
use crate::error::DisplayError;

/// Number of pages
pub const PAGES: u8 = 8;

/// Number of physical columns per page
pub const COLUMNS: u8 = 132;

/// Command selecting `page` (0-7)
pub fn page_address(page: u8) -> Result<u8, DisplayError> {
    if page >= PAGES {
        return Err(DisplayError::PageOutOfRange(page));
    }
    Ok(cmd::SET_PAGE_ADDR | page)
}

/// Command carrying the low nibble of `column` (0-131)
pub fn lower_column_address(column: u8) -> Result<u8, DisplayError> {
    check_column(column)?;
    Ok(cmd::SET_LOW_COLUMN | (column & 0x0F))
}

/// Command carrying the high nibble of `column` (0-131)
pub fn upper_column_address(column: u8) -> Result<u8, DisplayError> {
    check_column(column)?;
    Ok(cmd::SET_HIGH_COLUMN | (column >> 4))
}

fn check_column(column: u8) -> Result<(), DisplayError> {
    if column >= COLUMNS {
        return Err(DisplayError::ColumnOutOfRange(column));
    }
    Ok(())
}

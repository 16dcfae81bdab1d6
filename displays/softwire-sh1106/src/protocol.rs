//! Command/data framing for the SH1106
//!
//! These functions write to a link that is already claimed and addressed;
//! [`Sh1106`](crate::Sh1106) wraps them in transactions. Every function
//! stops at the first unacknowledged byte and returns its error, so the
//! controller never sees a payload without its control byte.

use softwire_core::{BusError, ByteLink};

use crate::addressing::{self, COLUMNS, PAGES};
use crate::cmd;
use crate::error::DisplayError;

/// Send one command byte
pub fn send_command<L: ByteLink>(link: &mut L, command: u8) -> Result<(), BusError> {
    link.write_byte(cmd::CONTROL_COMMAND)?;
    link.write_byte(command)
}

/// Send one data byte
pub fn send_data<L: ByteLink>(link: &mut L, data: u8) -> Result<(), BusError> {
    link.write_byte(cmd::CONTROL_DATA)?;
    link.write_byte(data)
}

/// Send a two-byte command (command, then its value)
pub fn send_double_command<L: ByteLink>(
    link: &mut L,
    command: u8,
    value: u8,
) -> Result<(), BusError> {
    send_command(link, command)?;
    send_command(link, value)
}

/// Point the column address at `column` within `page`
///
/// Both indices are checked before anything is sent.
pub fn set_cursor<L: ByteLink>(link: &mut L, page: u8, column: u8) -> Result<(), DisplayError> {
    let page = addressing::page_address(page)?;
    let lower = addressing::lower_column_address(column)?;
    let upper = addressing::upper_column_address(column)?;

    send_command(link, page)?;
    send_command(link, lower)?;
    send_command(link, upper)?;
    Ok(())
}

/// Zero every column of every page
///
/// Each page is written inside a read-modify-write bracket, so the column
/// address advances with each data byte and is restored at the end.
pub fn clear_display<L: ByteLink>(link: &mut L) -> Result<(), DisplayError> {
    for page in 0..PAGES {
        set_cursor(link, page, 0)?;
        send_command(link, cmd::READ_MODIFY_WRITE)?;
        for _ in 0..COLUMNS {
            send_data(link, 0x00)?;
        }
        send_command(link, cmd::END_READ_MODIFY_WRITE)?;
    }

    Ok(())
}

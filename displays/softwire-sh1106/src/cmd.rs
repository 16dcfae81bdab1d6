//! SH1106 control bytes and command set

/// Control byte: one command byte follows (Co = 1, D/C# = 0)
pub const CONTROL_COMMAND: u8 = 0x80;
/// Control byte: one data byte follows (Co = 1, D/C# = 1)
pub const CONTROL_DATA: u8 = 0xC0;

/// Lower column address nibble (`0x00 | n`)
pub const SET_LOW_COLUMN: u8 = 0x00;
/// Upper column address nibble (`0x10 | n`)
pub const SET_HIGH_COLUMN: u8 = 0x10;
/// Page address (`0xB0 | page`)
pub const SET_PAGE_ADDR: u8 = 0xB0;

pub const SET_CONTRAST: u8 = 0x81;
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;
/// Common signals pad configuration
pub const SET_COM_PINS: u8 = 0xDA;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
/// DC-DC charge pump control, followed by on/off value
pub const SET_CHARGE_PUMP: u8 = 0xAD;
/// Segment remap, column 0 on SEG0
pub const SET_SEG_NORMAL: u8 = 0xA0;
/// Segment remap, mirrored horizontally
pub const SET_SEG_REMAP: u8 = 0xA1;
/// Reverse display off
pub const SET_NORMAL: u8 = 0xA6;
/// Reverse display on
pub const SET_INVERSE: u8 = 0xA7;
/// Enter read-modify-write: data writes advance the column, reads do not
pub const READ_MODIFY_WRITE: u8 = 0xE0;
/// Leave read-modify-write and restore the starting column
pub const END_READ_MODIFY_WRITE: u8 = 0xEE;

/// Second bytes of double commands
pub mod value {
    /// 64 multiplex ratio
    pub const MULTIPLEX_RATIO_64: u8 = 0x3F;
    /// Alternative common signals pad configuration
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12;
    pub const CHARGE_PUMP_ON: u8 = 0x8D;
    pub const CHARGE_PUMP_OFF: u8 = 0x8C;
}

//! ST7789V command set
//!
//! Only the commands the driver issues are listed. Values are the
//! controller's opcodes; they go out with the mode line low.

/// Controller command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// SLPOUT: leave sleep mode
    Wake = 0x11,
    /// INVON: display inversion on
    OnReverse = 0x21,
    /// DISPON: display on
    OnDisplay = 0x29,
    /// CASET: column address window
    SetColumn = 0x2A,
    /// RASET: row address window
    SetRow = 0x2B,
    /// RAMWR: pixel data into the current window
    Write = 0x2C,
    /// MADCTL: memory data access control
    SetRAMReadMode = 0x36,
    /// COLMOD: interface pixel format
    SetColorFmt = 0x3A,
    /// RAMCTRL: RAM access and pixel byte order
    SetRGB = 0xB0,
}

impl Command {
    /// Opcode byte
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = u8;

    fn try_from(opcode: u8) -> Result<Self, Self::Error> {
        match opcode {
            0x11 => Ok(Command::Wake),
            0x21 => Ok(Command::OnReverse),
            0x29 => Ok(Command::OnDisplay),
            0x2A => Ok(Command::SetColumn),
            0x2B => Ok(Command::SetRow),
            0x2C => Ok(Command::Write),
            0x36 => Ok(Command::SetRAMReadMode),
            0x3A => Ok(Command::SetColorFmt),
            0xB0 => Ok(Command::SetRGB),
            other => Err(other),
        }
    }
}

/// MADCTL argument: top-to-bottom, left-to-right, RGB order
pub const RAM_READ_MODE: [u8; 1] = [0x00];

/// COLMOD argument: 16 bits per pixel (RGB565)
pub const COLOR_FMT_RGB565: [u8; 1] = [0x55];

/// RAMCTRL argument: RAM written from the MCU interface, little-endian pixels
pub const RGB_LITTLE_ENDIAN: [u8; 2] = [0x00, 0x08];

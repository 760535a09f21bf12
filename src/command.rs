//! The command set for the KS0713.
//!
//! Note 1: The display RAM of the KS0713 is 65 rows by 132 columns, organized as 8 pages of 8 rows
//! (plus a single-row icon page which this driver does not use). Each byte written to the display
//! RAM covers one column of one page, the least significant bit being the topmost row. The panel
//! this driver targets shows 128x64 pixels of that.
//!
//! Note 2: Unlike many controllers, the KS0713 takes command arguments in command mode (A0 low).
//! Two-part commands are therefore sent as two command bytes, never as command + data.

use crate::interface::DisplayInterface;

pub mod consts {
    //! Panel and controller geometry.

    /// Visible pixel columns of the panel.
    pub const WIDTH: u8 = 128;
    /// Visible pixel rows of the panel.
    pub const HEIGHT: u8 = 64;
    /// Number of 8-row pages covering the panel.
    pub const PAGES: u8 = HEIGHT / 8;
    /// Size in bytes of a frame buffer covering the panel.
    pub const BUFFER_SIZE: usize = WIDTH as usize * HEIGHT as usize / 8;
    pub const PAGE_MAX: u8 = PAGES - 1;
    /// Highest column address of the controller's display RAM. (Note 1)
    pub const COLUMN_MAX: u8 = 131;
    pub const START_LINE_MAX: u8 = 63;
}

use self::consts::*;

/// Errors returned by operations which talk to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A command argument was outside the range the controller accepts. Nothing was sent.
    OutOfRange,
    /// The bus transport failed.
    Interface(E),
    /// Driving the reset or backlight line failed.
    Pin,
}

/// Mapping of column addresses to segment drivers (the ADC select bit).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentDirection {
    /// Column address 0 drives SEG0.
    Normal,
    /// Column address 0 drives SEG131.
    Reversed,
}

/// Scanning order of the COM lines (the SHL select bit). Changing this flips the image vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComScanDirection {
    /// COM0 -> COM63.
    Normal,
    /// COM63 -> COM0.
    Reversed,
}

/// LCD drive voltage bias ratio. Which ratio each setting means depends on the duty the chip is
/// strapped for; for the 1/65 duty parts it is 1/9 and 1/7 respectively.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bias {
    Low,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Reset the internal functions of the controller. The display RAM is not affected.
    Reset,
    /// Turn the panel on or off. The display RAM is retained while off.
    DisplayOn(bool),
    /// Set the display RAM row shown on the top COM line, rolling the image upwards. Range is
    /// 0-63.
    SetStartLine(u8),
    /// Select the page written by subsequent display data. Range is 0-7.
    SetPageAddress(u8),
    /// Set the column address written by subsequent display data. It auto-increments after each
    /// data byte. Range is 0-131. (Note 1)
    SetColumnAddress(u8),
    /// Select the column to segment mapping.
    SetSegmentDirection(SegmentDirection),
    /// Show the display RAM inverted (lit pixels for cleared bits).
    SetReverseDisplay(bool),
    /// Force every pixel on regardless of display RAM contents.
    SetEntireDisplayOn(bool),
    /// Select the LCD bias ratio.
    SetBias(Bias),
    /// Select the COM scan direction.
    SetComScanDirection(ComScanDirection),
    /// Switch the internal power circuits. Bit 2 is the voltage converter, bit 1 the voltage
    /// regulator, bit 0 the voltage follower. Range is 0-7.
    SetPowerControl(u8),
    /// Select the internal regulator resistor ratio (1 + Rb/Ra). Range is 0-7.
    SetRegulatorResistor(u8),
    /// Set the reference voltage register, i.e. the electronic volume which sets the LCD drive
    /// voltage and so the contrast. Range is 0-255 (only 0-63 are meaningful on most parts).
    SetReferenceVoltage(u8),
    /// Control the static indicator. The mode is the flashing setting, range 0-3, and is only
    /// meaningful when the indicator is on.
    SetStaticIndicator(bool, u8),
    /// Enter or leave read-modify-write mode, in which the column address only increments on
    /// writes.
    SetModifyRead(bool),
}

macro_rules! ok_command {
    ($buf:ident,[$cmd:expr]) => {{
        $buf[0] = $cmd;
        Ok(&$buf[..1])
    }};
    ($buf:ident,[$cmd:expr, $arg:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg;
        Ok(&$buf[..2])
    }};
}

impl Command {
    /// Validate and send the command. Every byte goes out in command mode. (Note 2)
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let mut cmd_buf = [0u8; 2];
        let cmds: Result<&[u8], Error<DI::Error>> = match self {
            Command::Reset => ok_command!(cmd_buf, [0xE2]),
            Command::DisplayOn(on) => ok_command!(cmd_buf, [0xAE | on as u8]),
            Command::SetStartLine(line) => match line {
                0..=START_LINE_MAX => ok_command!(cmd_buf, [0x40 | line]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetPageAddress(page) => match page {
                0..=PAGE_MAX => ok_command!(cmd_buf, [0xB0 | page]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetColumnAddress(col) => match col {
                0..=COLUMN_MAX => ok_command!(cmd_buf, [col & 0x0F, 0x10 | (col >> 4)]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetSegmentDirection(dir) => {
                let adc = match dir {
                    SegmentDirection::Normal => 0x00,
                    SegmentDirection::Reversed => 0x01,
                };
                ok_command!(cmd_buf, [0xA0 | adc])
            }
            Command::SetReverseDisplay(rev) => ok_command!(cmd_buf, [0xA6 | rev as u8]),
            Command::SetEntireDisplayOn(eon) => ok_command!(cmd_buf, [0xA4 | eon as u8]),
            Command::SetBias(bias) => {
                let b = match bias {
                    Bias::Low => 0x00,
                    Bias::High => 0x01,
                };
                ok_command!(cmd_buf, [0xA2 | b])
            }
            Command::SetComScanDirection(dir) => {
                let shl = match dir {
                    ComScanDirection::Normal => 0x00,
                    ComScanDirection::Reversed => 0x08,
                };
                ok_command!(cmd_buf, [0xC0 | shl])
            }
            Command::SetPowerControl(bits) => match bits {
                0..=7 => ok_command!(cmd_buf, [0x28 | bits]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetRegulatorResistor(ratio) => match ratio {
                0..=7 => ok_command!(cmd_buf, [0x20 | ratio]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetReferenceVoltage(value) => ok_command!(cmd_buf, [0x81, value]),
            Command::SetStaticIndicator(on, mode) => match mode {
                0..=3 => ok_command!(cmd_buf, [0xAC | on as u8, mode]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetModifyRead(ena) => ok_command!(
                cmd_buf,
                [match ena {
                    true => 0xE0,
                    false => 0xEE,
                }]
            ),
        };
        for &cmd in cmds?.iter() {
            iface.send_command(cmd).map_err(Error::Interface)?;
        }
        Ok(())
    }
}

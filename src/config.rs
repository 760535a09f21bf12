//! Defines structs for storing register values of commands in the KS0713 that are associated with
//! relatively-static configuration.

use crate::command::*;
use crate::interface;

/// Contrast (reference voltage register) value the reference board powers up with.
pub const DEFAULT_CONTRAST: u8 = 0x28;

/// The portion of the configuration which will persist inside the `Display` because every
/// screen update needs it. This allows the rest of the `Config` struct to be thrown away after
/// `Display::init` finishes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PersistentConfig {
    /// The first controller column wired to the panel. Display RAM has more columns than the
    /// glass, and modules with reversed segment mapping usually start a few columns in.
    pub(crate) column_offset: u8,
}

/// A configuration for the display. Builder methods offer a declarative way to override the
/// settings of the reference board; every setting is sent at init time.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) persistent_config: PersistentConfig,
    pub(crate) contrast: u8,
    segment_direction: SegmentDirection,
    reverse_display: bool,
    bias: Bias,
    com_scan_direction: ComScanDirection,
    power_control: u8,
    regulator_resistor: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new configuration with the settings of the reference board: reversed segment
    /// mapping starting at column 4, reversed COM scan, low bias, all power circuits on, regulator
    /// ratio 4 and contrast `DEFAULT_CONTRAST`.
    pub fn new() -> Self {
        Config {
            persistent_config: PersistentConfig { column_offset: 4 },
            contrast: DEFAULT_CONTRAST,
            segment_direction: SegmentDirection::Reversed,
            reverse_display: false,
            bias: Bias::Low,
            com_scan_direction: ComScanDirection::Reversed,
            power_control: 0x07,
            regulator_resistor: 4,
        }
    }

    /// Extend this `Config` to set the contrast sent at init time. See
    /// `Command::SetReferenceVoltage`.
    pub fn contrast(self, contrast: u8) -> Self {
        Self { contrast, ..self }
    }

    /// Extend this `Config` to set the segment mapping. See `Command::SetSegmentDirection`.
    pub fn segment_direction(self, segment_direction: SegmentDirection) -> Self {
        Self {
            segment_direction,
            ..self
        }
    }

    /// Extend this `Config` to show the image inverted. See `Command::SetReverseDisplay`.
    pub fn reverse_display(self, reverse_display: bool) -> Self {
        Self {
            reverse_display,
            ..self
        }
    }

    /// Extend this `Config` to set the LCD bias. See `Command::SetBias`.
    pub fn bias(self, bias: Bias) -> Self {
        Self { bias, ..self }
    }

    /// Extend this `Config` to set the COM scan direction. See `Command::SetComScanDirection`.
    pub fn com_scan_direction(self, com_scan_direction: ComScanDirection) -> Self {
        Self {
            com_scan_direction,
            ..self
        }
    }

    /// Extend this `Config` to switch the internal power circuits. See
    /// `Command::SetPowerControl`.
    pub fn power_control(self, power_control: u8) -> Self {
        Self {
            power_control,
            ..self
        }
    }

    /// Extend this `Config` to set the regulator resistor ratio. See
    /// `Command::SetRegulatorResistor`.
    pub fn regulator_resistor(self, regulator_resistor: u8) -> Self {
        Self {
            regulator_resistor,
            ..self
        }
    }

    /// Extend this `Config` to set the first controller column wired to the panel. Each page is
    /// written starting at this column address. Must leave room for the full panel width below
    /// `consts::COLUMN_MAX`.
    pub fn column_offset(self, column_offset: u8) -> Self {
        Self {
            persistent_config: PersistentConfig { column_offset },
            ..self
        }
    }

    /// Check the settings that span more than one command, i.e. that the column offset leaves room
    /// for the full panel width. Per-command ranges are checked as each command is sent.
    pub(crate) fn validate<E>(&self) -> Result<(), Error<E>> {
        if self.persistent_config.column_offset as u16 + consts::WIDTH as u16
            > consts::COLUMN_MAX as u16 + 1
        {
            return Err(Error::OutOfRange);
        }
        Ok(())
    }

    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// configuration encoded in `self`, finishing with the panel switched on.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: interface::DisplayInterface,
    {
        self.validate::<DI::Error>()?;
        Command::DisplayOn(false).send(iface)?;
        Command::SetSegmentDirection(self.segment_direction).send(iface)?;
        Command::SetReverseDisplay(self.reverse_display).send(iface)?;
        Command::SetEntireDisplayOn(false).send(iface)?;
        Command::SetBias(self.bias).send(iface)?;
        Command::SetComScanDirection(self.com_scan_direction).send(iface)?;
        Command::SetPowerControl(self.power_control).send(iface)?;
        Command::SetRegulatorResistor(self.regulator_resistor).send(iface)?;
        Command::SetReferenceVoltage(self.contrast).send(iface)?;
        Command::DisplayOn(true).send(iface)
    }
}

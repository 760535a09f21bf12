//! The main API to the display driver. `Display` owns the bus transport, the backlight line and a
//! `Canvas` holding the frame buffer. Drawing goes to the canvas (reachable directly through
//! `Deref`) and only reaches the panel on `update`.

pub mod canvas;
pub mod shapes;
pub mod text;

use core::ops::{Deref, DerefMut};

use hal::blocking::delay::DelayUs;
use hal::digital::v2::OutputPin;

use crate::command::consts::*;
use crate::command::*;
use crate::config::{Config, PersistentConfig};
use crate::interface;
use crate::logo::LOGO;

pub use self::canvas::{Canvas, FrameBuffer};
pub use self::shapes::RectFlags;

/// How long the reset line is held low, and how long the controller needs after it is released.
const RESET_PULSE_US: u16 = 5;
const RESET_RECOVERY_US: u16 = 50;

/// A driver for a 128x64 panel on a KS0713 controller.
pub struct Display<DI, BL>
where
    DI: interface::DisplayInterface,
    BL: OutputPin,
{
    iface: DI,
    backlight: BL,
    canvas: Canvas,
    contrast: u8,
    backlight_on: bool,
    persistent_config: PersistentConfig,
}

impl<DI, BL> Display<DI, BL>
where
    DI: interface::DisplayInterface,
    BL: OutputPin,
{
    /// Construct a new display driver for the controller on `iface`, with the backlight switched
    /// by `backlight`. Nothing is sent until `init`.
    pub fn new(iface: DI, backlight: BL) -> Self {
        let config = Config::new();
        Display {
            iface,
            backlight,
            canvas: Canvas::new(),
            contrast: config.contrast,
            backlight_on: false,
            persistent_config: config.persistent_config,
        }
    }

    /// Bring the controller up: pulse `reset`, send the configuration, show the built-in logo and
    /// switch the backlight on. Meant to be called once after power-up. A `config` the panel
    /// cannot use is rejected before the reset line or the bus is touched.
    pub fn init<RST, D>(
        &mut self,
        config: Config,
        reset: &mut RST,
        delay: &mut D,
    ) -> Result<(), Error<DI::Error>>
    where
        RST: OutputPin,
        D: DelayUs<u16>,
    {
        config.validate::<DI::Error>()?;
        reset.set_low().map_err(|_| Error::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        reset.set_high().map_err(|_| Error::Pin)?;
        delay.delay_us(RESET_RECOVERY_US);

        Command::Reset.send(&mut self.iface)?;
        config.send(&mut self.iface)?;
        self.persistent_config = config.persistent_config;
        self.contrast = config.contrast;
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ks0713 configured, contrast {=u8}, column offset {=u8}",
            self.contrast,
            self.persistent_config.column_offset
        );

        self.canvas.load_image(&LOGO);
        self.update()?;
        self.backlight(true)
    }

    /// Send the whole frame buffer to the panel, one page at a time.
    pub fn update(&mut self) -> Result<(), Error<DI::Error>> {
        for (page, bytes) in (0..PAGES).zip(self.canvas.buffer.pages()) {
            Command::SetPageAddress(page).send(&mut self.iface)?;
            Command::SetColumnAddress(self.persistent_config.column_offset).send(&mut self.iface)?;
            self.iface.send_data(bytes).map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Switch the backlight on or off.
    pub fn backlight(&mut self, on: bool) -> Result<(), Error<DI::Error>> {
        if on {
            self.backlight.set_high().map_err(|_| Error::Pin)?;
        } else {
            self.backlight.set_low().map_err(|_| Error::Pin)?;
        }
        self.backlight_on = on;
        Ok(())
    }

    /// Whether the backlight was last switched on.
    pub fn is_backlight_on(&self) -> bool {
        self.backlight_on
    }

    /// The contrast last sent to the controller, or the one `init` will send.
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Set the contrast, i.e. the controller's reference voltage register.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<DI::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("contrast {=u8} -> {=u8}", self.contrast, contrast);
        self.contrast = contrast;
        Command::SetReferenceVoltage(contrast).send(&mut self.iface)
    }

    /// Change the contrast by `delta`, saturating at 0 and 255.
    pub fn adjust_contrast(&mut self, delta: i8) -> Result<(), Error<DI::Error>> {
        let contrast = (self.contrast as i16 + delta as i16).max(0).min(u8::MAX as i16);
        self.set_contrast(contrast as u8)
    }

    /// Release the transport and the backlight pin.
    pub fn release(self) -> (DI, BL) {
        (self.iface, self.backlight)
    }
}

impl<DI, BL> Deref for Display<DI, BL>
where
    DI: interface::DisplayInterface,
    BL: OutputPin,
{
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        &self.canvas
    }
}

impl<DI, BL> DerefMut for Display<DI, BL>
where
    DI: interface::DisplayInterface,
    BL: OutputPin,
{
    fn deref_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }
}

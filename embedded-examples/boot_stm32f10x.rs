//! Full example code for bringing up a KS0713 panel. This runs on an STM32F103 with the panel's
//! D0-D7 on PB8-PB15, A0 on PA8, E on PA9, /CS1 on PA10, /RES on PA11 and the backlight switch
//! on PA12. The panel's R/W line is tied low.
//!
//! The board wires the segment lines right to left, so display data is sent in reverse order.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use embedded_hal::digital::v2::OutputPin;
use ks0713::{CharSize, Config, DataOrder, Display, ParallelInterface, RectFlags, LOGO};
use panic_halt as _;
use stm32f1xx_hal::{pac, prelude::*};

/// Contrast range the persisted setting is clamped to before use.
const CONTRAST_MIN: u8 = 0x18;
const CONTRAST_MAX: u8 = 0x38;

/// Stand-in for the settings the firmware keeps in EEPROM.
struct Settings {
    contrast: u8,
    show_splash: bool,
}

fn load_settings() -> Settings {
    Settings {
        contrast: 0x2C,
        show_splash: true,
    }
}

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = cp.SYST.delay(&clocks);

    let mut gpioa = dp.GPIOA.split();
    let mut gpiob = dp.GPIOB.split();

    // The data lines, D0 first.
    let bus = [
        gpiob.pb8.into_push_pull_output(&mut gpiob.crh).erase(),
        gpiob.pb9.into_push_pull_output(&mut gpiob.crh).erase(),
        gpiob.pb10.into_push_pull_output(&mut gpiob.crh).erase(),
        gpiob.pb11.into_push_pull_output(&mut gpiob.crh).erase(),
        gpiob.pb12.into_push_pull_output(&mut gpiob.crh).erase(),
        gpiob.pb13.into_push_pull_output(&mut gpiob.crh).erase(),
        gpiob.pb14.into_push_pull_output(&mut gpiob.crh).erase(),
        gpiob.pb15.into_push_pull_output(&mut gpiob.crh).erase(),
    ];
    let a0 = gpioa.pa8.into_push_pull_output(&mut gpioa.crh).erase();
    let enable = gpioa.pa9.into_push_pull_output(&mut gpioa.crh).erase();
    let mut cs = gpioa.pa10.into_push_pull_output(&mut gpioa.crh).erase();
    cs.set_high().unwrap();
    let mut reset = gpioa.pa11.into_push_pull_output(&mut gpioa.crh);
    let backlight = gpioa.pa12.into_push_pull_output(&mut gpioa.crh);

    let iface = ParallelInterface::new(bus, a0, enable, cs).data_order(DataOrder::Reverse);
    let mut disp = Display::new(iface, backlight);

    // Resets the controller and shows the built-in logo with the backlight on.
    disp.init(Config::new(), &mut reset, &mut delay).unwrap();

    let settings = load_settings();
    let contrast = settings.contrast.max(CONTRAST_MIN).min(CONTRAST_MAX);
    disp.set_contrast(contrast).unwrap();

    if settings.show_splash {
        disp.load_image(&LOGO);
        disp.set_cursor(4, 48);
        disp.draw_message("press any key", true);
        disp.update().unwrap();
        delay.delay_ms(2000_u16);
    }

    let mut count: i32 = 0;
    loop {
        disp.clear();
        disp.draw_rect(0, 0, 127, 63, true, RectFlags::ROUNDED);
        disp.draw_line(2, 16, 125, 16, true);

        disp.set_char_size(CharSize::Normal);
        disp.set_cursor(4, 4);
        disp.write_string("Counter", true);

        disp.set_char_size(CharSize::Large);
        disp.set_cursor(30, 28);
        disp.write_int(count, true, true);

        disp.update().unwrap();
        count = if count >= 99_999 { -99_999 } else { count + 1 };
        delay.delay_ms(100_u16);
    }
}

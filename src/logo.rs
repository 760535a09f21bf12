//! The boot logo shown by `Display::init`, stored in frame buffer layout.

use crate::command::consts::BUFFER_SIZE;

pub static LOGO: [u8; BUFFER_SIZE] = *include_bytes!("logo.bin");

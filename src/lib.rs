//! Driver library for the Samsung KS0713 (and compatible ST7565-family) graphic LCD controller,
//! driving a 128x64 monochrome panel over the 8-bit parallel bus.
//!
//! All drawing happens in an in-memory frame buffer; `Display::update` sends it to the panel.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate embedded_hal as hal;


pub mod command;
pub mod config;
pub mod display;
pub mod font;
pub mod interface;
pub mod logo;

// Re-exports for primary API.
pub use crate::command::{consts, Bias, ComScanDirection, Command, Error, SegmentDirection};
pub use crate::config::Config;
pub use crate::display::{Canvas, Display, FrameBuffer, RectFlags};
pub use crate::font::CharSize;
pub use crate::interface::parallel::{DataOrder, ParallelInterface};
pub use crate::interface::DisplayInterface;
pub use crate::logo::LOGO;

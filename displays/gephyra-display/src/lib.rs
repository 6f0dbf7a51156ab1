//! SSD1306 display driver, framebuffer and fonts for Gephyra
//!
//! This crate provides:
//! - `Framebuffer`: a 128x64 page-organized pixel buffer with drawing
//!   primitives (pixels, lines, rectangles, triangles, circles, bitmaps)
//! - `Ssd1306`: the panel controller holding the framebuffer, text cursor
//!   and invert latch, speaking the command/data protocol over any
//!   `I2cMaster`
//! - Three bitmap fonts (7x10, 11x18, 16x26)
//!
//! # Architecture
//!
//! Drawing is purely in-memory; nothing touches the wire until
//! `update_screen` streams the framebuffer out page by page. The
//! controller never owns the bus: every method that talks to the panel
//! takes `&mut impl I2cMaster`, so one task can own the bus and
//! interleave display traffic with other devices on the same wire.

#![no_std]

pub mod fonts;
pub mod framebuffer;
pub mod ssd1306;

// Re-export key types
pub use fonts::{Font, FONT_11X18, FONT_16X26, FONT_7X10};
pub use framebuffer::{Color, Framebuffer};
pub use ssd1306::{DisplayError, Ssd1306, TextError, SSD1306_ADDR};

//! SSD1306 OLED display controller
//!
//! Owns the framebuffer, cursor and invert latch; every transaction goes
//! through the `I2cMaster` handed in per call, so one task can own the
//! bus and interleave display traffic with other devices.

use gephyra_hal::{BusError, I2cMaster};

use crate::fonts::Font;
use crate::framebuffer::{Color, Framebuffer, HEIGHT, PAGES, WIDTH};

/// Left-aligned I2C address of the panel (write bit clear).
pub const SSD1306_ADDR: u8 = 0x78;

/// Control byte announcing a command byte follows.
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing framebuffer data follows.
const CONTROL_DATA: u8 = 0x40;

/// Readiness probe before init: attempts and per-attempt budget.
const PROBE_TRIALS: u8 = 3;
const PROBE_TIMEOUT_MS: u32 = 10;

const DEFAULT_CONTRAST: u8 = 0xCF;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SCROLL_RIGHT: u8 = 0x26;
    pub const SCROLL_LEFT: u8 = 0x27;
    pub const SCROLL_DIAG_RIGHT: u8 = 0x29;
    pub const SCROLL_DIAG_LEFT: u8 = 0x2A;
    pub const SCROLL_DEACTIVATE: u8 = 0x2E;
    pub const SCROLL_ACTIVATE: u8 = 0x2F;
    pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
}

/// Errors from display operations that touch the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The readiness probe found no panel
    NotReady,
    /// A transaction failed on the wire
    Bus(BusError),
}

impl From<BusError> for DisplayError {
    fn from(err: BusError) -> Self {
        DisplayError::Bus(err)
    }
}

/// Text rendering errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextError {
    /// No room left below the cursor; carries the character that did
    /// not fit
    BufferExhausted(char),
}

#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    x: i16,
    y: i16,
}

/// SSD1306 driver state.
pub struct Ssd1306 {
    fb: Framebuffer,
    cursor: Cursor,
    inverted: bool,
    address: u8,
}

impl Ssd1306 {
    /// Driver for a panel at the usual address.
    pub const fn new() -> Self {
        Self::with_address(SSD1306_ADDR)
    }

    /// Driver for a panel strapped to a different address.
    pub const fn with_address(address: u8) -> Self {
        Self {
            fb: Framebuffer::new(),
            cursor: Cursor { x: 0, y: 0 },
            inverted: false,
            address,
        }
    }

    /// The in-memory frame contents.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Mutable framebuffer access for drawing.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.fb
    }

    /// Whether hardware inversion is currently selected.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Probe the panel, then run the power-up command sequence.
    ///
    /// The probe retries a few times so a panel still charging its
    /// supply rail after power-on gets a second chance.
    pub fn init<B: I2cMaster>(&mut self, bus: &mut B) -> Result<(), DisplayError> {
        bus.is_device_ready(self.address, PROBE_TRIALS, PROBE_TIMEOUT_MS)
            .map_err(|_| DisplayError::NotReady)?;

        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            0x02, // Page addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            DEFAULT_CONTRAST,
            cmd::SET_PRECHARGE,
            0x22,
            cmd::SET_VCOM_DETECT,
            0x20,
            cmd::RESUME_FROM_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(bus, c)?;
        }
        self.inverted = false;

        Ok(())
    }

    /// Send one command byte.
    fn command<B: I2cMaster>(&mut self, bus: &mut B, value: u8) -> Result<(), DisplayError> {
        bus.write(self.address, &[CONTROL_COMMAND, value])?;
        Ok(())
    }

    /// Set every pixel of the framebuffer. In-memory only.
    pub fn fill(&mut self, color: Color) {
        self.fb.fill(color);
    }

    /// All-black framebuffer. In-memory only.
    pub fn clear(&mut self) {
        self.fill(Color::Black);
    }

    /// Stream the framebuffer to the panel, one data burst per page
    /// behind its page/column address triplet.
    pub fn update_screen<B: I2cMaster>(&mut self, bus: &mut B) -> Result<(), DisplayError> {
        for page in 0..PAGES {
            self.command(bus, cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(bus, cmd::SET_LOW_COLUMN | 0x00)?;
            self.command(bus, cmd::SET_HIGH_COLUMN | 0x00)?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(self.fb.page(page));
            bus.write(self.address, &data)?;
        }

        Ok(())
    }

    /// Move the text cursor, clamped to the panel.
    pub fn goto_xy(&mut self, x: i16, y: i16) {
        self.cursor.x = x.clamp(0, WIDTH as i16 - 1);
        self.cursor.y = y.clamp(0, HEIGHT as i16 - 1);
    }

    /// Render one glyph at the cursor and advance it.
    ///
    /// A glyph crossing the right edge wraps to the start of the next
    /// text line; one crossing the bottom fails and leaves the cursor
    /// and framebuffer untouched. Characters outside the font are
    /// skipped.
    pub fn put_char(&mut self, ch: char, font: &Font, color: Color) -> Result<(), TextError> {
        let rows = match font.glyph(ch) {
            Some(rows) => rows,
            None => return Ok(()),
        };
        let w = font.width as i16;
        let h = font.height as i16;

        let mut x = self.cursor.x;
        let mut y = self.cursor.y;
        if x + w > WIDTH as i16 {
            x = 0;
            y += h;
        }
        if y + h > HEIGHT as i16 {
            return Err(TextError::BufferExhausted(ch));
        }

        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..w {
                // MSB-aligned row: bit 15 is the leftmost column
                let pixel = if (bits << col) & 0x8000 != 0 {
                    color
                } else {
                    color.inverse()
                };
                self.fb.draw_pixel(x + col, y + row as i16, pixel);
            }
        }

        self.cursor.x = x + w;
        self.cursor.y = y;
        Ok(())
    }

    /// Render a string, stopping at the first glyph that does not fit.
    pub fn put_str(&mut self, s: &str, font: &Font, color: Color) -> Result<(), TextError> {
        for ch in s.chars() {
            self.put_char(ch, font, color)?;
        }
        Ok(())
    }

    /// Select inverted or normal output.
    pub fn set_invert<B: I2cMaster>(
        &mut self,
        bus: &mut B,
        inverted: bool,
    ) -> Result<(), DisplayError> {
        self.command(
            bus,
            if inverted {
                cmd::SET_INVERSE
            } else {
                cmd::SET_NORMAL
            },
        )?;
        self.inverted = inverted;
        Ok(())
    }

    /// Flip between inverted and normal output.
    pub fn toggle_invert<B: I2cMaster>(&mut self, bus: &mut B) -> Result<(), DisplayError> {
        self.set_invert(bus, !self.inverted)
    }

    /// Continuous horizontal scroll to the right across a page range.
    pub fn scroll_right<B: I2cMaster>(
        &mut self,
        bus: &mut B,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), DisplayError> {
        self.horizontal_scroll(bus, cmd::SCROLL_RIGHT, start_page, end_page)
    }

    /// Continuous horizontal scroll to the left across a page range.
    pub fn scroll_left<B: I2cMaster>(
        &mut self,
        bus: &mut B,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), DisplayError> {
        self.horizontal_scroll(bus, cmd::SCROLL_LEFT, start_page, end_page)
    }

    fn horizontal_scroll<B: I2cMaster>(
        &mut self,
        bus: &mut B,
        opcode: u8,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), DisplayError> {
        self.command(bus, opcode)?;
        self.command(bus, 0x00)?; // Dummy
        self.command(bus, start_page)?;
        self.command(bus, 0x00)?; // Step every 5 frames
        self.command(bus, end_page)?;
        self.command(bus, 0x00)?; // Dummy
        self.command(bus, 0xFF)?; // Dummy
        self.command(bus, cmd::SCROLL_ACTIVATE)
    }

    /// Diagonal scroll to the right: horizontal plus one row of
    /// vertical drift per step.
    pub fn scroll_diag_right<B: I2cMaster>(
        &mut self,
        bus: &mut B,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), DisplayError> {
        self.diagonal_scroll(bus, cmd::SCROLL_DIAG_RIGHT, start_page, end_page)
    }

    /// Diagonal scroll to the left.
    pub fn scroll_diag_left<B: I2cMaster>(
        &mut self,
        bus: &mut B,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), DisplayError> {
        self.diagonal_scroll(bus, cmd::SCROLL_DIAG_LEFT, start_page, end_page)
    }

    fn diagonal_scroll<B: I2cMaster>(
        &mut self,
        bus: &mut B,
        opcode: u8,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), DisplayError> {
        self.command(bus, cmd::SET_VERTICAL_SCROLL_AREA)?;
        self.command(bus, 0x00)?; // No fixed rows on top
        self.command(bus, HEIGHT as u8)?; // Scroll area spans the panel
        self.command(bus, opcode)?;
        self.command(bus, 0x00)?; // Dummy
        self.command(bus, start_page)?;
        self.command(bus, 0x00)?; // Step every 5 frames
        self.command(bus, end_page)?;
        self.command(bus, 0x01)?; // One row of vertical drift
        self.command(bus, cmd::SCROLL_ACTIVATE)
    }

    /// Stop any active hardware scroll.
    pub fn stop_scroll<B: I2cMaster>(&mut self, bus: &mut B) -> Result<(), DisplayError> {
        self.command(bus, cmd::SCROLL_DEACTIVATE)
    }

    /// Set the output contrast (0-255).
    pub fn set_contrast<B: I2cMaster>(
        &mut self,
        bus: &mut B,
        value: u8,
    ) -> Result<(), DisplayError> {
        self.command(bus, cmd::SET_CONTRAST)?;
        self.command(bus, value)
    }

    /// Turn the panel on.
    pub fn display_on<B: I2cMaster>(&mut self, bus: &mut B) -> Result<(), DisplayError> {
        self.command(bus, cmd::DISPLAY_ON)
    }

    /// Put the panel to sleep; RAM contents survive.
    pub fn display_off<B: I2cMaster>(&mut self, bus: &mut B) -> Result<(), DisplayError> {
        self.command(bus, cmd::DISPLAY_OFF)
    }
}

impl Default for Ssd1306 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FONT_11X18, FONT_7X10};
    use gephyra_hal::BusPhase;
    use heapless::Vec;

    struct MockBus {
        writes: Vec<(u8, Vec<u8, 132>), 64>,
        probes: usize,
        present: bool,
        fail_writes: bool,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                probes: 0,
                present: true,
                fail_writes: false,
            }
        }

        fn absent() -> Self {
            Self {
                present: false,
                ..Self::new()
            }
        }

        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::new()
            }
        }

        fn commands(&self) -> impl Iterator<Item = u8> + '_ {
            self.writes
                .iter()
                .filter(|(_, bytes)| bytes.first() == Some(&0x00))
                .map(|(_, bytes)| bytes[1])
        }
    }

    impl I2cMaster for MockBus {
        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
            if self.fail_writes {
                return Err(BusError::Timeout(BusPhase::Address));
            }
            let mut bytes = Vec::new();
            bytes.extend_from_slice(data).unwrap();
            self.writes.push((address, bytes)).unwrap();
            Ok(())
        }

        fn read(&mut self, _address: u8, _buffer: &mut [u8]) -> Result<(), BusError> {
            Ok(())
        }

        fn is_device_ready(
            &mut self,
            _address: u8,
            _trials: u8,
            _timeout_ms: u32,
        ) -> Result<(), BusError> {
            self.probes += 1;
            if self.present {
                Ok(())
            } else {
                Err(BusError::NoAcknowledge)
            }
        }
    }

    #[test]
    fn test_init_probes_then_configures() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.init(&mut bus).unwrap();

        assert_eq!(bus.probes, 1);
        assert_eq!(bus.writes.len(), 25);
        // Every command is a two-byte write behind the command control
        // byte, to the panel address
        for (addr, bytes) in bus.writes.iter() {
            assert_eq!(*addr, SSD1306_ADDR);
            assert_eq!(bytes[0], 0x00);
            assert_eq!(bytes.len(), 2);
        }
        let sent: Vec<u8, 32> = bus.commands().collect();
        assert_eq!(sent[0], cmd::DISPLAY_OFF);
        assert_eq!(sent[sent.len() - 1], cmd::DISPLAY_ON);
    }

    #[test]
    fn test_init_missing_panel() {
        let mut bus = MockBus::absent();
        let mut display = Ssd1306::new();

        assert_eq!(display.init(&mut bus), Err(DisplayError::NotReady));
        assert!(bus.writes.is_empty());
    }

    #[test]
    fn test_update_screen_pages() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.update_screen(&mut bus).unwrap();

        // 3 address commands + 1 data burst per page
        assert_eq!(bus.writes.len(), 4 * 8);
        for page in 0..8 {
            let chunk = &bus.writes[page * 4..page * 4 + 4];
            assert_eq!(chunk[0].1[1], cmd::SET_PAGE_ADDR | page as u8);
            assert_eq!(chunk[1].1[1], cmd::SET_LOW_COLUMN);
            assert_eq!(chunk[2].1[1], cmd::SET_HIGH_COLUMN);

            let (addr, data) = &chunk[3];
            assert_eq!(*addr, SSD1306_ADDR);
            assert_eq!(data.len(), 129);
            assert_eq!(data[0], 0x40);
            // Fresh framebuffer streams as all zeroes
            assert!(data[1..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_fill_then_clear_streams_zeroes() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.fill(Color::White);
        display.clear();
        display.update_screen(&mut bus).unwrap();

        for (_, bytes) in bus.writes.iter().filter(|(_, b)| b[0] == 0x40) {
            assert!(bytes[1..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_failed_write_reports_bus_error() {
        let mut bus = MockBus::failing();
        let mut display = Ssd1306::new();

        display.fill(Color::White);
        let err = display.update_screen(&mut bus);

        assert_eq!(
            err,
            Err(DisplayError::Bus(BusError::Timeout(BusPhase::Address)))
        );
        // The framebuffer keeps its contents for a later retry
        assert!(display.framebuffer().data().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_text_confined_to_cells() {
        let mut display = Ssd1306::new();
        display.goto_xy(20, 0);
        display
            .put_str("HELLO12", &FONT_11X18, Color::White)
            .unwrap();

        // 7 glyphs, 11 columns each, from column 20
        let fb = display.framebuffer();
        for y in 0..64 {
            for x in 0..128 {
                if fb.pixel(x, y) == Some(Color::White) {
                    assert!((20..20 + 77).contains(&x), "ink at {},{}", x, y);
                    assert!((0..18).contains(&y), "ink at {},{}", x, y);
                }
            }
        }
    }

    #[test]
    fn test_put_char_advances_cursor() {
        let mut display = Ssd1306::new();
        display.goto_xy(0, 0);
        display.put_char('A', &FONT_7X10, Color::White).unwrap();
        display.put_char('B', &FONT_7X10, Color::White).unwrap();

        assert_eq!(display.cursor.x, 14);
        assert_eq!(display.cursor.y, 0);
    }

    #[test]
    fn test_put_char_paints_cell_background() {
        let mut display = Ssd1306::new();
        display.fill(Color::White);
        display.goto_xy(0, 0);
        display.put_char(' ', &FONT_7X10, Color::White).unwrap();

        // A white-on-black space burns a black 7x10 cell into the
        // white field
        let fb = display.framebuffer();
        for y in 0..10 {
            for x in 0..7 {
                assert_eq!(fb.pixel(x, y), Some(Color::Black));
            }
        }
        assert_eq!(fb.pixel(7, 0), Some(Color::White));
    }

    #[test]
    fn test_put_char_wraps_at_right_edge() {
        let mut display = Ssd1306::new();
        // 18 glyphs of width 7 pass 128, so the 19th starts line two
        display.goto_xy(126, 0);
        display.put_char('X', &FONT_7X10, Color::White).unwrap();

        assert_eq!(display.cursor.x, 7);
        assert_eq!(display.cursor.y, 10);
        assert_eq!(display.framebuffer().pixel(1, 11), Some(Color::White));
    }

    #[test]
    fn test_put_char_fails_when_buffer_exhausted() {
        let mut display = Ssd1306::new();
        display.goto_xy(120, 60);

        let err = display.put_char('Q', &FONT_11X18, Color::White);

        assert_eq!(err, Err(TextError::BufferExhausted('Q')));
        // Failure leaves cursor and framebuffer untouched
        assert_eq!(display.cursor.x, 120);
        assert_eq!(display.cursor.y, 60);
        assert!(display.framebuffer().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_put_str_reports_failing_character() {
        let mut display = Ssd1306::new();
        display.goto_xy(0, 50);

        let err = display.put_str("AB", &FONT_11X18, Color::White);
        assert_eq!(err, Err(TextError::BufferExhausted('A')));
    }

    #[test]
    fn test_put_char_skips_unprintable() {
        let mut display = Ssd1306::new();
        display.goto_xy(0, 0);
        display.put_char('\n', &FONT_7X10, Color::White).unwrap();

        assert_eq!(display.cursor.x, 0);
        assert!(display.framebuffer().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_goto_xy_clamps() {
        let mut display = Ssd1306::new();
        display.goto_xy(500, -3);
        assert_eq!(display.cursor.x, 127);
        assert_eq!(display.cursor.y, 0);
    }

    #[test]
    fn test_toggle_invert_tracks_state() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.toggle_invert(&mut bus).unwrap();
        assert!(display.is_inverted());
        display.toggle_invert(&mut bus).unwrap();
        assert!(!display.is_inverted());

        let sent: Vec<u8, 4> = bus.commands().collect();
        assert_eq!(&sent[..], &[cmd::SET_INVERSE, cmd::SET_NORMAL]);
    }

    #[test]
    fn test_set_invert_failure_keeps_state() {
        let mut bus = MockBus::failing();
        let mut display = Ssd1306::new();

        assert!(display.set_invert(&mut bus, true).is_err());
        assert!(!display.is_inverted());
    }

    #[test]
    fn test_scroll_right_sequence() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.scroll_right(&mut bus, 0, 7).unwrap();

        let sent: Vec<u8, 16> = bus.commands().collect();
        assert_eq!(
            &sent[..],
            &[
                cmd::SCROLL_RIGHT,
                0x00,
                0x00,
                0x00,
                0x07,
                0x00,
                0xFF,
                cmd::SCROLL_ACTIVATE
            ]
        );
    }

    #[test]
    fn test_diagonal_scroll_sequence() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.scroll_diag_left(&mut bus, 1, 5).unwrap();

        let sent: Vec<u8, 16> = bus.commands().collect();
        assert_eq!(
            &sent[..],
            &[
                cmd::SET_VERTICAL_SCROLL_AREA,
                0x00,
                0x40,
                cmd::SCROLL_DIAG_LEFT,
                0x00,
                0x01,
                0x00,
                0x05,
                0x01,
                cmd::SCROLL_ACTIVATE
            ]
        );
    }

    #[test]
    fn test_stop_scroll() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.stop_scroll(&mut bus).unwrap();

        let sent: Vec<u8, 4> = bus.commands().collect();
        assert_eq!(&sent[..], &[cmd::SCROLL_DEACTIVATE]);
    }

    #[test]
    fn test_set_contrast() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.set_contrast(&mut bus, 0x7F).unwrap();

        let sent: Vec<u8, 4> = bus.commands().collect();
        assert_eq!(&sent[..], &[cmd::SET_CONTRAST, 0x7F]);
    }

    #[test]
    fn test_display_power() {
        let mut bus = MockBus::new();
        let mut display = Ssd1306::new();

        display.display_off(&mut bus).unwrap();
        display.display_on(&mut bus).unwrap();

        let sent: Vec<u8, 4> = bus.commands().collect();
        assert_eq!(&sent[..], &[cmd::DISPLAY_OFF, cmd::DISPLAY_ON]);
    }
}

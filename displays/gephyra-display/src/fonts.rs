//! Fixed-cell bitmap fonts
//!
//! Three sizes sharing one layout: per glyph, `height` rows of MSB
//! aligned bits in a `u16`, covering printable ASCII 0x20..=0x7E. The
//! larger sizes are integer-scaled from the same 5x7 base face.

/// A fixed-cell bitmap font.
pub struct Font {
    /// Glyph cell width in pixels
    pub width: u8,
    /// Glyph cell height in pixels
    pub height: u8,
    data: &'static [u16],
}

impl Font {
    /// Glyph rows for a printable ASCII character, `None` otherwise.
    pub fn glyph(&self, ch: char) -> Option<&'static [u16]> {
        let code = ch as u32;
        if !(0x20..=0x7E).contains(&code) {
            return None;
        }
        let height = self.height as usize;
        let start = (code as usize - 0x20) * height;
        let data: &'static [u16] = self.data;
        Some(&data[start..start + height])
    }
}

/// 7x10: compact status text
pub static FONT_7X10: Font = Font {
    width: 7,
    height: 10,
    data: &FONT_7X10_DATA,
};

/// 11x18: headings
pub static FONT_11X18: Font = Font {
    width: 11,
    height: 18,
    data: &FONT_11X18_DATA,
};

/// 16x26: large numerals and banners
pub static FONT_16X26: Font = Font {
    width: 16,
    height: 26,
    data: &FONT_16X26_DATA,
};

#[rustfmt::skip]
static FONT_7X10_DATA: [u16; 950] = [
    // 0x20 ' '
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x21 '!'
    0x0000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x0000, 0x1000,
    0x0000, 0x0000,
    // 0x22 '"'
    0x0000, 0x2800, 0x2800, 0x2800, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x23 '#'
    0x0000, 0x2800, 0x2800, 0x7C00, 0x2800, 0x7C00, 0x2800, 0x2800,
    0x0000, 0x0000,
    // 0x24 '$'
    0x0000, 0x1000, 0x3C00, 0x5000, 0x3800, 0x1400, 0x7800, 0x1000,
    0x0000, 0x0000,
    // 0x25 '%'
    0x0000, 0x6000, 0x6400, 0x0800, 0x1000, 0x2000, 0x4C00, 0x0C00,
    0x0000, 0x0000,
    // 0x26 '&'
    0x0000, 0x3000, 0x4800, 0x5000, 0x2000, 0x5400, 0x4800, 0x3400,
    0x0000, 0x0000,
    // 0x27 "'"
    0x0000, 0x3000, 0x1000, 0x2000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x28 '('
    0x0000, 0x0800, 0x1000, 0x2000, 0x2000, 0x2000, 0x1000, 0x0800,
    0x0000, 0x0000,
    // 0x29 ')'
    0x0000, 0x2000, 0x1000, 0x0800, 0x0800, 0x0800, 0x1000, 0x2000,
    0x0000, 0x0000,
    // 0x2A '*'
    0x0000, 0x0000, 0x1000, 0x5400, 0x3800, 0x5400, 0x1000, 0x0000,
    0x0000, 0x0000,
    // 0x2B '+'
    0x0000, 0x0000, 0x1000, 0x1000, 0x7C00, 0x1000, 0x1000, 0x0000,
    0x0000, 0x0000,
    // 0x2C ','
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3000, 0x1000, 0x2000,
    0x0000, 0x0000,
    // 0x2D '-'
    0x0000, 0x0000, 0x0000, 0x0000, 0x7C00, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x2E '.'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3000, 0x3000,
    0x0000, 0x0000,
    // 0x2F '/'
    0x0000, 0x0000, 0x0400, 0x0800, 0x1000, 0x2000, 0x4000, 0x0000,
    0x0000, 0x0000,
    // 0x30 '0'
    0x0000, 0x3800, 0x4400, 0x4C00, 0x5400, 0x6400, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x31 '1'
    0x0000, 0x1000, 0x3000, 0x1000, 0x1000, 0x1000, 0x1000, 0x3800,
    0x0000, 0x0000,
    // 0x32 '2'
    0x0000, 0x3800, 0x4400, 0x0400, 0x0800, 0x1000, 0x2000, 0x7C00,
    0x0000, 0x0000,
    // 0x33 '3'
    0x0000, 0x7C00, 0x0800, 0x1000, 0x0800, 0x0400, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x34 '4'
    0x0000, 0x0800, 0x1800, 0x2800, 0x4800, 0x7C00, 0x0800, 0x0800,
    0x0000, 0x0000,
    // 0x35 '5'
    0x0000, 0x7C00, 0x4000, 0x7800, 0x0400, 0x0400, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x36 '6'
    0x0000, 0x1800, 0x2000, 0x4000, 0x7800, 0x4400, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x37 '7'
    0x0000, 0x7C00, 0x0400, 0x0800, 0x1000, 0x2000, 0x2000, 0x2000,
    0x0000, 0x0000,
    // 0x38 '8'
    0x0000, 0x3800, 0x4400, 0x4400, 0x3800, 0x4400, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x39 '9'
    0x0000, 0x3800, 0x4400, 0x4400, 0x3C00, 0x0400, 0x0800, 0x3000,
    0x0000, 0x0000,
    // 0x3A ':'
    0x0000, 0x0000, 0x3000, 0x3000, 0x0000, 0x3000, 0x3000, 0x0000,
    0x0000, 0x0000,
    // 0x3B ';'
    0x0000, 0x0000, 0x3000, 0x3000, 0x0000, 0x3000, 0x1000, 0x2000,
    0x0000, 0x0000,
    // 0x3C '<'
    0x0000, 0x0800, 0x1000, 0x2000, 0x4000, 0x2000, 0x1000, 0x0800,
    0x0000, 0x0000,
    // 0x3D '='
    0x0000, 0x0000, 0x0000, 0x7C00, 0x0000, 0x7C00, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x3E '>'
    0x0000, 0x2000, 0x1000, 0x0800, 0x0400, 0x0800, 0x1000, 0x2000,
    0x0000, 0x0000,
    // 0x3F '?'
    0x0000, 0x3800, 0x4400, 0x0400, 0x0800, 0x1000, 0x0000, 0x1000,
    0x0000, 0x0000,
    // 0x40 '@'
    0x0000, 0x3800, 0x4400, 0x0400, 0x3400, 0x5400, 0x5400, 0x3800,
    0x0000, 0x0000,
    // 0x41 'A'
    0x0000, 0x3800, 0x4400, 0x4400, 0x4400, 0x7C00, 0x4400, 0x4400,
    0x0000, 0x0000,
    // 0x42 'B'
    0x0000, 0x7800, 0x4400, 0x4400, 0x7800, 0x4400, 0x4400, 0x7800,
    0x0000, 0x0000,
    // 0x43 'C'
    0x0000, 0x3800, 0x4400, 0x4000, 0x4000, 0x4000, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x44 'D'
    0x0000, 0x7000, 0x4800, 0x4400, 0x4400, 0x4400, 0x4800, 0x7000,
    0x0000, 0x0000,
    // 0x45 'E'
    0x0000, 0x7C00, 0x4000, 0x4000, 0x7800, 0x4000, 0x4000, 0x7C00,
    0x0000, 0x0000,
    // 0x46 'F'
    0x0000, 0x7C00, 0x4000, 0x4000, 0x7800, 0x4000, 0x4000, 0x4000,
    0x0000, 0x0000,
    // 0x47 'G'
    0x0000, 0x3800, 0x4400, 0x4000, 0x5C00, 0x4400, 0x4400, 0x3C00,
    0x0000, 0x0000,
    // 0x48 'H'
    0x0000, 0x4400, 0x4400, 0x4400, 0x7C00, 0x4400, 0x4400, 0x4400,
    0x0000, 0x0000,
    // 0x49 'I'
    0x0000, 0x3800, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x3800,
    0x0000, 0x0000,
    // 0x4A 'J'
    0x0000, 0x1C00, 0x0800, 0x0800, 0x0800, 0x0800, 0x4800, 0x3000,
    0x0000, 0x0000,
    // 0x4B 'K'
    0x0000, 0x4400, 0x4800, 0x5000, 0x6000, 0x5000, 0x4800, 0x4400,
    0x0000, 0x0000,
    // 0x4C 'L'
    0x0000, 0x4000, 0x4000, 0x4000, 0x4000, 0x4000, 0x4000, 0x7C00,
    0x0000, 0x0000,
    // 0x4D 'M'
    0x0000, 0x4400, 0x6C00, 0x5400, 0x5400, 0x4400, 0x4400, 0x4400,
    0x0000, 0x0000,
    // 0x4E 'N'
    0x0000, 0x4400, 0x4400, 0x6400, 0x5400, 0x4C00, 0x4400, 0x4400,
    0x0000, 0x0000,
    // 0x4F 'O'
    0x0000, 0x3800, 0x4400, 0x4400, 0x4400, 0x4400, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x50 'P'
    0x0000, 0x7800, 0x4400, 0x4400, 0x7800, 0x4000, 0x4000, 0x4000,
    0x0000, 0x0000,
    // 0x51 'Q'
    0x0000, 0x3800, 0x4400, 0x4400, 0x4400, 0x5400, 0x4800, 0x3400,
    0x0000, 0x0000,
    // 0x52 'R'
    0x0000, 0x7800, 0x4400, 0x4400, 0x7800, 0x5000, 0x4800, 0x4400,
    0x0000, 0x0000,
    // 0x53 'S'
    0x0000, 0x3C00, 0x4000, 0x4000, 0x3800, 0x0400, 0x0400, 0x7800,
    0x0000, 0x0000,
    // 0x54 'T'
    0x0000, 0x7C00, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000,
    0x0000, 0x0000,
    // 0x55 'U'
    0x0000, 0x4400, 0x4400, 0x4400, 0x4400, 0x4400, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x56 'V'
    0x0000, 0x4400, 0x4400, 0x4400, 0x4400, 0x4400, 0x2800, 0x1000,
    0x0000, 0x0000,
    // 0x57 'W'
    0x0000, 0x4400, 0x4400, 0x4400, 0x5400, 0x5400, 0x5400, 0x2800,
    0x0000, 0x0000,
    // 0x58 'X'
    0x0000, 0x4400, 0x4400, 0x2800, 0x1000, 0x2800, 0x4400, 0x4400,
    0x0000, 0x0000,
    // 0x59 'Y'
    0x0000, 0x4400, 0x4400, 0x4400, 0x2800, 0x1000, 0x1000, 0x1000,
    0x0000, 0x0000,
    // 0x5A 'Z'
    0x0000, 0x7C00, 0x0400, 0x0800, 0x1000, 0x2000, 0x4000, 0x7C00,
    0x0000, 0x0000,
    // 0x5B '['
    0x0000, 0x3800, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x3800,
    0x0000, 0x0000,
    // 0x5C '\'
    0x0000, 0x0000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0400, 0x0000,
    0x0000, 0x0000,
    // 0x5D ']'
    0x0000, 0x3800, 0x0800, 0x0800, 0x0800, 0x0800, 0x0800, 0x3800,
    0x0000, 0x0000,
    // 0x5E '^'
    0x0000, 0x1000, 0x2800, 0x4400, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x5F '_'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7C00,
    0x0000, 0x0000,
    // 0x60 '`'
    0x0000, 0x2000, 0x1000, 0x0800, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x61 'a'
    0x0000, 0x0000, 0x0000, 0x3800, 0x0400, 0x3C00, 0x4400, 0x3C00,
    0x0000, 0x0000,
    // 0x62 'b'
    0x0000, 0x4000, 0x4000, 0x5800, 0x6400, 0x4400, 0x4400, 0x7800,
    0x0000, 0x0000,
    // 0x63 'c'
    0x0000, 0x0000, 0x0000, 0x3800, 0x4000, 0x4000, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x64 'd'
    0x0000, 0x0400, 0x0400, 0x3400, 0x4C00, 0x4400, 0x4400, 0x3C00,
    0x0000, 0x0000,
    // 0x65 'e'
    0x0000, 0x0000, 0x0000, 0x3800, 0x4400, 0x7C00, 0x4000, 0x3800,
    0x0000, 0x0000,
    // 0x66 'f'
    0x0000, 0x1800, 0x2400, 0x2000, 0x7000, 0x2000, 0x2000, 0x2000,
    0x0000, 0x0000,
    // 0x67 'g'
    0x0000, 0x0000, 0x3C00, 0x4400, 0x4400, 0x3C00, 0x0400, 0x3800,
    0x0000, 0x0000,
    // 0x68 'h'
    0x0000, 0x4000, 0x4000, 0x5800, 0x6400, 0x4400, 0x4400, 0x4400,
    0x0000, 0x0000,
    // 0x69 'i'
    0x0000, 0x1000, 0x0000, 0x3000, 0x1000, 0x1000, 0x1000, 0x3800,
    0x0000, 0x0000,
    // 0x6A 'j'
    0x0000, 0x0800, 0x0000, 0x1800, 0x0800, 0x0800, 0x4800, 0x3000,
    0x0000, 0x0000,
    // 0x6B 'k'
    0x0000, 0x4000, 0x4000, 0x4800, 0x5000, 0x6000, 0x5000, 0x4800,
    0x0000, 0x0000,
    // 0x6C 'l'
    0x0000, 0x3000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x3800,
    0x0000, 0x0000,
    // 0x6D 'm'
    0x0000, 0x0000, 0x0000, 0x6800, 0x5400, 0x5400, 0x4400, 0x4400,
    0x0000, 0x0000,
    // 0x6E 'n'
    0x0000, 0x0000, 0x0000, 0x5800, 0x6400, 0x4400, 0x4400, 0x4400,
    0x0000, 0x0000,
    // 0x6F 'o'
    0x0000, 0x0000, 0x0000, 0x3800, 0x4400, 0x4400, 0x4400, 0x3800,
    0x0000, 0x0000,
    // 0x70 'p'
    0x0000, 0x0000, 0x0000, 0x7800, 0x4400, 0x7800, 0x4000, 0x4000,
    0x0000, 0x0000,
    // 0x71 'q'
    0x0000, 0x0000, 0x0000, 0x3400, 0x4C00, 0x3C00, 0x0400, 0x0400,
    0x0000, 0x0000,
    // 0x72 'r'
    0x0000, 0x0000, 0x0000, 0x5800, 0x6400, 0x4000, 0x4000, 0x4000,
    0x0000, 0x0000,
    // 0x73 's'
    0x0000, 0x0000, 0x0000, 0x3800, 0x4000, 0x3800, 0x0400, 0x7800,
    0x0000, 0x0000,
    // 0x74 't'
    0x0000, 0x2000, 0x2000, 0x7000, 0x2000, 0x2000, 0x2400, 0x1800,
    0x0000, 0x0000,
    // 0x75 'u'
    0x0000, 0x0000, 0x0000, 0x4400, 0x4400, 0x4400, 0x4C00, 0x3400,
    0x0000, 0x0000,
    // 0x76 'v'
    0x0000, 0x0000, 0x0000, 0x4400, 0x4400, 0x4400, 0x2800, 0x1000,
    0x0000, 0x0000,
    // 0x77 'w'
    0x0000, 0x0000, 0x0000, 0x4400, 0x4400, 0x5400, 0x5400, 0x2800,
    0x0000, 0x0000,
    // 0x78 'x'
    0x0000, 0x0000, 0x0000, 0x4400, 0x2800, 0x1000, 0x2800, 0x4400,
    0x0000, 0x0000,
    // 0x79 'y'
    0x0000, 0x0000, 0x0000, 0x4400, 0x4400, 0x3C00, 0x0400, 0x3800,
    0x0000, 0x0000,
    // 0x7A 'z'
    0x0000, 0x0000, 0x0000, 0x7C00, 0x0800, 0x1000, 0x2000, 0x7C00,
    0x0000, 0x0000,
    // 0x7B '{'
    0x0000, 0x0800, 0x1000, 0x1000, 0x2000, 0x1000, 0x1000, 0x0800,
    0x0000, 0x0000,
    // 0x7C '|'
    0x0000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000,
    0x0000, 0x0000,
    // 0x7D '}'
    0x0000, 0x2000, 0x1000, 0x1000, 0x0800, 0x1000, 0x1000, 0x2000,
    0x0000, 0x0000,
    // 0x7E '~'
    0x0000, 0x0000, 0x0000, 0x2000, 0x5400, 0x0800, 0x0000, 0x0000,
    0x0000, 0x0000,
];

#[rustfmt::skip]
static FONT_11X18_DATA: [u16; 1710] = [
    // 0x20 ' '
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x21 '!'
    0x0000, 0x0000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0C00, 0x0C00,
    0x0000, 0x0000,
    // 0x22 '"'
    0x0000, 0x0000, 0x3300, 0x3300, 0x3300, 0x3300, 0x3300, 0x3300,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x23 '#'
    0x0000, 0x0000, 0x3300, 0x3300, 0x3300, 0x3300, 0xFFC0, 0xFFC0,
    0x3300, 0x3300, 0xFFC0, 0xFFC0, 0x3300, 0x3300, 0x3300, 0x3300,
    0x0000, 0x0000,
    // 0x24 '$'
    0x0000, 0x0000, 0x0C00, 0x0C00, 0x3FC0, 0x3FC0, 0xCC00, 0xCC00,
    0x3F00, 0x3F00, 0x0CC0, 0x0CC0, 0xFF00, 0xFF00, 0x0C00, 0x0C00,
    0x0000, 0x0000,
    // 0x25 '%'
    0x0000, 0x0000, 0xF000, 0xF000, 0xF0C0, 0xF0C0, 0x0300, 0x0300,
    0x0C00, 0x0C00, 0x3000, 0x3000, 0xC3C0, 0xC3C0, 0x03C0, 0x03C0,
    0x0000, 0x0000,
    // 0x26 '&'
    0x0000, 0x0000, 0x3C00, 0x3C00, 0xC300, 0xC300, 0xCC00, 0xCC00,
    0x3000, 0x3000, 0xCCC0, 0xCCC0, 0xC300, 0xC300, 0x3CC0, 0x3CC0,
    0x0000, 0x0000,
    // 0x27 "'"
    0x0000, 0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x3000, 0x3000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x28 '('
    0x0000, 0x0000, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000,
    0x3000, 0x3000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300,
    0x0000, 0x0000,
    // 0x29 ')'
    0x0000, 0x0000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300,
    0x0300, 0x0300, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000,
    0x0000, 0x0000,
    // 0x2A '*'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0C00, 0x0C00, 0xCCC0, 0xCCC0,
    0x3F00, 0x3F00, 0xCCC0, 0xCCC0, 0x0C00, 0x0C00, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x2B '+'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0xFFC0, 0xFFC0, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x2C ','
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x3000, 0x3000,
    0x0000, 0x0000,
    // 0x2D '-'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x2E '.'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00,
    0x0000, 0x0000,
    // 0x2F '/'
    0x0000, 0x0000, 0x0000, 0x0000, 0x00C0, 0x00C0, 0x0300, 0x0300,
    0x0C00, 0x0C00, 0x3000, 0x3000, 0xC000, 0xC000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x30 '0'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC3C0, 0xC3C0,
    0xCCC0, 0xCCC0, 0xF0C0, 0xF0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x31 '1'
    0x0000, 0x0000, 0x0C00, 0x0C00, 0x3C00, 0x3C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x32 '2'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0x00C0, 0x00C0,
    0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0xFFC0, 0xFFC0,
    0x0000, 0x0000,
    // 0x33 '3'
    0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0300, 0x0300, 0x0C00, 0x0C00,
    0x0300, 0x0300, 0x00C0, 0x00C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x34 '4'
    0x0000, 0x0000, 0x0300, 0x0300, 0x0F00, 0x0F00, 0x3300, 0x3300,
    0xC300, 0xC300, 0xFFC0, 0xFFC0, 0x0300, 0x0300, 0x0300, 0x0300,
    0x0000, 0x0000,
    // 0x35 '5'
    0x0000, 0x0000, 0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xFF00, 0xFF00,
    0x00C0, 0x00C0, 0x00C0, 0x00C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x36 '6'
    0x0000, 0x0000, 0x0F00, 0x0F00, 0x3000, 0x3000, 0xC000, 0xC000,
    0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x37 '7'
    0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x00C0, 0x00C0, 0x0300, 0x0300,
    0x0C00, 0x0C00, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000,
    0x0000, 0x0000,
    // 0x38 '8'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x39 '9'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x3FC0, 0x3FC0, 0x00C0, 0x00C0, 0x0300, 0x0300, 0x3C00, 0x3C00,
    0x0000, 0x0000,
    // 0x3A ':'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00,
    0x0000, 0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x3B ';'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3C00, 0x3C00, 0x3C00, 0x3C00,
    0x0000, 0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x3000, 0x3000,
    0x0000, 0x0000,
    // 0x3C '<'
    0x0000, 0x0000, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000,
    0xC000, 0xC000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300,
    0x0000, 0x0000,
    // 0x3D '='
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0,
    0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x3E '>'
    0x0000, 0x0000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300,
    0x00C0, 0x00C0, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000,
    0x0000, 0x0000,
    // 0x3F '?'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0x00C0, 0x00C0,
    0x0300, 0x0300, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0C00, 0x0C00,
    0x0000, 0x0000,
    // 0x40 '@'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0x00C0, 0x00C0,
    0x3CC0, 0x3CC0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x41 'A'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xFFC0, 0xFFC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x42 'B'
    0x0000, 0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00,
    0x0000, 0x0000,
    // 0x43 'C'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC000, 0xC000,
    0xC000, 0xC000, 0xC000, 0xC000, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x44 'D'
    0x0000, 0x0000, 0xFC00, 0xFC00, 0xC300, 0xC300, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC300, 0xC300, 0xFC00, 0xFC00,
    0x0000, 0x0000,
    // 0x45 'E'
    0x0000, 0x0000, 0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xC000, 0xC000,
    0xFF00, 0xFF00, 0xC000, 0xC000, 0xC000, 0xC000, 0xFFC0, 0xFFC0,
    0x0000, 0x0000,
    // 0x46 'F'
    0x0000, 0x0000, 0xFFC0, 0xFFC0, 0xC000, 0xC000, 0xC000, 0xC000,
    0xFF00, 0xFF00, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000,
    0x0000, 0x0000,
    // 0x47 'G'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC000, 0xC000,
    0xCFC0, 0xCFC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0,
    0x0000, 0x0000,
    // 0x48 'H'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xFFC0, 0xFFC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x49 'I'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x4A 'J'
    0x0000, 0x0000, 0x0FC0, 0x0FC0, 0x0300, 0x0300, 0x0300, 0x0300,
    0x0300, 0x0300, 0x0300, 0x0300, 0xC300, 0xC300, 0x3C00, 0x3C00,
    0x0000, 0x0000,
    // 0x4B 'K'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC300, 0xC300, 0xCC00, 0xCC00,
    0xF000, 0xF000, 0xCC00, 0xCC00, 0xC300, 0xC300, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x4C 'L'
    0x0000, 0x0000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000,
    0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xFFC0, 0xFFC0,
    0x0000, 0x0000,
    // 0x4D 'M'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xF3C0, 0xF3C0, 0xCCC0, 0xCCC0,
    0xCCC0, 0xCCC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x4E 'N'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xF0C0, 0xF0C0,
    0xCCC0, 0xCCC0, 0xC3C0, 0xC3C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x4F 'O'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x50 'P'
    0x0000, 0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xFF00, 0xFF00, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000,
    0x0000, 0x0000,
    // 0x51 'Q'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xCCC0, 0xCCC0, 0xC300, 0xC300, 0x3CC0, 0x3CC0,
    0x0000, 0x0000,
    // 0x52 'R'
    0x0000, 0x0000, 0xFF00, 0xFF00, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xFF00, 0xFF00, 0xCC00, 0xCC00, 0xC300, 0xC300, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x53 'S'
    0x0000, 0x0000, 0x3FC0, 0x3FC0, 0xC000, 0xC000, 0xC000, 0xC000,
    0x3F00, 0x3F00, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0xFF00, 0xFF00,
    0x0000, 0x0000,
    // 0x54 'T'
    0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0000, 0x0000,
    // 0x55 'U'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x56 'V'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00,
    0x0000, 0x0000,
    // 0x57 'W'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0x3300, 0x3300,
    0x0000, 0x0000,
    // 0x58 'X'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300,
    0x0C00, 0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x59 'Y'
    0x0000, 0x0000, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x3300, 0x3300, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0000, 0x0000,
    // 0x5A 'Z'
    0x0000, 0x0000, 0xFFC0, 0xFFC0, 0x00C0, 0x00C0, 0x0300, 0x0300,
    0x0C00, 0x0C00, 0x3000, 0x3000, 0xC000, 0xC000, 0xFFC0, 0xFFC0,
    0x0000, 0x0000,
    // 0x5B '['
    0x0000, 0x0000, 0x3F00, 0x3F00, 0x3000, 0x3000, 0x3000, 0x3000,
    0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x5C '\'
    0x0000, 0x0000, 0x0000, 0x0000, 0xC000, 0xC000, 0x3000, 0x3000,
    0x0C00, 0x0C00, 0x0300, 0x0300, 0x00C0, 0x00C0, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x5D ']'
    0x0000, 0x0000, 0x3F00, 0x3F00, 0x0300, 0x0300, 0x0300, 0x0300,
    0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x5E '^'
    0x0000, 0x0000, 0x0C00, 0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x5F '_'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0,
    0x0000, 0x0000,
    // 0x60 '`'
    0x0000, 0x0000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0300, 0x0300,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x61 'a'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00,
    0x00C0, 0x00C0, 0x3FC0, 0x3FC0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0,
    0x0000, 0x0000,
    // 0x62 'b'
    0x0000, 0x0000, 0xC000, 0xC000, 0xC000, 0xC000, 0xCF00, 0xCF00,
    0xF0C0, 0xF0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xFF00, 0xFF00,
    0x0000, 0x0000,
    // 0x63 'c'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00,
    0xC000, 0xC000, 0xC000, 0xC000, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x64 'd'
    0x0000, 0x0000, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x3CC0, 0x3CC0,
    0xC3C0, 0xC3C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0,
    0x0000, 0x0000,
    // 0x65 'e'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00,
    0xC0C0, 0xC0C0, 0xFFC0, 0xFFC0, 0xC000, 0xC000, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x66 'f'
    0x0000, 0x0000, 0x0F00, 0x0F00, 0x30C0, 0x30C0, 0x3000, 0x3000,
    0xFC00, 0xFC00, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000,
    0x0000, 0x0000,
    // 0x67 'g'
    0x0000, 0x0000, 0x0000, 0x0000, 0x3FC0, 0x3FC0, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x00C0, 0x00C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x68 'h'
    0x0000, 0x0000, 0xC000, 0xC000, 0xC000, 0xC000, 0xCF00, 0xCF00,
    0xF0C0, 0xF0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x69 'i'
    0x0000, 0x0000, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x3C00, 0x3C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x6A 'j'
    0x0000, 0x0000, 0x0300, 0x0300, 0x0000, 0x0000, 0x0F00, 0x0F00,
    0x0300, 0x0300, 0x0300, 0x0300, 0xC300, 0xC300, 0x3C00, 0x3C00,
    0x0000, 0x0000,
    // 0x6B 'k'
    0x0000, 0x0000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC300, 0xC300,
    0xCC00, 0xCC00, 0xF000, 0xF000, 0xCC00, 0xCC00, 0xC300, 0xC300,
    0x0000, 0x0000,
    // 0x6C 'l'
    0x0000, 0x0000, 0x3C00, 0x3C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x6D 'm'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xF300, 0xF300,
    0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x6E 'n'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xCF00, 0xCF00,
    0xF0C0, 0xF0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x6F 'o'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x70 'p'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFF00, 0xFF00,
    0xC0C0, 0xC0C0, 0xFF00, 0xFF00, 0xC000, 0xC000, 0xC000, 0xC000,
    0x0000, 0x0000,
    // 0x71 'q'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3CC0, 0x3CC0,
    0xC3C0, 0xC3C0, 0x3FC0, 0x3FC0, 0x00C0, 0x00C0, 0x00C0, 0x00C0,
    0x0000, 0x0000,
    // 0x72 'r'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xCF00, 0xCF00,
    0xF0C0, 0xF0C0, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000, 0xC000,
    0x0000, 0x0000,
    // 0x73 's'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3F00, 0x3F00,
    0xC000, 0xC000, 0x3F00, 0x3F00, 0x00C0, 0x00C0, 0xFF00, 0xFF00,
    0x0000, 0x0000,
    // 0x74 't'
    0x0000, 0x0000, 0x3000, 0x3000, 0x3000, 0x3000, 0xFC00, 0xFC00,
    0x3000, 0x3000, 0x3000, 0x3000, 0x30C0, 0x30C0, 0x0F00, 0x0F00,
    0x0000, 0x0000,
    // 0x75 'u'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0xC3C0, 0xC3C0, 0x3CC0, 0x3CC0,
    0x0000, 0x0000,
    // 0x76 'v'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xC0C0, 0xC0C0, 0x3300, 0x3300, 0x0C00, 0x0C00,
    0x0000, 0x0000,
    // 0x77 'w'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0xCCC0, 0xCCC0, 0xCCC0, 0xCCC0, 0x3300, 0x3300,
    0x0000, 0x0000,
    // 0x78 'x'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0,
    0x3300, 0x3300, 0x0C00, 0x0C00, 0x3300, 0x3300, 0xC0C0, 0xC0C0,
    0x0000, 0x0000,
    // 0x79 'y'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xC0C0, 0xC0C0,
    0xC0C0, 0xC0C0, 0x3FC0, 0x3FC0, 0x00C0, 0x00C0, 0x3F00, 0x3F00,
    0x0000, 0x0000,
    // 0x7A 'z'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFC0, 0xFFC0,
    0x0300, 0x0300, 0x0C00, 0x0C00, 0x3000, 0x3000, 0xFFC0, 0xFFC0,
    0x0000, 0x0000,
    // 0x7B '{'
    0x0000, 0x0000, 0x0300, 0x0300, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x3000, 0x3000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0300, 0x0300,
    0x0000, 0x0000,
    // 0x7C '|'
    0x0000, 0x0000, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0000, 0x0000,
    // 0x7D '}'
    0x0000, 0x0000, 0x3000, 0x3000, 0x0C00, 0x0C00, 0x0C00, 0x0C00,
    0x0300, 0x0300, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3000, 0x3000,
    0x0000, 0x0000,
    // 0x7E '~'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3000, 0x3000,
    0xCCC0, 0xCCC0, 0x0300, 0x0300, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
];

#[rustfmt::skip]
static FONT_16X26_DATA: [u16; 2470] = [
    // 0x20 ' '
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x21 '!'
    0x0000, 0x0000, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0000, 0x0000, 0x0000, 0x0380, 0x0380, 0x0380, 0x0000,
    0x0000, 0x0000,
    // 0x22 '"'
    0x0000, 0x0000, 0x1C70, 0x1C70, 0x1C70, 0x1C70, 0x1C70, 0x1C70,
    0x1C70, 0x1C70, 0x1C70, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x23 '#'
    0x0000, 0x0000, 0x1C70, 0x1C70, 0x1C70, 0x1C70, 0x1C70, 0x1C70,
    0xFFFE, 0xFFFE, 0xFFFE, 0x1C70, 0x1C70, 0x1C70, 0xFFFE, 0xFFFE,
    0xFFFE, 0x1C70, 0x1C70, 0x1C70, 0x1C70, 0x1C70, 0x1C70, 0x0000,
    0x0000, 0x0000,
    // 0x24 '$'
    0x0000, 0x0000, 0x0380, 0x0380, 0x0380, 0x1FFE, 0x1FFE, 0x1FFE,
    0xE380, 0xE380, 0xE380, 0x1FF0, 0x1FF0, 0x1FF0, 0x038E, 0x038E,
    0x038E, 0xFFF0, 0xFFF0, 0xFFF0, 0x0380, 0x0380, 0x0380, 0x0000,
    0x0000, 0x0000,
    // 0x25 '%'
    0x0000, 0x0000, 0xFC00, 0xFC00, 0xFC00, 0xFC0E, 0xFC0E, 0xFC0E,
    0x0070, 0x0070, 0x0070, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00,
    0x1C00, 0xE07E, 0xE07E, 0xE07E, 0x007E, 0x007E, 0x007E, 0x0000,
    0x0000, 0x0000,
    // 0x26 '&'
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x1F80, 0xE070, 0xE070, 0xE070,
    0xE380, 0xE380, 0xE380, 0x1C00, 0x1C00, 0x1C00, 0xE38E, 0xE38E,
    0xE38E, 0xE070, 0xE070, 0xE070, 0x1F8E, 0x1F8E, 0x1F8E, 0x0000,
    0x0000, 0x0000,
    // 0x27 "'"
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x1F80, 0x0380, 0x0380, 0x0380,
    0x1C00, 0x1C00, 0x1C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x28 '('
    0x0000, 0x0000, 0x0070, 0x0070, 0x0070, 0x0380, 0x0380, 0x0380,
    0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00,
    0x1C00, 0x0380, 0x0380, 0x0380, 0x0070, 0x0070, 0x0070, 0x0000,
    0x0000, 0x0000,
    // 0x29 ')'
    0x0000, 0x0000, 0x1C00, 0x1C00, 0x1C00, 0x0380, 0x0380, 0x0380,
    0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070,
    0x0070, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00, 0x1C00, 0x0000,
    0x0000, 0x0000,
    // 0x2A '*'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0380, 0x0380, 0x0380,
    0xE38E, 0xE38E, 0xE38E, 0x1FF0, 0x1FF0, 0x1FF0, 0xE38E, 0xE38E,
    0xE38E, 0x0380, 0x0380, 0x0380, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x2B '+'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0xFFFE, 0xFFFE, 0xFFFE, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x2C ','
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80,
    0x1F80, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00, 0x1C00, 0x0000,
    0x0000, 0x0000,
    // 0x2D '-'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x2E '.'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1F80, 0x1F80, 0x1F80, 0x1F80, 0x1F80, 0x1F80, 0x0000,
    0x0000, 0x0000,
    // 0x2F '/'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x000E, 0x000E, 0x000E,
    0x0070, 0x0070, 0x0070, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00,
    0x1C00, 0xE000, 0xE000, 0xE000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x30 '0'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0xE07E, 0xE07E, 0xE07E, 0xE38E, 0xE38E, 0xE38E, 0xFC0E, 0xFC0E,
    0xFC0E, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x31 '1'
    0x0000, 0x0000, 0x0380, 0x0380, 0x0380, 0x1F80, 0x1F80, 0x1F80,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x32 '2'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0x000E, 0x000E, 0x000E, 0x0070, 0x0070, 0x0070, 0x0380, 0x0380,
    0x0380, 0x1C00, 0x1C00, 0x1C00, 0xFFFE, 0xFFFE, 0xFFFE, 0x0000,
    0x0000, 0x0000,
    // 0x33 '3'
    0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0x0070, 0x0070, 0x0070,
    0x0380, 0x0380, 0x0380, 0x0070, 0x0070, 0x0070, 0x000E, 0x000E,
    0x000E, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x34 '4'
    0x0000, 0x0000, 0x0070, 0x0070, 0x0070, 0x03F0, 0x03F0, 0x03F0,
    0x1C70, 0x1C70, 0x1C70, 0xE070, 0xE070, 0xE070, 0xFFFE, 0xFFFE,
    0xFFFE, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0000,
    0x0000, 0x0000,
    // 0x35 '5'
    0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0xE000, 0xE000, 0xE000,
    0xFFF0, 0xFFF0, 0xFFF0, 0x000E, 0x000E, 0x000E, 0x000E, 0x000E,
    0x000E, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x36 '6'
    0x0000, 0x0000, 0x03F0, 0x03F0, 0x03F0, 0x1C00, 0x1C00, 0x1C00,
    0xE000, 0xE000, 0xE000, 0xFFF0, 0xFFF0, 0xFFF0, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x37 '7'
    0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0x000E, 0x000E, 0x000E,
    0x0070, 0x0070, 0x0070, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00,
    0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x0000,
    0x0000, 0x0000,
    // 0x38 '8'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x39 '9'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0x1FFE, 0x1FFE, 0x1FFE, 0x000E, 0x000E,
    0x000E, 0x0070, 0x0070, 0x0070, 0x1F80, 0x1F80, 0x1F80, 0x0000,
    0x0000, 0x0000,
    // 0x3A ':'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80, 0x1F80,
    0x1F80, 0x1F80, 0x1F80, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80,
    0x1F80, 0x1F80, 0x1F80, 0x1F80, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x3B ';'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80, 0x1F80,
    0x1F80, 0x1F80, 0x1F80, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80,
    0x1F80, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00, 0x1C00, 0x0000,
    0x0000, 0x0000,
    // 0x3C '<'
    0x0000, 0x0000, 0x0070, 0x0070, 0x0070, 0x0380, 0x0380, 0x0380,
    0x1C00, 0x1C00, 0x1C00, 0xE000, 0xE000, 0xE000, 0x1C00, 0x1C00,
    0x1C00, 0x0380, 0x0380, 0x0380, 0x0070, 0x0070, 0x0070, 0x0000,
    0x0000, 0x0000,
    // 0x3D '='
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xFFFE, 0xFFFE, 0xFFFE, 0x0000, 0x0000, 0x0000, 0xFFFE, 0xFFFE,
    0xFFFE, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x3E '>'
    0x0000, 0x0000, 0x1C00, 0x1C00, 0x1C00, 0x0380, 0x0380, 0x0380,
    0x0070, 0x0070, 0x0070, 0x000E, 0x000E, 0x000E, 0x0070, 0x0070,
    0x0070, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00, 0x1C00, 0x0000,
    0x0000, 0x0000,
    // 0x3F '?'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0x000E, 0x000E, 0x000E, 0x0070, 0x0070, 0x0070, 0x0380, 0x0380,
    0x0380, 0x0000, 0x0000, 0x0000, 0x0380, 0x0380, 0x0380, 0x0000,
    0x0000, 0x0000,
    // 0x40 '@'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0x000E, 0x000E, 0x000E, 0x1F8E, 0x1F8E, 0x1F8E, 0xE38E, 0xE38E,
    0xE38E, 0xE38E, 0xE38E, 0xE38E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x41 'A'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xFFFE, 0xFFFE,
    0xFFFE, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x42 'B'
    0x0000, 0x0000, 0xFFF0, 0xFFF0, 0xFFF0, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xFFF0, 0xFFF0, 0xFFF0, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xFFF0, 0xFFF0, 0xFFF0, 0x0000,
    0x0000, 0x0000,
    // 0x43 'C'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000,
    0xE000, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x44 'D'
    0x0000, 0x0000, 0xFF80, 0xFF80, 0xFF80, 0xE070, 0xE070, 0xE070,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE070, 0xE070, 0xE070, 0xFF80, 0xFF80, 0xFF80, 0x0000,
    0x0000, 0x0000,
    // 0x45 'E'
    0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0xE000, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0xFFF0, 0xFFF0, 0xFFF0, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0xE000, 0xFFFE, 0xFFFE, 0xFFFE, 0x0000,
    0x0000, 0x0000,
    // 0x46 'F'
    0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0xE000, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0xFFF0, 0xFFF0, 0xFFF0, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0x0000,
    0x0000, 0x0000,
    // 0x47 'G'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0xE000, 0xE000, 0xE000, 0xE3FE, 0xE3FE, 0xE3FE, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FFE, 0x1FFE, 0x1FFE, 0x0000,
    0x0000, 0x0000,
    // 0x48 'H'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xFFFE, 0xFFFE, 0xFFFE, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x49 'I'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x4A 'J'
    0x0000, 0x0000, 0x03FE, 0x03FE, 0x03FE, 0x0070, 0x0070, 0x0070,
    0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070,
    0x0070, 0xE070, 0xE070, 0xE070, 0x1F80, 0x1F80, 0x1F80, 0x0000,
    0x0000, 0x0000,
    // 0x4B 'K'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xE070, 0xE070, 0xE070,
    0xE380, 0xE380, 0xE380, 0xFC00, 0xFC00, 0xFC00, 0xE380, 0xE380,
    0xE380, 0xE070, 0xE070, 0xE070, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x4C 'L'
    0x0000, 0x0000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0xE000, 0xFFFE, 0xFFFE, 0xFFFE, 0x0000,
    0x0000, 0x0000,
    // 0x4D 'M'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xFC7E, 0xFC7E, 0xFC7E,
    0xE38E, 0xE38E, 0xE38E, 0xE38E, 0xE38E, 0xE38E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x4E 'N'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xFC0E, 0xFC0E, 0xFC0E, 0xE38E, 0xE38E, 0xE38E, 0xE07E, 0xE07E,
    0xE07E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x4F 'O'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x50 'P'
    0x0000, 0x0000, 0xFFF0, 0xFFF0, 0xFFF0, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xFFF0, 0xFFF0, 0xFFF0, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0x0000,
    0x0000, 0x0000,
    // 0x51 'Q'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE38E, 0xE38E,
    0xE38E, 0xE070, 0xE070, 0xE070, 0x1F8E, 0x1F8E, 0x1F8E, 0x0000,
    0x0000, 0x0000,
    // 0x52 'R'
    0x0000, 0x0000, 0xFFF0, 0xFFF0, 0xFFF0, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xFFF0, 0xFFF0, 0xFFF0, 0xE380, 0xE380,
    0xE380, 0xE070, 0xE070, 0xE070, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x53 'S'
    0x0000, 0x0000, 0x1FFE, 0x1FFE, 0x1FFE, 0xE000, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0x1FF0, 0x1FF0, 0x1FF0, 0x000E, 0x000E,
    0x000E, 0x000E, 0x000E, 0x000E, 0xFFF0, 0xFFF0, 0xFFF0, 0x0000,
    0x0000, 0x0000,
    // 0x54 'T'
    0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0000,
    0x0000, 0x0000,
    // 0x55 'U'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x56 'V'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0x1C70, 0x1C70, 0x1C70, 0x0380, 0x0380, 0x0380, 0x0000,
    0x0000, 0x0000,
    // 0x57 'W'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE38E, 0xE38E, 0xE38E, 0xE38E, 0xE38E,
    0xE38E, 0xE38E, 0xE38E, 0xE38E, 0x1C70, 0x1C70, 0x1C70, 0x0000,
    0x0000, 0x0000,
    // 0x58 'X'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0x1C70, 0x1C70, 0x1C70, 0x0380, 0x0380, 0x0380, 0x1C70, 0x1C70,
    0x1C70, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x59 'Y'
    0x0000, 0x0000, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0x1C70, 0x1C70, 0x1C70, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0000,
    0x0000, 0x0000,
    // 0x5A 'Z'
    0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0x000E, 0x000E, 0x000E,
    0x0070, 0x0070, 0x0070, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00,
    0x1C00, 0xE000, 0xE000, 0xE000, 0xFFFE, 0xFFFE, 0xFFFE, 0x0000,
    0x0000, 0x0000,
    // 0x5B '['
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0x1C00, 0x1C00, 0x1C00,
    0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00,
    0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x5C '\'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xE000, 0xE000, 0xE000,
    0x1C00, 0x1C00, 0x1C00, 0x0380, 0x0380, 0x0380, 0x0070, 0x0070,
    0x0070, 0x000E, 0x000E, 0x000E, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x5D ']'
    0x0000, 0x0000, 0x1FF0, 0x1FF0, 0x1FF0, 0x0070, 0x0070, 0x0070,
    0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070,
    0x0070, 0x0070, 0x0070, 0x0070, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x5E '^'
    0x0000, 0x0000, 0x0380, 0x0380, 0x0380, 0x1C70, 0x1C70, 0x1C70,
    0xE00E, 0xE00E, 0xE00E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x5F '_'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0xFFFE, 0xFFFE, 0xFFFE, 0x0000,
    0x0000, 0x0000,
    // 0x60 '`'
    0x0000, 0x0000, 0x1C00, 0x1C00, 0x1C00, 0x0380, 0x0380, 0x0380,
    0x0070, 0x0070, 0x0070, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
    // 0x61 'a'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1FF0, 0x1FF0, 0x1FF0, 0x000E, 0x000E, 0x000E, 0x1FFE, 0x1FFE,
    0x1FFE, 0xE00E, 0xE00E, 0xE00E, 0x1FFE, 0x1FFE, 0x1FFE, 0x0000,
    0x0000, 0x0000,
    // 0x62 'b'
    0x0000, 0x0000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000,
    0xE3F0, 0xE3F0, 0xE3F0, 0xFC0E, 0xFC0E, 0xFC0E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xFFF0, 0xFFF0, 0xFFF0, 0x0000,
    0x0000, 0x0000,
    // 0x63 'c'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1FF0, 0x1FF0, 0x1FF0, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000,
    0xE000, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x64 'd'
    0x0000, 0x0000, 0x000E, 0x000E, 0x000E, 0x000E, 0x000E, 0x000E,
    0x1F8E, 0x1F8E, 0x1F8E, 0xE07E, 0xE07E, 0xE07E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FFE, 0x1FFE, 0x1FFE, 0x0000,
    0x0000, 0x0000,
    // 0x65 'e'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E, 0xFFFE, 0xFFFE,
    0xFFFE, 0xE000, 0xE000, 0xE000, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x66 'f'
    0x0000, 0x0000, 0x03F0, 0x03F0, 0x03F0, 0x1C0E, 0x1C0E, 0x1C0E,
    0x1C00, 0x1C00, 0x1C00, 0xFF80, 0xFF80, 0xFF80, 0x1C00, 0x1C00,
    0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x0000,
    0x0000, 0x0000,
    // 0x67 'g'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FFE, 0x1FFE, 0x1FFE,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FFE, 0x1FFE,
    0x1FFE, 0x000E, 0x000E, 0x000E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x68 'h'
    0x0000, 0x0000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000,
    0xE3F0, 0xE3F0, 0xE3F0, 0xFC0E, 0xFC0E, 0xFC0E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x69 'i'
    0x0000, 0x0000, 0x0380, 0x0380, 0x0380, 0x0000, 0x0000, 0x0000,
    0x1F80, 0x1F80, 0x1F80, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x6A 'j'
    0x0000, 0x0000, 0x0070, 0x0070, 0x0070, 0x0000, 0x0000, 0x0000,
    0x03F0, 0x03F0, 0x03F0, 0x0070, 0x0070, 0x0070, 0x0070, 0x0070,
    0x0070, 0xE070, 0xE070, 0xE070, 0x1F80, 0x1F80, 0x1F80, 0x0000,
    0x0000, 0x0000,
    // 0x6B 'k'
    0x0000, 0x0000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000,
    0xE070, 0xE070, 0xE070, 0xE380, 0xE380, 0xE380, 0xFC00, 0xFC00,
    0xFC00, 0xE380, 0xE380, 0xE380, 0xE070, 0xE070, 0xE070, 0x0000,
    0x0000, 0x0000,
    // 0x6C 'l'
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x1F80, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x6D 'm'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xFC70, 0xFC70, 0xFC70, 0xE38E, 0xE38E, 0xE38E, 0xE38E, 0xE38E,
    0xE38E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x6E 'n'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xE3F0, 0xE3F0, 0xE3F0, 0xFC0E, 0xFC0E, 0xFC0E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x6F 'o'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1FF0, 0x1FF0, 0x1FF0, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x70 'p'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xFFF0, 0xFFF0, 0xFFF0, 0xE00E, 0xE00E, 0xE00E, 0xFFF0, 0xFFF0,
    0xFFF0, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0x0000,
    0x0000, 0x0000,
    // 0x71 'q'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1F8E, 0x1F8E, 0x1F8E, 0xE07E, 0xE07E, 0xE07E, 0x1FFE, 0x1FFE,
    0x1FFE, 0x000E, 0x000E, 0x000E, 0x000E, 0x000E, 0x000E, 0x0000,
    0x0000, 0x0000,
    // 0x72 'r'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xE3F0, 0xE3F0, 0xE3F0, 0xFC0E, 0xFC0E, 0xFC0E, 0xE000, 0xE000,
    0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0xE000, 0x0000,
    0x0000, 0x0000,
    // 0x73 's'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1FF0, 0x1FF0, 0x1FF0, 0xE000, 0xE000, 0xE000, 0x1FF0, 0x1FF0,
    0x1FF0, 0x000E, 0x000E, 0x000E, 0xFFF0, 0xFFF0, 0xFFF0, 0x0000,
    0x0000, 0x0000,
    // 0x74 't'
    0x0000, 0x0000, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00,
    0xFF80, 0xFF80, 0xFF80, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00,
    0x1C00, 0x1C0E, 0x1C0E, 0x1C0E, 0x03F0, 0x03F0, 0x03F0, 0x0000,
    0x0000, 0x0000,
    // 0x75 'u'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0xE07E, 0xE07E, 0xE07E, 0x1F8E, 0x1F8E, 0x1F8E, 0x0000,
    0x0000, 0x0000,
    // 0x76 'v'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E,
    0xE00E, 0x1C70, 0x1C70, 0x1C70, 0x0380, 0x0380, 0x0380, 0x0000,
    0x0000, 0x0000,
    // 0x77 'w'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE38E, 0xE38E,
    0xE38E, 0xE38E, 0xE38E, 0xE38E, 0x1C70, 0x1C70, 0x1C70, 0x0000,
    0x0000, 0x0000,
    // 0x78 'x'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xE00E, 0xE00E, 0xE00E, 0x1C70, 0x1C70, 0x1C70, 0x0380, 0x0380,
    0x0380, 0x1C70, 0x1C70, 0x1C70, 0xE00E, 0xE00E, 0xE00E, 0x0000,
    0x0000, 0x0000,
    // 0x79 'y'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0xE00E, 0x1FFE, 0x1FFE,
    0x1FFE, 0x000E, 0x000E, 0x000E, 0x1FF0, 0x1FF0, 0x1FF0, 0x0000,
    0x0000, 0x0000,
    // 0x7A 'z'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0xFFFE, 0xFFFE, 0xFFFE, 0x0070, 0x0070, 0x0070, 0x0380, 0x0380,
    0x0380, 0x1C00, 0x1C00, 0x1C00, 0xFFFE, 0xFFFE, 0xFFFE, 0x0000,
    0x0000, 0x0000,
    // 0x7B '{'
    0x0000, 0x0000, 0x0070, 0x0070, 0x0070, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00, 0x1C00, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0070, 0x0070, 0x0070, 0x0000,
    0x0000, 0x0000,
    // 0x7C '|'
    0x0000, 0x0000, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0000,
    0x0000, 0x0000,
    // 0x7D '}'
    0x0000, 0x0000, 0x1C00, 0x1C00, 0x1C00, 0x0380, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0070, 0x0070, 0x0070, 0x0380, 0x0380,
    0x0380, 0x0380, 0x0380, 0x0380, 0x1C00, 0x1C00, 0x1C00, 0x0000,
    0x0000, 0x0000,
    // 0x7E '~'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1C00, 0x1C00, 0x1C00, 0xE38E, 0xE38E, 0xE38E, 0x0070, 0x0070,
    0x0070, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000,
];
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_row_counts() {
        assert_eq!(FONT_7X10.glyph('A').unwrap().len(), 10);
        assert_eq!(FONT_11X18.glyph('A').unwrap().len(), 18);
        assert_eq!(FONT_16X26.glyph('A').unwrap().len(), 26);
    }

    #[test]
    fn test_unprintable_has_no_glyph() {
        assert!(FONT_7X10.glyph('\n').is_none());
        assert!(FONT_7X10.glyph('\u{7F}').is_none());
        assert!(FONT_11X18.glyph('\u{FFFD}').is_none());
    }

    #[test]
    fn test_rows_confined_to_cell_width() {
        for font in [&FONT_7X10, &FONT_11X18, &FONT_16X26] {
            let spill = (0xFFFF_u32 >> font.width) as u16;
            for code in 0x20u8..=0x7E {
                let rows = font.glyph(code as char).unwrap();
                for row in rows {
                    assert_eq!(row & spill, 0, "0x{:02X} spills its cell", code);
                }
            }
        }
    }

    #[test]
    fn test_space_is_blank() {
        assert!(FONT_11X18.glyph(' ').unwrap().iter().all(|&r| r == 0));
    }

    #[test]
    fn test_glyphs_have_ink() {
        for code in 0x21u8..=0x7E {
            assert!(
                FONT_11X18.glyph(code as char).unwrap().iter().any(|&r| r != 0),
                "0x{:02X} is blank",
                code
            );
        }
    }
}

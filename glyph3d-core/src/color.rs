/// Cell attributes and glyphs
///
/// Attributes follow the console convention: the low nibble selects the
/// foreground colour, the high nibble the background colour, and bit 3 of
/// each nibble is the intensity flag.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attr(pub u16);

impl Attr {
    pub const FG_BLACK: Attr = Attr(0x0000);
    pub const FG_GREY: Attr = Attr(0x0007);
    pub const FG_BLUE: Attr = Attr(0x0009);
    pub const FG_GREEN: Attr = Attr(0x000A);
    pub const FG_RED: Attr = Attr(0x000C);
    pub const FG_YELLOW: Attr = Attr(0x000E);
    pub const FG_WHITE: Attr = Attr(0x000F);
    pub const BG_BLACK: Attr = Attr(0x0000);
    pub const BG_GREY: Attr = Attr(0x0070);
    pub const BG_BLUE: Attr = Attr(0x0090);
    pub const BG_GREEN: Attr = Attr(0x00A0);
    pub const BG_RED: Attr = Attr(0x00C0);
    pub const BG_YELLOW: Attr = Attr(0x00E0);
    pub const BG_WHITE: Attr = Attr(0x00F0);

    /// Foreground colour index (0..16)
    pub fn foreground(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// Background colour index (0..16)
    pub fn background(self) -> u8 {
        ((self.0 >> 4) & 0x000F) as u8
    }
}

/// Block glyphs used for shading
pub mod glyph {
    pub const SOLID: char = '\u{2588}';
    pub const THREE_QUARTERS: char = '\u{2593}';
    pub const HALF: char = '\u{2592}';
    pub const QUARTER: char = '\u{2591}';
    pub const BLANK: char = ' ';
}

//! Built-in 3x5 bitmap font
//!
//! Each glyph is a row-major sequence of cells, `1` for a lit pixel and `0`
//! for a transparent one. The table is static data compiled into the binary.

/// Glyph width in pixels
pub const GLYPH_WIDTH: u8 = 3;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: u8 = 5;

/// Horizontal gap between glyphs when drawing text
pub const GLYPH_SPACING: u8 = 1;

const CELLS: usize = GLYPH_WIDTH as usize * GLYPH_HEIGHT as usize;

/// A monochrome character bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    width: u8,
    height: u8,
    cells: &'static [u8],
}

impl Glyph {
    /// Width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Row-major cells, `1` for lit
    pub const fn cells(&self) -> &'static [u8] {
        self.cells
    }

    /// Offsets `(local_x, local_y)` of the lit cells, in row-major order
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + 'static {
        let width = usize::from(self.width);
        let cells = self.cells;
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(move |(i, _)| (i % width, i / width))
    }
}

/// Look up the glyph for `c`
///
/// Lookup is exact: lowercase letters have no glyph of their own.
pub fn glyph(c: char) -> Option<Glyph> {
    bitmap(c).map(|cells| Glyph {
        width: GLYPH_WIDTH,
        height: GLYPH_HEIGHT,
        cells,
    })
}

/// Whether `c` has a glyph
pub fn contains(c: char) -> bool {
    bitmap(c).is_some()
}

#[rustfmt::skip]
fn bitmap(c: char) -> Option<&'static [u8; CELLS]> {
    let cells: &'static [u8; CELLS] = match c {
        '0' => &[1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1],
        '1' => &[0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1],
        '2' => &[1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1],
        '3' => &[1,1,1, 0,0,1, 1,1,1, 0,0,1, 1,1,1],
        '4' => &[1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1],
        '5' => &[1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1],
        '6' => &[1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1],
        '7' => &[1,1,1, 0,0,1, 0,0,1, 0,0,1, 0,0,1],
        '8' => &[1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1],
        '9' => &[1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1],
        'A' => &[0,1,0, 1,0,1, 1,1,1, 1,0,1, 1,0,1],
        'B' => &[1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0],
        'C' => &[0,1,1, 1,0,0, 1,0,0, 1,0,0, 0,1,1],
        'D' => &[1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,1,0],
        'E' => &[1,1,1, 1,0,0, 1,1,1, 1,0,0, 1,1,1],
        'F' => &[1,1,1, 1,0,0, 1,1,1, 1,0,0, 1,0,0],
        'G' => &[0,1,1, 1,0,0, 1,0,1, 1,0,1, 0,1,1],
        'H' => &[1,0,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1],
        'I' => &[1,1,1, 0,1,0, 0,1,0, 0,1,0, 1,1,1],
        'J' => &[0,0,1, 0,0,1, 0,0,1, 1,0,1, 0,1,0],
        'K' => &[1,0,1, 1,0,1, 1,1,0, 1,0,1, 1,0,1],
        'L' => &[1,0,0, 1,0,0, 1,0,0, 1,0,0, 1,1,1],
        'M' => &[1,0,1, 1,1,1, 1,1,1, 1,0,1, 1,0,1],
        'N' => &[1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,0,1],
        'O' => &[0,1,0, 1,0,1, 1,0,1, 1,0,1, 0,1,0],
        'P' => &[1,1,0, 1,0,1, 1,1,0, 1,0,0, 1,0,0],
        'Q' => &[0,1,0, 1,0,1, 1,0,1, 1,1,0, 0,1,1],
        'R' => &[1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,0,1],
        'S' => &[0,1,1, 1,0,0, 0,1,0, 0,0,1, 1,1,0],
        'T' => &[1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0],
        'U' => &[1,0,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1],
        'V' => &[1,0,1, 1,0,1, 1,0,1, 1,0,1, 0,1,0],
        'W' => &[1,0,1, 1,0,1, 1,1,1, 1,1,1, 1,0,1],
        'X' => &[1,0,1, 1,0,1, 0,1,0, 1,0,1, 1,0,1],
        'Y' => &[1,0,1, 1,0,1, 0,1,0, 0,1,0, 0,1,0],
        'Z' => &[1,1,1, 0,0,1, 0,1,0, 1,0,0, 1,1,1],
        ' ' => &[0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,0,0],
        '.' => &[0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,1,0],
        ',' => &[0,0,0, 0,0,0, 0,0,0, 0,1,0, 1,0,0],
        ':' => &[0,0,0, 0,1,0, 0,0,0, 0,1,0, 0,0,0],
        '!' => &[0,1,0, 0,1,0, 0,1,0, 0,0,0, 0,1,0],
        '?' => &[1,1,1, 0,0,1, 0,1,0, 0,0,0, 0,1,0],
        '-' => &[0,0,0, 0,0,0, 1,1,1, 0,0,0, 0,0,0],
        '+' => &[0,0,0, 0,1,0, 1,1,1, 0,1,0, 0,0,0],
        '/' => &[0,0,1, 0,0,1, 0,1,0, 1,0,0, 1,0,0],
        '=' => &[0,0,0, 1,1,1, 0,0,0, 1,1,1, 0,0,0],
        '%' => &[1,0,1, 0,0,1, 0,1,0, 1,0,0, 1,0,1],
        '\'' => &[0,1,0, 0,1,0, 0,0,0, 0,0,0, 0,0,0],
        '(' => &[0,0,1, 0,1,0, 0,1,0, 0,1,0, 0,0,1],
        ')' => &[1,0,0, 0,1,0, 0,1,0, 0,1,0, 1,0,0],
        _ => return None,
    };
    Some(cells)
}

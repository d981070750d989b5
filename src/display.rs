//! Character display seam and an in-memory display model.
//!
//! Settings render through the [`CharDisplay`] trait and take their data
//! write position from a [`Cursor`], so the library never touches
//! concrete display hardware. [`TextGrid`] is a fixed-size character-cell
//! model of a 16×2 front-panel display, usable both as a host-side test
//! surface and as the frame source for a real driver.

use core::fmt::Write;

use heapless::String;

/// Number of character columns in a [`TextGrid`].
pub const GRID_COLS: usize = 16;

/// Number of character rows in a [`TextGrid`].
pub const GRID_ROWS: usize = 2;

// ── Traits ───────────────────────────────────────────────────────────────

/// Write primitives of a character-cell display.
///
/// Positions are `(col, row)` cell coordinates with `(0, 0)` at the top
/// left. Implementations decide how to handle out-of-bounds writes;
/// [`TextGrid`] ignores them.
pub trait CharDisplay {
    /// Write a single character at `(col, row)`.
    fn write_char(&mut self, col: u8, row: u8, ch: char);

    /// Write `value` starting at `(col, row)`, right-aligned in a field
    /// of at least `width` characters (space padded). Values wider than
    /// the field are written in full.
    fn write_number(&mut self, col: u8, row: u8, width: u8, value: i32);
}

/// Supplies the write position for data-mode rendering.
///
/// On the device this is the layout engine's cursor; in tests a
/// [`FixedCursor`] is enough.
pub trait Cursor {
    /// Current column.
    fn col(&self) -> u8;
    /// Current row.
    fn row(&self) -> u8;
}

/// Trivial [`Cursor`] holding a fixed position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedCursor {
    col: u8,
    row: u8,
}

impl FixedCursor {
    /// Create a cursor pinned at `(col, row)`.
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

impl Cursor for FixedCursor {
    fn col(&self) -> u8 {
        self.col
    }

    fn row(&self) -> u8 {
        self.row
    }
}

// ── TextGrid ─────────────────────────────────────────────────────────────

/// In-memory model of a 16×2 character display.
///
/// Cells are stored as space-padded byte rows, so a row can always be
/// viewed as a `&str` without allocation. Writes outside the grid are
/// silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextGrid {
    cells: [[u8; GRID_COLS]; GRID_ROWS],
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGrid {
    /// Create a blank grid (all cells are spaces).
    pub fn new() -> Self {
        Self {
            cells: [[b' '; GRID_COLS]; GRID_ROWS],
        }
    }

    /// Reset every cell to a space.
    pub fn clear(&mut self) {
        self.cells = [[b' '; GRID_COLS]; GRID_ROWS];
    }

    /// The character at `(col, row)`, or `None` outside the grid.
    pub fn cell(&self, col: u8, row: u8) -> Option<char> {
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .map(|&b| b as char)
    }

    /// View one row as a `&str`, trailing padding included.
    ///
    /// Returns `""` if `row` is out of bounds. Non-ASCII characters were
    /// already reduced to `'?'` on write, so the row is always valid
    /// UTF-8.
    pub fn row_str(&self, row: u8) -> &str {
        self.cells
            .get(row as usize)
            .map(|r| core::str::from_utf8(r).unwrap_or(""))
            .unwrap_or("")
    }

    fn put(&mut self, col: u8, row: u8, ch: char) {
        let (col, row) = (col as usize, row as usize);
        if row >= GRID_ROWS || col >= GRID_COLS {
            #[cfg(feature = "defmt")]
            defmt::warn!("TextGrid write out of bounds: col={}, row={}", col, row);
            return;
        }
        // One byte per cell; anything outside ASCII renders as '?'.
        self.cells[row][col] = if ch.is_ascii() { ch as u8 } else { b'?' };
    }
}

impl CharDisplay for TextGrid {
    fn write_char(&mut self, col: u8, row: u8, ch: char) {
        self.put(col, row, ch);
    }

    fn write_number(&mut self, col: u8, row: u8, width: u8, value: i32) {
        let mut buf: String<12> = String::new();
        // core::fmt::Write — works in no_std without alloc. Any i32 fits
        // in 12 bytes; a wider padding request truncates at the buffer.
        let _ = write!(buf, "{:>1$}", value, width as usize);

        for (i, ch) in buf.chars().enumerate() {
            self.put(col.saturating_add(i as u8), row, ch);
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

//! Style selection state with pot quantization and change detection.
//!
//! This module provides [`StyleSetting`], the owner of the controller's
//! enumerated style preset. A raw potentiometer sample goes through a
//! fixed quantization pipeline:
//!
//! ```text
//! sample ──map [10,1020]→[-1,COUNT]──▶ widened ──clamp [0,COUNT-1]──▶ ordinal ──▶ Style
//! ```
//!
//! The map codomain is deliberately one unit wider than the valid ordinal
//! range on each side. The clamp folds that extra unit back onto the
//! boundary ordinals, which gives the pot a flat dead zone at both ends
//! of its travel and compensates for sensor inaccuracy near the rails.
//!
//! # Change Tracking
//!
//! [`StyleSetting::update()`] stores the new style and returns `true`
//! only when the quantized value differs from the stored one. The caller
//! drives its redraw/dirty flag from the boolean; re-sampling an
//! unchanged pot every loop iteration costs nothing downstream.

use crate::analog::{constrain, map_range};
use crate::display::{CharDisplay, Cursor};

/// Lowest raw sample the pot reliably produces (sensor skew above 0).
pub const POT_MIN: i32 = 10;

/// Highest raw sample the pot reliably produces (sensor skew below 1023).
pub const POT_MAX: i32 = 1020;

// ── Style ────────────────────────────────────────────────────────────────

/// Closed set of selectable arpeggio-pattern presets.
///
/// Ordinals are the declaration order, 0-based. The set is fixed at
/// compile time; [`Style::COUNT`] and [`Style::ALL`] are the only places
/// that know its size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Style {
    /// Play held notes lowest to highest.
    #[default]
    Up,
    /// Highest to lowest.
    Down,
    /// Up, then down, repeating the edge notes.
    UpDown,
    /// Down, then up, repeating the edge notes.
    DownUp,
    /// Up, then down, without repeating the edge notes.
    UpAndDown,
    /// Down, then up, without repeating the edge notes.
    DownAndUp,
    /// Outermost notes first, closing inward.
    Converge,
    /// Innermost notes first, opening outward.
    Diverge,
}

impl Style {
    /// Number of styles in the set.
    pub const COUNT: usize = 8;

    /// All styles in ordinal order.
    ///
    /// This table is the single ordinal→variant conversion path; the
    /// quantization pipeline indexes it with a clamped ordinal instead
    /// of casting integers at each call site.
    pub const ALL: [Style; Self::COUNT] = [
        Style::Up,
        Style::Down,
        Style::UpDown,
        Style::DownUp,
        Style::UpAndDown,
        Style::DownAndUp,
        Style::Converge,
        Style::Diverge,
    ];

    /// Zero-based position of this style within the set.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Checked conversion from a zero-based ordinal.
    ///
    /// Returns `None` if `ordinal >= COUNT`.
    pub fn from_ordinal(ordinal: u8) -> Option<Style> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

// ── RenderMode ───────────────────────────────────────────────────────────

/// Which of the two display projections to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMode {
    /// The fixed one-character label at the label position.
    Title,
    /// The 1-based style number at the cursor position.
    Data,
}

// ── StyleSetting ─────────────────────────────────────────────────────────

/// Owner of the controller's style selection.
///
/// Holds exactly one [`Style`] and keeps it valid by construction: the
/// update path clamps before converting, so no out-of-range ordinal can
/// ever be stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StyleSetting {
    style: Style,
}

impl StyleSetting {
    /// Create a setting holding `style`.
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// The currently selected style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Quantize a raw pot sample and store the result.
    ///
    /// `sample` is expected in `[POT_MIN, POT_MAX]`; anything outside
    /// clamps to the nearest boundary style, so the call is total.
    ///
    /// Returns `true` and overwrites the stored style iff the quantized
    /// style differs from the stored one. Returns `false` and leaves
    /// the state untouched otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use style_dial::{Style, StyleSetting};
    ///
    /// let mut setting = StyleSetting::default();
    /// assert!(setting.update(1020));
    /// assert_eq!(setting.style(), Style::Diverge);
    ///
    /// // Same sample again — no change to report.
    /// assert!(!setting.update(1020));
    /// ```
    pub fn update(&mut self, sample: i16) -> bool {
        let widened = map_range(
            sample as i32,
            POT_MIN,
            POT_MAX,
            -1,
            Style::COUNT as i32,
        );
        let ordinal = constrain(widened, 0, Style::COUNT as i32 - 1);

        // In bounds by the clamp above.
        let style = Style::ALL[ordinal as usize];

        if style != self.style {
            #[cfg(feature = "defmt")]
            defmt::trace!(
                "style changed: {} -> {} (sample {})",
                self.style,
                style,
                sample
            );
            self.style = style;
            return true;
        }

        false
    }

    /// Draw one projection of the setting.
    ///
    /// - [`RenderMode::Title`] writes `'S'` at column 0, row 1,
    ///   regardless of the current style.
    /// - [`RenderMode::Data`] writes the 1-based style number at the
    ///   cursor position, right-aligned in a 2-character field.
    pub fn render<C, D>(&self, mode: RenderMode, cursor: &C, display: &mut D)
    where
        C: Cursor,
        D: CharDisplay,
    {
        match mode {
            RenderMode::Title => display.write_char(0, 1, 'S'),
            RenderMode::Data => display.write_number(
                cursor.col(),
                cursor.row(),
                2,
                self.style.ordinal() as i32 + 1,
            ),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

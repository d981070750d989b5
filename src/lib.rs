//! Potentiometer-driven style selection for a MIDI controller front panel.
//!
//! This crate provides [`StyleSetting`], which quantizes a raw analog
//! potentiometer sample into one of a closed set of [`Style`] presets and
//! reports whether the selection changed, plus the small display seam
//! ([`CharDisplay`], [`Cursor`]) used to render the selection on a
//! character display.
//!
//! # Quick Start
//!
//! ```
//! use style_dial::{FixedCursor, RenderMode, StyleSetting, TextGrid};
//!
//! let mut setting = StyleSetting::default();
//! let mut grid = TextGrid::new();
//!
//! // Control loop: re-sample the pot, redraw only on change.
//! if setting.update(812) {
//!     let cursor = FixedCursor::new(2, 1);
//!     setting.render(RenderMode::Title, &cursor, &mut grid);
//!     setting.render(RenderMode::Data, &cursor, &mut grid);
//! }
//! ```
//!
//! # Change Tracking
//!
//! [`StyleSetting::update()`] returns `true` only when the quantized
//! style differs from the stored one. Callers use the boolean to drive
//! their own dirty/needs-redraw flag; the setting itself carries no
//! display state.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. All storage is fixed-size; numeric formatting in
//! [`TextGrid`] goes through [`heapless::String`]. The optional `defmt`
//! feature enables structured logging for embedded targets.
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].

#![no_std]

pub mod analog;
pub mod display;
pub mod setting;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use analog::{constrain, map_range};
pub use display::{CharDisplay, Cursor, FixedCursor, TextGrid};
pub use setting::{RenderMode, Style, StyleSetting, POT_MAX, POT_MIN};

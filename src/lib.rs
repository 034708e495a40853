//! Small text utilities for presenting data to people: relative time phrases with
//! per-language pluralization, Cyrillic transliteration, name parsing and initials,
//! and a couple of display probes.

pub mod display;
pub mod error;
pub mod locale;
pub mod names;
pub mod plural;
pub mod time;
pub mod translit;

pub use display::{
    DEFAULT_KEYBOARD_MARGIN_DP, DisplayMetrics, FrameSnapshot, Rect, WindowProbe,
    convert_dp_to_px, is_keyboard_closed, is_keyboard_open,
};
pub use error::{Error, Result};
pub use locale::{Language, Locale, Phrases};
pub use names::{initials, parse_full_name};
pub use plural::{PluralCategory, PluralRule, PluralTable, WordForms};
pub use time::{
    DEFAULT_DATE_FORMAT, TimeUnit, add, format_instant,
    humanize::{Bucket, Direction, Humanizer, humanize_diff, rounded_diff_ms},
};
pub use translit::{DEFAULT_DIVIDER, transliterate};

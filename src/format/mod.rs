//! Entry formatting
//!
//! Pure functions turning metadata into display strings, plus the writer
//! that assembles them into one line per entry.
//!
//! # Module Structure
//!
//! - `permissions` - 10-character mode strings
//! - `owner` - user/group columns with numeric fallback
//! - `time` - two-mode timestamp column
//! - `indicator` - classify glyphs
//! - `color` - name styles by file type
//! - `line` - the complete output line

mod color;
mod indicator;
mod line;
mod owner;
mod permissions;
mod time;

pub use color::NameStyle;
pub use indicator::type_indicator;
pub use line::{long_columns, write_entry};
pub use owner::{OwnerNames, owner_field};
pub use permissions::{mode_string, type_glyph};
pub use time::{is_recent, time_string, time_string_in};

//! Entry formatting and display
//!
//! # Module Structure
//!
//! - `format` - Metadata to text (permissions, owner, group, time, devices)
//! - `decorate` - Type indicator characters and name colors
//! - `line` - `LineFormatter`, the `ListingOutput` used by the binary

mod decorate;
mod format;
mod line;

// Re-export public types and functions
pub use decorate::{color_for, type_indicator, write_colored_name};
pub use format::{
    format_device_numbers, format_group, format_owner, format_permissions, format_timestamp,
    format_timestamp_in, major, minor,
};
pub use line::LineFormatter;

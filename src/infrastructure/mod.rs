//! Infrastructure layer for platform concerns.
//!
//! Holds the pieces that touch the surrounding system rather than the widget
//! itself.
//!
//! # Organization
//!
//! - [`paths`]: Data directory resolution for trace output

pub mod paths;

pub use paths::get_data_dir;

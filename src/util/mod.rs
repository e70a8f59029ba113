//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod base_url;
pub mod color;
pub mod host_pattern;
pub mod locale;
pub mod timezone;
mod timezone_data;

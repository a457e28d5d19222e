//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, downloads, dates) and
//! pure math from page and component logic to improve reuse and testability.

pub mod chart_math;
pub mod clock;
pub mod export;
pub mod format;
pub mod ticker;

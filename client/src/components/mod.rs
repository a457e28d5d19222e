//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and the presentation widgets shared by the
//! module pages. Chrome reads and writes the `ShellState` context; widgets
//! take plain props.

pub mod badge;
pub mod charts;
pub mod chat_dialog;
pub mod export_menu;
pub mod header;
pub mod metric_card;
pub mod module_drawer;
pub mod progress_bar;
pub mod tab_bar;

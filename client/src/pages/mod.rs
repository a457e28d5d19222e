//! Page modules for the shell and the seven module screens.
//!
//! ARCHITECTURE
//! ============
//! `shell` mounts exactly one module page at a time. Each module page owns
//! its local view state and delegates rendering details to `components`.

pub mod analysis;
pub mod collaboration;
pub mod dashboard;
pub mod data_integration;
pub mod edna;
pub mod shell;
pub mod taxonomy;
pub mod visualization;

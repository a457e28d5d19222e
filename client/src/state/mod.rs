//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split by module (`dashboard`, `edna`, `taxonomy`, ...) so each
//! page depends on one small focused model. Everything here is plain Rust:
//! pages wrap these structs in `RwSignal`s and the tests drive them directly.

pub mod analysis;
pub mod collaboration;
pub mod dashboard;
pub mod edna;
pub mod integration;
pub mod progress;
pub mod shell;
pub mod taxonomy;
pub mod visualization;

/// A tab strip option. Implemented by each module's tab enum so one
/// `TabBar` component can render all of them.
pub trait TabKind: Copy + PartialEq + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn id(self) -> &'static str;

    fn label(self) -> &'static str;
}

//! Source patcher adapters.

pub mod marker;

pub use marker::MarkerPatcher;

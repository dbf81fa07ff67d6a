//! Infrastructure adapters for Grog.
//!
//! This crate implements the ports defined in `grog-core::application::ports`.
//! It contains all file I/O, the C# templates and the text patching.

pub mod filesystem;
pub mod patcher;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use patcher::MarkerPatcher;
pub use renderer::CSharpRenderer;

//! Template renderer adapters.

pub mod csharp;

pub use csharp::CSharpRenderer;

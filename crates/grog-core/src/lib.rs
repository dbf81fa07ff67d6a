//! Grog Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Grog
//! layered-skeleton generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            grog-cli (CLI)               │
//! │     (Prompts, flags, config, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerationService)            │
//! │   Create / patch / skip per artifact    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRenderer, Patcher) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      grog-adapters (Infrastructure)     │
//! │ (LocalFilesystem, CSharpRenderer, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (GenerationRequest, ArtifactKind, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grog_core::{
//!     application::GenerationService,
//!     domain::{GenerationRequest, ProjectLayout},
//! };
//!
//! // 1. Collect the request
//! let request = GenerationRequest::new("Acme.Shop", "Order", "GetOrder").unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerationService::new(filesystem, renderer, patcher, ProjectLayout::default());
//! let report = service.generate(&request).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationService,
        ports::{Filesystem, PatchOutcome, SourcePatcher, TemplateRenderer},
    };
    pub use crate::domain::{
        Action, AnchorPolicy, ArtifactKind, ArtifactState, Decision, GenerationReport,
        GenerationRequest, ProjectLayout, REGISTRATION_MARKER,
    };
    pub use crate::error::{GrogError, GrogResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! PushLog Release Notes Engine: deterministic, rule-based.
//!
//! Classifies commits by conventional-commit prefix, flags risk keywords,
//! picks highlights, normalizes messages into a controlled vocabulary, and
//! renders a Markdown release document.
//!
//! No AI, no DB, no network; pure computation over an in-memory commit list.

pub mod analyze;
pub mod classify;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod validate;
pub mod vocabulary;

pub use config::Config;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use types::{Commit, PipelineOutput, PipelineRequest, ReleaseNotes};
pub use vocabulary::Locale;

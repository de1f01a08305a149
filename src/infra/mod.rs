//! Integrations with external services.

pub mod explainer;
pub mod gemini;

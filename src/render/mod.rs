//! Renderer module — turns records into output text.

pub mod markdown;

pub use markdown::render_document;

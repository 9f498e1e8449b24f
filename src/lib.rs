// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod engine;
pub mod glyph;
pub mod render;
pub mod runtime;
pub mod stats;
pub mod terminal;
pub mod text;

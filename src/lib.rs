//! Feijoa is the asynchronous core of a token-based template engine.
//! It resolves template references to concrete source files, loads their
//! content, and compiles ordered token sequences through pluggable
//! asynchronous compile and processor capabilities.

/// Ordered token compilation and concatenation
pub mod compiler;

/// Common constants used throughout the engine
pub mod constants;

/// Error types and handling for the engine core
pub mod error;

/// Escaping of template text for embedding in compiled output
pub mod escape;

/// Template content loading and the file-system seam
/// used by resolution and loading
pub mod loader;

/// Asynchronous processor chains applied to a threaded value
pub mod pipeline;

/// Template-name resolution
/// Maps a name plus parent context to one confirmed source path
pub mod resolver;

/// Template and template-options types
pub mod template;

//! Common constants used throughout the feijoa engine.

/// Default template file extension appended during resolution fallback
pub const DEFAULT_TEMPLATE_EXTENSION: &str = ".tmpl";

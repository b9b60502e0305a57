// PyO3 Bindings Module
//
// Hands the resolved project model to the Python presentation layer.
// Everything crosses the boundary as JSON, so no Python classes are needed.

mod api;

// Re-export for lib.rs
pub use api::{analyze_project, detect_language, supported_languages};

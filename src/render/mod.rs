//! Output rendering: the combined YAML stream and in-place saves

pub mod stream;

pub use stream::{render_document, render_stream, save_in_place, DOCUMENT_SEPARATOR};

// file: src/parser/mod.rs
// description: article markup conversion module exports
// reference: internal module structure

pub mod html;
pub mod normalizer;

pub use html::HtmlConverter;
pub use normalizer::TextNormalizer;

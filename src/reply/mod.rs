//! FTP replies
//!
//! Reply codes, the immutable `Reply` value and the translator that renders
//! a reply's message from its template.

pub mod codes;
pub mod translator;
pub mod types;

pub use translator::{translate, translate_template};
pub use types::Reply;

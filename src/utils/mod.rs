pub mod error;
pub mod format;
pub mod swagger_doc;

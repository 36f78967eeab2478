pub mod error;
pub mod extract;
pub mod headers;
pub mod resolve;

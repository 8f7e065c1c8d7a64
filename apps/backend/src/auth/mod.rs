pub mod claims;
pub mod extractor;
pub mod jwt;
pub mod refresher;

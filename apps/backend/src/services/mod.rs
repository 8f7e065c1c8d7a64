pub mod authorization;
pub mod translation;

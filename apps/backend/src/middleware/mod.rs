pub mod authenticate;
pub mod request_trace;

pub use authenticate::Authenticate;
pub use request_trace::RequestTrace;

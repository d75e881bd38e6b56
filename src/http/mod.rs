//! HTTP vocabulary shared by the request model and the command builder

pub mod method;

pub use method::{Method, STANDARD_METHODS};

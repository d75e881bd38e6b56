//! Request input model
//!
//! Captured requests arrive as loosely typed descriptors, either built in
//! code, read from JSON, or converted from HAR entries.

mod descriptor;

pub use descriptor::{parse_descriptors, RequestDescriptor, StringMap};

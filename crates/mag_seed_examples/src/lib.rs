#![forbid(unsafe_code)]

mod support;

pub use support::init_tracing;

/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_BASE_URL,
    MockTaskApi,
    Result,
    TaskApi,
    TaskClient,
    TaskClientError,
};

// Re-export all types
pub use types::*;

/*
[INPUT]:  Task service schema and serde requirements
[OUTPUT]: Typed Rust structs/enums for the wire and form models
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the task schema changes or new types are added
*/

pub mod enums;
pub mod form;
pub mod models;
pub mod requests;

pub use enums::*;
pub use form::*;
pub use models::*;
pub use requests::*;

pub mod payloads;

pub use payloads::{GenerateRequest, GenerateResponse, SubmitRequest};

//! Models module

mod request;
mod response;

pub use request::{AnalyzeRequest, BatchAnalyzeRequest};
pub use response::{AnalyzeResponse, BatchAnalyzeResponse, HealthResponse};

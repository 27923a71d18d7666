//! eojeol-api crate
//!
//! Web server exposing Korean morphological analysis as an HTTP API.
//! Tokens from the Kiwi analyzer are regrouped into eojeol (word) units
//! before being returned.
//!
//! ## Endpoints
//! - `POST /analyze` - Analyze a single text
//! - `POST /batch-analyze` - Analyze a sequence of texts
//! - `GET /health` - Health check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "안녕하세요 형태소 분석기입니다"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse, BatchAnalyzeRequest, BatchAnalyzeResponse};
pub use service::MorphemeService;

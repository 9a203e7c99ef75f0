//! HTTP status API
//!
//! - `GET /api/state`: consistent mission and notification snapshot
//! - `GET /api/tools`: registered call schemas
//! - `POST /api/tools/:name`: invoke a tool with a JSON argument body
//! - `GET /health`

pub mod server;

pub use server::{build_router, ApiServer, ApiServerConfig, HealthResponse};

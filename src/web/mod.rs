//! Page server.
//!
//! Every request to `/` triggers one render pass; upstream bodies are shared
//! between passes only through the HTTP client's response cache.

pub mod handlers;
pub mod router;
pub mod state;


pub use router::create_router;
pub use state::AppState;

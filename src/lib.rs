//! course-search - HTTP search over teacher/course review listings
//!
//! At startup every JSON data file in the configured directory is parsed
//! and concatenated into one immutable in-memory [`Catalog`]. Two endpoints
//! then answer name lookups against it:
//!
//! - `GET /search/teacher?name=...` - exact, case-insensitive
//!   character-subsequence, and pinyin-initial prefix matching over the
//!   teacher field, exact matches first.
//! - `GET /search/course?name=...` - exact and case-sensitive subsequence
//!   matching over the course field.
//!
//! Matched rows come back as a JSON array with null fields dropped and
//! non-ASCII text preserved. A missing or empty `name` parameter is a 400
//! and an empty result set a 404, each with a fixed message.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use course_search::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     course_search::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use catalog::{load_catalog, Catalog, CatalogError, Record};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use matching::{MatchEngine, MatchError};
pub use server::{build_router, start_server};
pub use state::ServerState;

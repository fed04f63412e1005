//! Query-time matching over the catalog.
//!
//! Three strategies, each a linear scan of one record field:
//!
//! - **Exact** — field value equals the query string.
//! - **Subsequence fuzzy** — the query's characters appear in the field
//!   value in order, with anything in between (case-insensitive for teacher
//!   lookups, case-sensitive for course lookups).
//! - **Phonetic initials** — the query is a prefix of the field value's
//!   pinyin-initial transliteration (teacher lookups only).
//!
//! Results are merged as an ordered set union with first-occurrence dedupe,
//! so exact matches always lead.

pub mod engine;
pub mod phonetic;

pub use engine::{MatchEngine, MatchError};
pub use phonetic::phonetic_initials;

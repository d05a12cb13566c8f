//! Title search over the topic catalog.

pub mod filter;
pub mod lowercase;


pub use filter::{ResultKind, SearchResult, format_search_result, search};
pub use lowercase::FastLowercase;

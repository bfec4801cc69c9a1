//! Network data retrieval: page metadata bootstrap and the search transport.

pub mod meta;
pub mod search;

pub use meta::{PageMetadata, get_meta};
pub use search::{SearchConfig, SearchError, decode_results, submit_search};

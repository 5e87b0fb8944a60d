//! Share-link service boundary
//!
//! Short ids, wire shapes, and the async HTTP client for the hosted
//! record store. The detection core never touches this module; the
//! application composes the two.

pub mod client;
pub mod errors;
pub mod short_id;
pub mod types;

pub use client::ShareClient;
pub use errors::{ShareError, ShareResult};
pub use short_id::{SHORT_ID_LEN, generate_short_id, is_valid_short_id};
pub use types::{CreatedShare, ShareRecord, SharedSnippet, SnippetPayload};

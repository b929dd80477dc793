//! Subsidy extraction pipeline: fetch the source page, find the region and
//! trim context in its text, and read a won amount out of it.

pub mod aliases;
pub mod client;
pub mod error;
pub mod extract;
pub mod locator;
pub mod money;
pub mod normalize;

pub use aliases::{aliases_for, fallback_aliases_for};
pub use client::SubsidyPageClient;
pub use error::FetchError;
pub use extract::{extract, ExtractionResult, MatchTier, NotFoundReason, Provenance};
pub use money::parse_won;
pub use normalize::normalize;

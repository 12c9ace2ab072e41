//! Pure resolution steps applied to every candidate entry.
//!
//! - **fields**: three-level metadata precedence
//! - **date**: `lastmod` normalization to a UTC instant
//! - **location**: base URL joining, trailing slash policy, encoding

mod date;
mod fields;
mod location;

pub use date::normalize_date;
pub use fields::resolve_fields;
pub use location::{LocSource, apply_trailing_slash, encode_uri, has_scheme, resolve_location};

//! URL canonicalization, lookup-key expansion, and hashing.
//!
//! A lookup against the threat store starts from a raw URL and passes
//! through three pure stages:
//!
//! 1. [`canonicalize`] - normalize the URL into the authority's canonical
//!    textual form (control-character stripping, host lowercasing and
//!    dot-trimming, percent-decoding, dot-segment removal, fragment/port
//!    stripping).
//! 2. [`expand`] - enumerate every (host-suffix, path-prefix) candidate
//!    key the protocol requires be checked, bounded to at most 5 host
//!    labels.
//! 3. [`digest`] - hash each candidate key with SHA-256 and base64-encode
//!    the digest for transport equality with the remote service.
//!
//! All three stages are total functions: canonicalization falls back to
//! the (control-character stripped) input when parsing fails, expansion
//! of a hostless string yields the empty set, and hashing accepts any
//! string including the empty one.

mod canonicalize;
mod digest;
mod expand;

pub use canonicalize::canonicalize;
pub use digest::digest;
pub use expand::expand;

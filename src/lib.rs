//! Safe-Browsing-style threat-list client library.
//!
//! This library implements the client half of a v4 threat-list protocol:
//! it canonicalizes URLs into the form the list authority expects, derives
//! the bounded set of lookup keys that must be checked against the local
//! threat store, and drives the two network operations of the protocol —
//! incremental list synchronization and full-hash resolution — with
//! backoff signalling on failure.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`urlkeys`] - URL canonicalization, lookup-key expansion, and hashing
//! - [`protocol`] - Wire types for the v4 JSON protocol
//! - [`store`] - The [`ThreatStore`] collaborator trait (local database seam)
//! - [`client`] - The [`Client`] façade and its lookup/sync sessions
//!
//! The persistent threat database, update-payload compression codecs, and
//! HTTP transport internals are collaborator concerns: they live behind
//! the [`ThreatStore`] trait and `reqwest` respectively.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod store;
pub mod urlkeys;

// Re-export commonly used types
pub use client::{Client, LookupOutcome, SyncOutcome};
pub use config::ClientConfig;
pub use error::ClientError;
pub use protocol::{PlatformType, SYNC_DESCRIPTORS, ThreatDescriptor, ThreatEntryType, ThreatType};
pub use store::{BackoffContext, ThreatStore};
pub use urlkeys::{canonicalize, digest, expand};

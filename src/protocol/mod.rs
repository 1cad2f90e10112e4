//! Wire types for the v4 threat-list JSON protocol.
//!
//! Requests and responses for the two endpoints the client drives:
//! `POST /v4/threatListUpdates:fetch` (incremental list synchronization)
//! and `POST /v4/fullHashes:find` (full-hash resolution of locally
//! discovered prefixes). Field names follow the service's camelCase JSON
//! convention; enum values its `SCREAMING_SNAKE_CASE` convention.
//!
//! Update payload contents ([`ThreatEntrySet`]) are opaque to this crate:
//! they are decoded structurally and handed to the
//! [`ThreatStore`](crate::store::ThreatStore) collaborator, which owns
//! decompression and merging.

use serde::{Deserialize, Serialize};

/// Endpoint path for incremental list synchronization.
pub const FETCH_ENDPOINT: &str = "/v4/threatListUpdates:fetch";

/// Endpoint path for full-hash resolution.
pub const FIND_ENDPOINT: &str = "/v4/fullHashes:find";

// ==================== Classification Enums ====================

/// Threat-list category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatType {
    Malware,
    SocialEngineering,
    UnwantedSoftware,
    PotentiallyHarmfulApplication,
}

/// Platform a threat list targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformType {
    AnyPlatform,
    Ios,
}

/// Kind of entry a threat list contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatEntryType {
    Url,
    Executable,
}

/// Compression scheme for update payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompressionType {
    Raw,
}

/// A (threat type, platform type, entry type) triple identifying one
/// threat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreatDescriptor {
    pub threat_type: ThreatType,
    pub platform_type: PlatformType,
    pub threat_entry_type: ThreatEntryType,
}

/// The four threat lists this client synchronizes.
pub const SYNC_DESCRIPTORS: [ThreatDescriptor; 4] = [
    ThreatDescriptor {
        threat_type: ThreatType::Malware,
        platform_type: PlatformType::AnyPlatform,
        threat_entry_type: ThreatEntryType::Url,
    },
    ThreatDescriptor {
        threat_type: ThreatType::Malware,
        platform_type: PlatformType::Ios,
        threat_entry_type: ThreatEntryType::Url,
    },
    ThreatDescriptor {
        threat_type: ThreatType::SocialEngineering,
        platform_type: PlatformType::Ios,
        threat_entry_type: ThreatEntryType::Url,
    },
    ThreatDescriptor {
        threat_type: ThreatType::PotentiallyHarmfulApplication,
        platform_type: PlatformType::Ios,
        threat_entry_type: ThreatEntryType::Url,
    },
];

/// Every threat type a full-hash lookup queries.
pub const FIND_THREAT_TYPES: [ThreatType; 4] = [
    ThreatType::Malware,
    ThreatType::SocialEngineering,
    ThreatType::UnwantedSoftware,
    ThreatType::PotentiallyHarmfulApplication,
];

/// Every platform type a full-hash lookup queries.
pub const FIND_PLATFORM_TYPES: [PlatformType; 2] =
    [PlatformType::AnyPlatform, PlatformType::Ios];

/// Every entry type a full-hash lookup queries.
pub const FIND_ENTRY_TYPES: [ThreatEntryType; 2] =
    [ThreatEntryType::Url, ThreatEntryType::Executable];

// ==================== Shared Request Types ====================

/// Client identity sent with every request; fixed for process lifetime.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub client_id: String,
    pub client_version: String,
}

/// Per-request constraints on update responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    pub max_update_entries: u32,
    pub max_database_entries: u32,
    pub region: String,
    pub supported_compressions: Vec<CompressionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ==================== threatListUpdates:fetch ====================

/// One per-list update request carrying the current state token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUpdateRequest {
    pub threat_type: ThreatType,
    pub platform_type: PlatformType,
    pub threat_entry_type: ThreatEntryType,
    /// Opaque version token from the store; empty for a first fetch.
    pub state: String,
    pub constraints: Constraints,
}

/// Body of `POST /v4/threatListUpdates:fetch`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub client: ClientInfo,
    pub list_update_requests: Vec<ListUpdateRequest>,
}

/// A set of threat entries in an update payload.
///
/// Raw hashes and removal indices are carried through to the store
/// untouched; decompression of other schemes is a store concern.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatEntrySet {
    pub compression_type: Option<CompressionType>,
    pub raw_hashes: Option<RawHashes>,
    pub raw_indices: Option<RawIndices>,
}

/// Concatenated hash prefixes of uniform length, base64 encoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHashes {
    pub prefix_size: u32,
    pub raw_hashes: String,
}

/// Indices into the lexicographically sorted local list, for removals.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndices {
    pub indices: Vec<u32>,
}

/// Expected state checksum after applying an update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checksum {
    pub sha256: Option<String>,
}

/// One per-list update payload from a fetch response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUpdate {
    pub threat_type: ThreatType,
    pub platform_type: PlatformType,
    pub threat_entry_type: ThreatEntryType,
    pub response_type: Option<String>,
    #[serde(default)]
    pub additions: Vec<ThreatEntrySet>,
    #[serde(default)]
    pub removals: Vec<ThreatEntrySet>,
    pub new_client_state: Option<String>,
    pub checksum: Option<Checksum>,
}

/// Body of a 200 response from `threatListUpdates:fetch`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    #[serde(default)]
    pub list_update_responses: Vec<ListUpdate>,
    /// Rate-limit hint: minimum wait before the next update request.
    pub minimum_wait_duration: Option<String>,
}

// ==================== fullHashes:find ====================

/// A single hash entry in a find request or match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatEntry {
    pub hash: String,
}

/// The lists and entries a find request queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatInfo {
    pub threat_types: Vec<ThreatType>,
    pub platform_types: Vec<PlatformType>,
    pub threat_entry_types: Vec<ThreatEntryType>,
    pub threat_entries: Vec<ThreatEntry>,
}

/// Body of `POST /v4/fullHashes:find`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRequest {
    pub client: ClientInfo,
    pub threat_info: ThreatInfo,
}

/// A confirmed threat match from a find response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatMatch {
    pub threat_type: ThreatType,
    pub platform_type: PlatformType,
    pub threat_entry_type: ThreatEntryType,
    pub threat: ThreatEntry,
    pub cache_duration: Option<String>,
}

/// Body of a 200 response from `fullHashes:find`; empty `matches` means
/// no queried prefix resolved to a confirmed threat.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse {
    #[serde(default)]
    pub matches: Vec<ThreatMatch>,
    pub minimum_wait_duration: Option<String>,
    pub negative_cache_duration: Option<String>,
}

// ==================== Error Envelope ====================

/// The `{code, message}` payload inside a non-200 error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    pub status: Option<String>,
}

/// Structured error envelope returned on non-200 responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

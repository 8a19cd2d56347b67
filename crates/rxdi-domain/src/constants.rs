//! Domain constants
//!
//! Field names and sentinels that make up the structural form of tokens and
//! provider descriptors. Any copy of this crate that agrees on these strings
//! recognises the other's values.

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================

/// Sentinel stored in the marker field of every tagged token
pub const TOKEN_REFLECT_NAME: &str = "@@RXDI Token v1@@";

/// Marker field carrying [`TOKEN_REFLECT_NAME`]
pub const TOKEN_REFLECT_FIELD: &str = "_reflectName";

/// Field carrying the identifier wrapped by a tagged token
pub const TOKEN_ID_FIELD: &str = "tokenId";

// ============================================================================
// PROVIDER DESCRIPTOR CONSTANTS
// ============================================================================

/// Token the provider binds
pub const PROVIDE_FIELD: &str = "provide";

/// Class provider target
pub const USE_CLASS_FIELD: &str = "useClass";

/// Alias provider target
pub const USE_EXISTING_FIELD: &str = "useExisting";

/// Value provider payload
pub const USE_VALUE_FIELD: &str = "useValue";

/// Factory provider function
pub const USE_FACTORY_FIELD: &str = "useFactory";

/// Factory provider dependency list
pub const DEPS_FIELD: &str = "deps";

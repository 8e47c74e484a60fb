use serde::Serialize;
use soar_audit_api::{AuditError, AuditResult};
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Stable content hash of serializable data.
///
/// The value is encoded as CBOR and hashed with XxHash64 under seed 0, so
/// equal content hashes equally across runs and machines.
pub fn content_hash<T: Serialize>(data: &T) -> AuditResult<u64> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor).map_err(|e| {
        AuditError::SerializationError(format!("Failed to serialize data for hashing: {e}"))
    })?;
    hasher.write(&cbor);
    Ok(hasher.finish())
}

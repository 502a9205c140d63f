use serde::{Deserialize, Serialize};

/// Response envelope wrapped around every payload the service returns.
///
/// The payload shape differs per call site, so the envelope is generic:
/// a caller fetching revenue rows reads an `Rs<Vec<RevenueData>>`, while
/// one inspecting an envelope before committing to a shape can read an
/// `Rs<serde_json::Value>`. The four fields are independent of each
/// other, and `status` follows whatever numbering convention the
/// producing service uses; this crate does not interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rs<T> {
    /// Payload; shape determined by the specific call site.
    pub data: T,

    /// Free-text elaboration, usually diagnostic or error detail.
    pub details: String,

    /// Human-readable summary of the outcome.
    pub message: String,

    /// Numeric status code, under the producer's convention.
    pub status: i64,
}

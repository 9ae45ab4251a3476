//! Output formats for the CLI
//!
//! Human output is the bare `\date{}` line. JSON output wraps the resolved
//! fields in a schema-versioned [`JsonResponse`].

use serde::{Deserialize, Serialize};

use crate::dater::DateAndVersion;
use crate::error::RepositoryQueryError;

/// Current JSON output schema version
pub const DOCDATE_JSON_SCHEMA_VERSION: &str = "1.0.0";

/// Wrapper for all JSON responses
///
/// Every JSON response includes schema_version and execution_id for
/// parsing stability and traceability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for parsing stability
    pub schema_version: String,
    /// Unique execution ID for this run
    pub execution_id: String,
    /// Name of the tool that produced the response
    pub tool: String,
    /// RFC 3339 time the response was produced
    pub timestamp: String,
    /// Response data
    pub data: T,
}

impl<T> JsonResponse<T> {
    /// Create a new JSON response
    pub fn new(data: T, execution_id: &str) -> Self {
        JsonResponse {
            schema_version: DOCDATE_JSON_SCHEMA_VERSION.to_string(),
            execution_id: execution_id.to_string(),
            tool: "docdate".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            data,
        }
    }
}

/// Resolved date and version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateVersionResponse {
    /// "<FullMonth> <DD>, <YYYY>"
    pub date: String,
    /// Describe string or short id
    pub version: String,
    /// "describe" or "short_id"
    pub version_source: String,
    /// Head commit author time, seconds since the epoch
    pub commit_timestamp: i64,
    /// The complete `\date{}` line
    pub formatted: String,
}

impl From<&DateAndVersion> for DateVersionResponse {
    fn from(resolved: &DateAndVersion) -> Self {
        let version = &resolved.revision.version;
        DateVersionResponse {
            date: resolved.date.clone(),
            version: version.as_str().to_string(),
            version_source: version.source().to_string(),
            commit_timestamp: resolved.revision.commit_timestamp,
            formatted: resolved.to_string(),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code, e.g. "DOC-GIT-001"
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&RepositoryQueryError> for ErrorResponse {
    fn from(err: &RepositoryQueryError) -> Self {
        ErrorResponse {
            error: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The bare `\date{}` line
    #[default]
    Human,
    /// JSON output with schema versioning
    Json,
}

impl OutputFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Some(OutputFormat::Human),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Generate a unique execution ID for this run
///
/// Uses timestamp + process ID for uniqueness.
pub fn generate_execution_id() -> String {
    let timestamp = chrono::Utc::now().timestamp();
    format!("{:x}-{:x}", timestamp, std::process::id())
}

/// Output JSON to stdout
pub fn output_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

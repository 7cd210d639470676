//! Types for node donation endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Review state of a donation, edit or deletion application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    /// Awaiting review.
    Pending,
    /// Approved.
    Approved,
    /// Rejected, see `reject_reason`.
    Rejected,
    /// A status this client does not know about.
    Unknown(i32),
}

impl From<i32> for ReviewStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => ReviewStatus::Pending,
            1 => ReviewStatus::Approved,
            2 => ReviewStatus::Rejected,
            other => ReviewStatus::Unknown(other),
        }
    }
}

/// A node donation application.
///
/// Sent as-is to apply; review fields are ignored by the server on submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeDonate {
    /// Application ID.
    pub donate_id: i64,
    /// Applicant.
    pub username: String,
    /// Proposed node name.
    pub node_name: String,
    /// Address frpc will connect to.
    pub hostname: String,
    /// Description.
    pub description: String,
    /// frps bind port.
    pub service_port: i32,
    /// frps dashboard port.
    pub admin_port: i32,
    /// frps dashboard password.
    pub admin_pass: String,
    /// Groups allowed to use the node.
    pub allow_group: String,
    /// Allowed remote port ranges.
    pub allow_port: String,
    /// Allowed proxy types.
    pub allow_type: String,
    /// Region.
    pub region: String,
    /// Advertised bandwidth.
    pub bandwidth: String,
    /// Raw review status, see [`NodeDonate::review_status`].
    pub status: i32,
    /// Reason given on rejection.
    pub reject_reason: String,
    /// Submission time (unix seconds).
    pub apply_time: i64,
    /// Review time (unix seconds).
    pub review_time: i64,
    /// Node created from the application, once approved.
    pub node_id: i64,
}

impl NodeDonate {
    /// Decoded review status.
    pub fn review_status(&self) -> ReviewStatus {
        ReviewStatus::from(self.status)
    }
}

/// A request to remove a donated node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeDeleteRequest {
    /// Application ID.
    pub id: i64,
    /// Node to remove.
    pub node_id: i64,
    /// Applicant.
    pub username: String,
    /// Reason for removal.
    pub reason: String,
    /// Raw review status.
    pub status: i32,
    /// Reason given on rejection.
    pub reject_reason: String,
    /// Submission time (unix seconds).
    pub apply_time: i64,
    /// Review time (unix seconds).
    pub review_time: i64,
}

impl NodeDeleteRequest {
    /// Decoded review status.
    pub fn review_status(&self) -> ReviewStatus {
        ReviewStatus::from(self.status)
    }
}

/// A request to change a donated node.
///
/// Used both to apply and in the listing of past applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeEditRequest {
    /// Application ID.
    pub id: i64,
    /// Node to change.
    pub node_id: i64,
    /// Applicant.
    pub username: String,
    /// New node name.
    pub node_name: String,
    /// New address.
    pub hostname: String,
    /// New description.
    pub description: String,
    /// New frps bind port.
    pub service_port: i32,
    /// New frps dashboard port.
    pub admin_port: i32,
    /// New frps dashboard password.
    pub admin_pass: String,
    /// Groups allowed to use the node.
    pub allow_group: String,
    /// Allowed remote port ranges.
    pub allow_port: String,
    /// Allowed proxy types.
    pub allow_type: String,
    /// Region.
    pub region: String,
    /// Advertised bandwidth.
    pub bandwidth: String,
    /// Raw review status.
    pub status: i32,
    /// Reason given on rejection.
    pub reject_reason: String,
    /// Submission time (unix seconds).
    pub apply_time: i64,
    /// Review time (unix seconds).
    pub review_time: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NodeDeleteApply<'a> {
    pub node_id: i64,
    pub reason: &'a str,
}

/// Parameters of the install script; the server expects `nodeId` as a string.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallScriptRequest {
    /// Node the script installs.
    #[serde_as(as = "DisplayFromStr")]
    pub node_id: i64,
    /// Target operating system, e.g. `linux`.
    pub system: String,
    /// Target architecture, e.g. `amd64`.
    pub arch: String,
    /// Node flavour.
    pub node_type: String,
}

/// Generated install script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallScript {
    /// Script body.
    pub script: String,
    /// One-line command that fetches and runs the script.
    pub command: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_script_request_sends_node_id_as_string() {
        let req = InstallScriptRequest {
            node_id: 9_007_199_254_740_993,
            system: "linux".into(),
            arch: "amd64".into(),
            node_type: "frps".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nodeId"], "9007199254740993");

        let back: InstallScriptRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_review_status() {
        let donate = NodeDonate {
            status: 2,
            reject_reason: "port range too small".into(),
            ..NodeDonate::default()
        };
        assert_eq!(donate.review_status(), ReviewStatus::Rejected);
        assert_eq!(ReviewStatus::from(7), ReviewStatus::Unknown(7));
    }
}

// Wire envelope codec for the VyOS HTTP API.
//
// Every endpoint speaks the same protocol: a multipart/form-data POST
// with two text fields, `data` (a JSON-encoded operation envelope) and
// `key` (the auth token), answered by a `{success, data, error}` JSON
// object. This module owns both directions of that contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Wire-level operation discriminator sent in the envelope's `op` field.
///
/// Serialized to the exact strings the appliance expects (`showConfig`,
/// `returnValues`, ...); do not reorder or rename without checking the
/// VyOS API documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpMode {
    Show,
    Set,
    Delete,
    Comment,
    Generate,
    Configure,
    ShowConfig,
    ReturnValues,
    Exists,
    Save,
    Load,
    Add,
    Poweroff,
    Reboot,
    Reset,
}

/// A single operation envelope.
///
/// Exactly one payload shape is active per endpoint family: `path` for
/// configuration-tree operations, `file` for `/config-file`, `url`/`name`
/// for `/image`. Absent fields are omitted from the JSON entirely --
/// the appliance rejects `null` placeholders.
///
/// `path` is an `Option` so that "present but empty" (`"path":[]`,
/// meaning the whole configuration tree) stays distinct from "omitted".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub op: OpMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Request {
    /// An op-only request with every payload field omitted (e.g. saving
    /// to the appliance's default config location).
    pub fn bare(op: OpMode) -> Self {
        Self {
            op,
            path: None,
            file: None,
            url: None,
            name: None,
        }
    }

    /// A path-based request (`/show`, `/configure`, `/retrieve`, ...).
    pub fn with_path(op: OpMode, path: Vec<String>) -> Self {
        Self {
            op,
            path: Some(path),
            file: None,
            url: None,
            name: None,
        }
    }

    /// A file-based request (`/config-file`).
    pub fn with_file(op: OpMode, file: impl Into<String>) -> Self {
        Self {
            op,
            path: None,
            file: Some(file.into()),
            url: None,
            name: None,
        }
    }

    /// A url-based request (`/image` add).
    pub fn with_url(op: OpMode, url: impl Into<String>) -> Self {
        Self {
            op,
            path: None,
            file: None,
            url: Some(url.into()),
            name: None,
        }
    }

    /// A name-based request (`/image` delete).
    pub fn with_name(op: OpMode, name: impl Into<String>) -> Self {
        Self {
            op,
            path: None,
            file: None,
            url: None,
            name: Some(name.into()),
        }
    }
}

/// The generic response envelope returned by every endpoint.
///
/// `data` varies by endpoint -- sometimes a plain string, sometimes a
/// nested object or array -- so it is kept as a dynamic [`Value`] for the
/// caller to pattern-match. A `success: false` envelope is an
/// appliance-reported command failure, not a transport fault: it is
/// returned as an `Ok` value, never as an [`Error`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub error: Option<String>,
}

/// Serialize a request payload (a single [`Request`] or a batch slice)
/// to the JSON string carried in the `data` form field.
pub(crate) fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<String, Error> {
    serde_json::to_string(payload).map_err(Error::Encode)
}

/// Build the two-field multipart form: `data` first, then `key`.
///
/// Both parts have known length, so reqwest emits an exact
/// `Content-Length` and carries the boundary in the `Content-Type`
/// header.
pub(crate) fn form(data: String, key: &str) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new()
        .text("data", data)
        .text("key", key.to_owned())
}

/// Parse a raw response body into the envelope.
pub(crate) fn decode(body: &str) -> Result<ApiResponse, Error> {
    serde_json::from_str(body).map_err(|e| Error::Decode {
        message: e.to_string(),
        body: body.to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn op_mode_wire_strings() {
        assert_eq!(json!(OpMode::Show), json!("show"));
        assert_eq!(json!(OpMode::ShowConfig), json!("showConfig"));
        assert_eq!(json!(OpMode::ReturnValues), json!("returnValues"));
        assert_eq!(json!(OpMode::Poweroff), json!("poweroff"));
        assert_eq!(json!(OpMode::Exists), json!("exists"));
    }

    #[test]
    fn path_request_omits_unused_fields() {
        let req = Request::with_path(OpMode::Set, vec!["system".into(), "host-name".into()]);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, json!({ "op": "set", "path": ["system", "host-name"] }));
    }

    #[test]
    fn empty_path_is_present_not_omitted() {
        // "whole tree" retrieval: the appliance needs `"path":[]` on the
        // wire, not an absent field.
        let req = Request::with_path(OpMode::ShowConfig, Vec::new());
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, json!({ "op": "showConfig", "path": [] }));
    }

    #[test]
    fn bare_request_is_op_only() {
        let v = serde_json::to_value(Request::bare(OpMode::Save)).unwrap();
        assert_eq!(v, json!({ "op": "save" }));
    }

    #[test]
    fn file_request_omits_path() {
        let req = Request::with_file(OpMode::Load, "/config/backup.boot");
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, json!({ "op": "load", "file": "/config/backup.boot" }));
    }

    #[test]
    fn batch_encodes_as_json_array() {
        let batch = vec![
            Request::with_path(OpMode::Set, vec!["a".into()]),
            Request::with_path(OpMode::Set, vec!["b".into(), "c".into()]),
        ];
        let s = encode(&batch).unwrap();
        let v: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(
            v,
            json!([
                { "op": "set", "path": ["a"] },
                { "op": "set", "path": ["b", "c"] },
            ])
        );
    }

    #[test]
    fn request_round_trips_through_json() {
        let req = Request::with_name(OpMode::Delete, "1.3.3");
        let back: Request = serde_json::from_str(&encode(&req).unwrap()).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn decode_envelope_with_object_data() {
        let resp = decode(r#"{"success": true, "data": {"version": "1.4"}, "error": null}"#)
            .unwrap();
        assert!(resp.success);
        assert_eq!(resp.data, json!({"version": "1.4"}));
        assert!(resp.error.is_none());
    }

    #[test]
    fn decode_envelope_with_string_data() {
        // Some endpoints return a plain string rather than an object.
        let resp = decode(r#"{"success": true, "data": "Version: VyOS 1.4"}"#).unwrap();
        assert_eq!(resp.data, json!("Version: VyOS 1.4"));
    }

    #[test]
    fn decode_envelope_with_appliance_error() {
        let resp = decode(r#"{"success": false, "error": "Configuration path not found"}"#)
            .unwrap();
        assert!(!resp.success);
        assert_eq!(resp.data, Value::Null);
        assert_eq!(resp.error.as_deref(), Some("Configuration path not found"));
    }

    #[test]
    fn decode_malformed_body_is_decode_error() {
        let err = decode("<html>502 Bad Gateway</html>").unwrap_err();
        match err {
            Error::Decode { body, .. } => assert!(body.contains("502")),
            other => panic!("expected Decode error, got: {other:?}"),
        }
    }
}

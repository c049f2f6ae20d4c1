// Configuration retrieval and mutation.
//
// Three endpoints share this family: `/retrieve` for reads (showConfig,
// returnValues, exists), `/configure` for tree mutations (set, delete,
// comment), and `/config-file` for save/load. Mutations are serialized
// under the client's mutating-call lock; reads are not.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::Shared;
use crate::envelope::{ApiResponse, OpMode, Request};
use crate::error::Error;
use crate::path::{optional_path, required_path};

/// Options for [`ConfigService::get`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RetrieveOptions {
    /// Retrieve all values of a list-typed node (`op=returnValues`)
    /// instead of the node subtree (`op=showConfig`).
    pub multi_value: bool,
}

/// Configuration retrieval and mutation.
#[derive(Debug)]
pub struct ConfigService {
    shared: Arc<Shared>,
}

impl ConfigService {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    // ── Reads: /retrieve ─────────────────────────────────────────────

    /// Retrieve the configuration at `path`.
    ///
    /// A blank path retrieves the entire tree (sent as `"path":[]`).
    /// Pass [`RetrieveOptions`] with `multi_value` set to read every
    /// value of a list-typed node.
    pub async fn get(
        &self,
        cancel: Option<&CancellationToken>,
        path: &str,
        options: Option<&RetrieveOptions>,
    ) -> Result<ApiResponse, Error> {
        let op = if options.is_some_and(|o| o.multi_value) {
            OpMode::ReturnValues
        } else {
            OpMode::ShowConfig
        };
        let request = Request::with_path(op, optional_path(path));
        self.shared.send(cancel, "/retrieve", &request).await
    }

    /// Check whether a configuration path exists (`op=exists`).
    pub async fn exists(
        &self,
        cancel: Option<&CancellationToken>,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_path(OpMode::Exists, optional_path(path));
        self.shared.send(cancel, "/retrieve", &request).await
    }

    // ── Mutations: /configure ────────────────────────────────────────

    /// Set one or more configuration paths in a single commit.
    ///
    /// Every path is validated up front; any blank entry fails the whole
    /// batch with [`Error::EmptyPath`] before a single byte is sent. The
    /// batch goes out as one JSON array in one POST, so N mutations cost
    /// one round trip and one commit.
    pub async fn set(
        &self,
        cancel: Option<&CancellationToken>,
        paths: &[&str],
    ) -> Result<ApiResponse, Error> {
        if paths.is_empty() {
            return Err(Error::EmptyPath);
        }

        let mut batch = Vec::with_capacity(paths.len());
        for raw in paths {
            batch.push(Request::with_path(OpMode::Set, required_path(raw)?));
        }

        self.shared
            .send_locked(cancel, "/configure", batch.as_slice())
            .await
    }

    /// Delete a configuration path.
    pub async fn delete(
        &self,
        cancel: Option<&CancellationToken>,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_path(OpMode::Delete, required_path(path)?);
        self.shared.send_locked(cancel, "/configure", &request).await
    }

    /// Attach a comment to a configuration path.
    pub async fn comment(
        &self,
        cancel: Option<&CancellationToken>,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_path(OpMode::Comment, required_path(path)?);
        self.shared.send_locked(cancel, "/configure", &request).await
    }

    // ── Config files: /config-file ───────────────────────────────────

    /// Save the running configuration.
    ///
    /// An empty `file` saves to the appliance's default location
    /// (`/config/config.boot`); the `file` field is then omitted from
    /// the wire envelope entirely.
    pub async fn save(
        &self,
        cancel: Option<&CancellationToken>,
        file: &str,
    ) -> Result<ApiResponse, Error> {
        let request = if file.is_empty() {
            Request::bare(OpMode::Save)
        } else {
            Request::with_file(OpMode::Save, file)
        };
        self.shared
            .send_locked(cancel, "/config-file", &request)
            .await
    }

    /// Load a configuration file into the running config.
    ///
    /// Unlike [`save`](Self::save), the file name is mandatory; a blank
    /// name fails with [`Error::MissingFile`].
    pub async fn load(
        &self,
        cancel: Option<&CancellationToken>,
        file: &str,
    ) -> Result<ApiResponse, Error> {
        if file.is_empty() {
            return Err(Error::MissingFile);
        }
        let request = Request::with_file(OpMode::Load, file);
        self.shared
            .send_locked(cancel, "/config-file", &request)
            .await
    }
}

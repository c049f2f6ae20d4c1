// Artifact generation (keys, certificates, wireguard material, ...).

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::Shared;
use crate::envelope::{ApiResponse, OpMode, Request};
use crate::error::Error;
use crate::path::required_path;

/// `generate` commands (`POST /generate` with `op=generate`).
#[derive(Debug)]
pub struct GenerateService {
    shared: Arc<Shared>,
}

impl GenerateService {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Run a generate command, e.g. `run(cancel, "pki wireguard key-pair")`.
    ///
    /// The path must name what to generate; a blank path fails with
    /// [`Error::EmptyPath`] before any network call.
    pub async fn run(
        &self,
        cancel: Option<&CancellationToken>,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_path(OpMode::Generate, required_path(path)?);
        self.shared.send(cancel, "/generate", &request).await
    }
}

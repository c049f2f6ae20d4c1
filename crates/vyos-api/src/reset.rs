// Counter and state resets.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::Shared;
use crate::envelope::{ApiResponse, OpMode, Request};
use crate::error::Error;
use crate::path::required_path;

/// `reset` commands (`POST /reset` with `op=reset`).
#[derive(Debug)]
pub struct ResetService {
    shared: Arc<Shared>,
}

impl ResetService {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Run a reset command, e.g. `run(cancel, "ip bgp 192.0.2.1")`.
    pub async fn run(
        &self,
        cancel: Option<&CancellationToken>,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_path(OpMode::Reset, required_path(path)?);
        self.shared.send(cancel, "/reset", &request).await
    }
}

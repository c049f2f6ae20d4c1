// Operational-mode show commands.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::Shared;
use crate::envelope::{ApiResponse, OpMode, Request};
use crate::error::Error;
use crate::path::optional_path;

/// Operational-mode `show` commands.
///
/// `POST /show` with `op=show`. The response `data` is usually the raw
/// command output as a plain string.
#[derive(Debug)]
pub struct ShowService {
    shared: Arc<Shared>,
}

impl ShowService {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Run a show command, e.g. `run(cancel, "system image")`.
    pub async fn run(
        &self,
        cancel: Option<&CancellationToken>,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_path(OpMode::Show, optional_path(path));
        self.shared.send(cancel, "/show", &request).await
    }
}

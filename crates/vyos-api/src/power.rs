// Power control.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::Shared;
use crate::envelope::{ApiResponse, OpMode, Request};
use crate::error::Error;

/// Power control (`POST /poweroff`, `POST /reboot`).
///
/// Both operations send `path: ["now"]` -- the API has no deferred
/// shutdown scheduling.
#[derive(Debug)]
pub struct PowerService {
    shared: Arc<Shared>,
}

fn now_path() -> Vec<String> {
    vec!["now".to_owned()]
}

impl PowerService {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Power off the appliance immediately.
    pub async fn power_off(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_path(OpMode::Poweroff, now_path());
        self.shared.send(cancel, "/poweroff", &request).await
    }

    /// Reboot the appliance immediately.
    pub async fn reboot(&self, cancel: Option<&CancellationToken>) -> Result<ApiResponse, Error> {
        let request = Request::with_path(OpMode::Reboot, now_path());
        self.shared.send(cancel, "/reboot", &request).await
    }
}

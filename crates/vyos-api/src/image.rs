// System image management.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::Shared;
use crate::envelope::{ApiResponse, OpMode, Request};
use crate::error::Error;

/// System image management (`POST /image`).
///
/// Both operations mutate appliance state and are serialized under the
/// client's mutating-call lock.
#[derive(Debug)]
pub struct ImageService {
    shared: Arc<Shared>,
}

impl ImageService {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Install a new system image from a URL (`op=add`).
    pub async fn add(
        &self,
        cancel: Option<&CancellationToken>,
        url: &str,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_url(OpMode::Add, url);
        self.shared.send_locked(cancel, "/image", &request).await
    }

    /// Delete an installed system image by name (`op=delete`).
    ///
    /// Some older clients sent `op=add` together with `name` for
    /// deletion; the documented contract is `op=delete`.
    pub async fn delete(
        &self,
        cancel: Option<&CancellationToken>,
        name: &str,
    ) -> Result<ApiResponse, Error> {
        let request = Request::with_name(OpMode::Delete, name);
        self.shared.send_locked(cancel, "/image", &request).await
    }
}

// VyOS API client: configuration surface and request exchange.
//
// The client is copy-on-write: `with_url`/`with_token`/`insecure` return
// a brand-new `Client` with copied scalars, a freshly built transport,
// and a fresh mutating-call lock. A base client can therefore be forked
// into per-appliance variants and shared across tasks freely.
//
// Endpoint families (show, config, image, power, ...) are exposed as
// explicit service handles built once at client construction; each holds
// only a reference to the shared transport + configuration.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::config::ConfigService;
use crate::envelope::{self, ApiResponse};
use crate::error::Error;
use crate::generate::GenerateService;
use crate::image::ImageService;
use crate::power::PowerService;
use crate::reset::ResetService;
use crate::show::ShowService;
use crate::transport::{TlsMode, TransportConfig};

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("vyos-api/", env!("CARGO_PKG_VERSION"));

/// State shared between a client and its endpoint services.
#[derive(Debug)]
pub(crate) struct Shared {
    http: reqwest::Client,
    base_url: Option<Url>,
    token: SecretString,
    user_agent: String,
    transport: TransportConfig,
    /// Serializes mutating calls (`/configure`, `/config-file`, `/image`)
    /// for the lifetime of encode + send + decode. Read calls never take
    /// this lock and may run arbitrarily concurrently.
    mutate_lock: Mutex<()>,
}

/// Client for the VyOS router HTTP configuration API.
///
/// ```no_run
/// # async fn demo() -> Result<(), vyos_api::Error> {
/// use tokio_util::sync::CancellationToken;
///
/// let client = vyos_api::Client::new()?
///     .with_url("https://10.1.1.1")?
///     .with_token("AUTH_KEY")?
///     .insecure()?;
///
/// let cancel = CancellationToken::new();
/// let resp = client.show().run(Some(&cancel), "system image").await?;
/// println!("{}", resp.data);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    shared: Arc<Shared>,
    show: ShowService,
    config: ConfigService,
    generate: GenerateService,
    reset: ResetService,
    image: ImageService,
    power: PowerService,
}

impl Client {
    /// Create a client with a default transport (system TLS roots,
    /// 30 second timeout). Configure it with [`with_url`](Self::with_url)
    /// and [`with_token`](Self::with_token).
    pub fn new() -> Result<Self, Error> {
        let transport = TransportConfig::default();
        let http = transport.build_client(DEFAULT_USER_AGENT)?;
        Ok(Self::assemble(Shared {
            http,
            base_url: None,
            token: SecretString::from(String::new()),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            transport,
            mutate_lock: Mutex::new(()),
        }))
    }

    /// Create a client around a pre-built `reqwest::Client` pointed at
    /// the given base URL.
    ///
    /// Use this to inject a transport (e.g. one aimed at a mock server
    /// in tests). Note that the copy-on-write builders rebuild the
    /// transport from [`TransportConfig`], so derived clients do not
    /// inherit the injected instance.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base = Url::parse(base_url)?;
        Ok(Self::assemble(Shared {
            http,
            base_url: Some(base),
            token: SecretString::from(String::new()),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            transport: TransportConfig::default(),
            mutate_lock: Mutex::new(()),
        }))
    }

    fn assemble(shared: Shared) -> Self {
        let shared = Arc::new(shared);
        Self {
            show: ShowService::new(Arc::clone(&shared)),
            config: ConfigService::new(Arc::clone(&shared)),
            generate: GenerateService::new(Arc::clone(&shared)),
            reset: ResetService::new(Arc::clone(&shared)),
            image: ImageService::new(Arc::clone(&shared)),
            power: PowerService::new(Arc::clone(&shared)),
            shared,
        }
    }

    /// Rebuild into a new client, copying scalars and creating a fresh
    /// transport and mutating-call lock.
    fn fork(
        &self,
        base_url: Option<Url>,
        token: SecretString,
        transport: TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client(&self.shared.user_agent)?;
        Ok(Self::assemble(Shared {
            http,
            base_url,
            token,
            user_agent: self.shared.user_agent.clone(),
            transport,
            mutate_lock: Mutex::new(()),
        }))
    }

    // ── Copy-on-write builders ───────────────────────────────────────

    /// Return a new client with the given base URL. The original client
    /// is left untouched.
    pub fn with_url(&self, url: &str) -> Result<Self, Error> {
        let base = Url::parse(url)?;
        self.fork(
            Some(base),
            self.shared.token.clone(),
            self.shared.transport.clone(),
        )
    }

    /// Return a new client authenticating with the given API token.
    pub fn with_token(&self, token: &str) -> Result<Self, Error> {
        self.fork(
            self.shared.base_url.clone(),
            SecretString::from(token.to_owned()),
            self.shared.transport.clone(),
        )
    }

    /// Return a new client that skips TLS certificate verification.
    ///
    /// VyOS ships with a self-signed certificate, so this is commonly
    /// needed. Only the new copy's transport is affected.
    pub fn insecure(&self) -> Result<Self, Error> {
        let mut transport = self.shared.transport.clone();
        transport.tls = TlsMode::DangerAcceptInvalid;
        self.fork(
            self.shared.base_url.clone(),
            self.shared.token.clone(),
            transport,
        )
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&Url> {
        self.shared.base_url.as_ref()
    }

    /// The User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.shared.user_agent
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.shared.http
    }

    // ── Endpoint services ────────────────────────────────────────────

    /// Operational-mode `show` commands (`/show`).
    pub fn show(&self) -> &ShowService {
        &self.show
    }

    /// Configuration retrieval and mutation (`/retrieve`, `/configure`,
    /// `/config-file`).
    pub fn config(&self) -> &ConfigService {
        &self.config
    }

    /// Artifact generation (`/generate`).
    pub fn generate(&self) -> &GenerateService {
        &self.generate
    }

    /// Counter/state resets (`/reset`).
    pub fn reset(&self) -> &ResetService {
        &self.reset
    }

    /// System image management (`/image`).
    pub fn image(&self) -> &ImageService {
        &self.image
    }

    /// Power control (`/poweroff`, `/reboot`).
    pub fn power(&self) -> &PowerService {
        &self.power
    }

    // ── Convenience forwarders ───────────────────────────────────────

    /// Power off the appliance. Shorthand for [`PowerService::power_off`].
    pub async fn power_off(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<ApiResponse, Error> {
        self.power.power_off(cancel).await
    }

    /// Reboot the appliance. Shorthand for [`PowerService::reboot`].
    pub async fn reboot(&self, cancel: Option<&CancellationToken>) -> Result<ApiResponse, Error> {
        self.power.reboot(cancel).await
    }
}

impl Shared {
    fn endpoint_url(&self, endpoint: &str) -> Result<String, Error> {
        let base = self.base_url.as_ref().ok_or(Error::MissingBaseUrl)?;
        Ok(format!("{}{endpoint}", base.as_str().trim_end_matches('/')))
    }

    /// Send one exchange: encode the payload, POST the multipart form,
    /// decode the envelope.
    ///
    /// Fails fast with [`Error::MissingContext`] when no cancellation
    /// token is supplied -- every exchange must be cancellable. A token
    /// firing mid-flight aborts with [`Error::Cancelled`]. All validation
    /// happens before any bytes reach the wire.
    pub(crate) async fn send<T: Serialize + ?Sized>(
        &self,
        cancel: Option<&CancellationToken>,
        endpoint: &str,
        payload: &T,
    ) -> Result<ApiResponse, Error> {
        let Some(cancel) = cancel else {
            return Err(Error::MissingContext);
        };

        let url = self.endpoint_url(endpoint)?;
        let data = envelope::encode(payload)?;
        let form = envelope::form(data, self.token.expose_secret());

        debug!(endpoint, "POST {url}");

        let exchange = async {
            let resp = self
                .http
                .post(&url)
                .header(reqwest::header::USER_AGENT, &self.user_agent)
                .multipart(form)
                .send()
                .await
                .map_err(Error::Transport)?;

            let body = resp.text().await.map_err(Error::Transport)?;
            envelope::decode(&body)
        };

        tokio::select! {
            result = exchange => result,
            () = cancel.cancelled() => Err(Error::Cancelled),
        }
    }

    /// Like [`send`](Self::send), but holds the client's mutating-call
    /// lock for the full encode + send + decode span.
    pub(crate) async fn send_locked<T: Serialize + ?Sized>(
        &self,
        cancel: Option<&CancellationToken>,
        endpoint: &str,
        payload: &T,
    ) -> Result<ApiResponse, Error> {
        let _guard = self.mutate_lock.lock().await;
        self.send(cancel, endpoint, payload).await
    }
}

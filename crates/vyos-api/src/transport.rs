// Transport configuration for building reqwest::Client instances.
//
// Every copy-on-write client builder re-runs this, so a derived client
// always gets a fresh connection pool rather than sharing the original's.

use std::time::Duration;

use crate::error::Error;

/// TLS verification mode for the appliance connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Accept any certificate (VyOS ships with a self-signed cert).
    DangerAcceptInvalid,
}

/// Transport settings shared by all endpoint services of one client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self, user_agent: &str) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent);

        if self.tls == TlsMode::DangerAcceptInvalid {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(|e| Error::Build(e.to_string()))
    }
}

// vyos-api: Async Rust client for the VyOS router HTTP configuration API.
//
// Every endpoint is a multipart/form-data POST carrying a JSON operation
// envelope (`data`) and the auth token (`key`), answered by a generic
// `{success, data, error}` envelope. See `envelope` for the wire codec
// and `client` for the copy-on-write configuration surface.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod image;
pub mod path;
pub mod power;
pub mod reset;
pub mod show;
pub mod transport;

pub use client::{Client, DEFAULT_USER_AGENT};
pub use config::{ConfigService, RetrieveOptions};
pub use envelope::{ApiResponse, OpMode, Request};
pub use error::Error;
pub use generate::GenerateService;
pub use image::ImageService;
pub use power::PowerService;
pub use reset::ResetService;
pub use show::ShowService;
pub use transport::{TlsMode, TransportConfig};

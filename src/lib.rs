//! # OpenPGP Bridge: Typed Calls into an External OpenPGP Engine
//!
//! `openpgp-bridge` lets application code call a small set of OpenPGP operations
//! (encrypt, decrypt, sign, verify, symmetric variants, key generation) that are
//! implemented by an engine living outside the calling runtime.
//!
//! Callers never touch raw bytes, wire formats, or transport selection: every
//! operation takes typed arguments and returns a typed value or an [`Error`].
//!
//! ## Core Concepts
//!
//! - **`OpenPgp`**: The facade. One async method per engine operation.
//! - **`Dispatcher`**: Probes once for an in-process `NativeBinding` and falls back
//!   to the asynchronous `HostChannel` when none is available.
//! - **`wire`**: The bincode request/response schema shared with the engine.
//! - **`Error`**: Either an `EngineError` reported by the engine, or a
//!   `TransportError` when the call never completed. The two are never mixed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use openpgp_bridge::prelude::*;
//! use std::sync::Arc;
//!
//! async fn run(channel: Arc<dyn HostChannel>) -> Result<()> {
//!     let pgp = OpenPgp::with_host(BridgeConfig::default(), channel, None);
//!
//!     let keys = pgp
//!         .generate(Some(&Options::new().with_name("Alice").with_email("alice@example.com")))
//!         .await?;
//!
//!     let armored = pgp.encrypt("hello", keys.public_key(), None, None, None).await?;
//!     let plain = pgp.decrypt(&armored, keys.private_key(), "", None).await?;
//!     assert_eq!(plain, "hello");
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod model;
pub mod operation;
pub mod transport;
pub mod wire;

pub use bridge::OpenPgp;
pub use config::{BridgeConfig, NativeMode};
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, EngineError, Error, Result};
pub use model::{Cipher, Compression, Entity, FileHints, Hash, KeyOptions, KeyPair, Options};
pub use operation::Operation;
pub use transport::{TransportError, TransportKind};

// --- Prelude ---
// A collection of the most commonly used traits, structs, and enums.
pub mod prelude {
    pub use crate::bridge::OpenPgp;
    pub use crate::config::{BridgeConfig, NativeMode};
    pub use crate::error::{EngineError, Error, Result};
    pub use crate::model::{Cipher, Compression, Entity, FileHints, Hash, KeyOptions, KeyPair, Options};
    pub use crate::transport::{HostChannel, NativeBinding, TransportError, TransportKind};
}

/// The version of the `openpgp-bridge` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

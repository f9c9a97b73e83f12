//! The public operation facade.
//!
//! Each method encodes its arguments, dispatches the request, and decodes
//! the response. No cryptography happens here; the engine does all of it.

use crate::config::BridgeConfig;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::model::{Entity, FileHints, KeyOptions, KeyPair, Options};
use crate::operation::Operation;
use crate::transport::{HostChannel, NativeBinding, TransportKind};
use crate::wire::request;
use crate::wire::response::{Payload, decode_response};
use crate::wire::schema::KeyPairWire;
use std::fmt;
use std::sync::{Arc, OnceLock};
use zeroize::Zeroizing;

static GLOBAL: OnceLock<OpenPgp> = OnceLock::new();

/// Typed entry point to the external OpenPGP engine.
///
/// Cloning is cheap; clones share the dispatcher and its cached transport.
#[derive(Clone)]
pub struct OpenPgp {
    dispatcher: Arc<Dispatcher>,
}

impl fmt::Debug for OpenPgp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenPgp")
            .field("config", self.dispatcher.config())
            .field("probed", &self.dispatcher.is_probed())
            .finish()
    }
}

impl OpenPgp {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// A bridge that probes `native` once and falls back to `channel`.
    pub fn with_host(
        config: BridgeConfig,
        channel: Arc<dyn HostChannel>,
        native: Option<Arc<dyn NativeBinding>>,
    ) -> Self {
        let dispatcher = Dispatcher::new(config, channel);
        match native {
            Some(binding) => Self::new(dispatcher.with_native(binding)),
            None => Self::new(dispatcher),
        }
    }

    /// Installs the process-wide bridge.
    ///
    /// Only the first call succeeds; later calls get their bridge back.
    pub fn install(self) -> Result<&'static OpenPgp, OpenPgp> {
        let mut installed_now = false;
        let installed = GLOBAL.get_or_init(|| {
            installed_now = true;
            self.clone()
        });
        if installed_now { Ok(installed) } else { Err(self) }
    }

    /// The process-wide bridge, if one has been installed.
    pub fn global() -> Option<&'static OpenPgp> {
        GLOBAL.get()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn transport_kind(&self) -> TransportKind {
        self.dispatcher.transport_kind()
    }

    async fn call<P: Payload>(&self, operation: Operation, request: Vec<u8>) -> Result<P::Output> {
        let request = Zeroizing::new(request);
        let response = Zeroizing::new(self.dispatcher.dispatch(operation, &request).await?);
        decode_response::<P>(&response)
    }

    pub async fn decrypt(
        &self,
        message: &str,
        private_key: &str,
        passphrase: &str,
        options: Option<&KeyOptions>,
    ) -> Result<String> {
        let request = request::encode_decrypt(message, private_key, passphrase, options)?;
        self.call::<String>(Operation::Decrypt, request).await
    }

    pub async fn decrypt_bytes(
        &self,
        message: &[u8],
        private_key: &str,
        passphrase: &str,
        options: Option<&KeyOptions>,
    ) -> Result<Vec<u8>> {
        let request = request::encode_decrypt_bytes(message, private_key, passphrase, options)?;
        self.call::<Vec<u8>>(Operation::DecryptBytes, request).await
    }

    pub async fn encrypt(
        &self,
        message: &str,
        public_key: &str,
        signed_entity: Option<&Entity>,
        file_hints: Option<&FileHints>,
        options: Option<&KeyOptions>,
    ) -> Result<String> {
        let request =
            request::encode_encrypt(message, public_key, signed_entity, file_hints, options)?;
        self.call::<String>(Operation::Encrypt, request).await
    }

    pub async fn encrypt_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        signed_entity: Option<&Entity>,
        file_hints: Option<&FileHints>,
        options: Option<&KeyOptions>,
    ) -> Result<Vec<u8>> {
        let request =
            request::encode_encrypt_bytes(message, public_key, signed_entity, file_hints, options)?;
        self.call::<Vec<u8>>(Operation::EncryptBytes, request).await
    }

    pub async fn sign(
        &self,
        message: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: Option<&KeyOptions>,
    ) -> Result<String> {
        let request = request::encode_sign(message, public_key, private_key, passphrase, options)?;
        self.call::<String>(Operation::Sign, request).await
    }

    pub async fn sign_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: Option<&KeyOptions>,
    ) -> Result<Vec<u8>> {
        let request =
            request::encode_sign_bytes(message, public_key, private_key, passphrase, options)?;
        self.call::<Vec<u8>>(Operation::SignBytes, request).await
    }

    /// Signs raw bytes and returns the armored signature.
    pub async fn sign_bytes_to_string(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: Option<&KeyOptions>,
    ) -> Result<String> {
        let request = request::encode_sign_bytes_to_string(
            message,
            public_key,
            private_key,
            passphrase,
            options,
        )?;
        self.call::<String>(Operation::SignBytesToString, request).await
    }

    /// Returns `Ok(false)` for a signature that does not verify; only
    /// engine-reported errors become [`Error::Engine`](crate::Error::Engine).
    pub async fn verify(&self, signature: &str, message: &str, public_key: &str) -> Result<bool> {
        let request = request::encode_verify(signature, message, public_key)?;
        self.call::<bool>(Operation::Verify, request).await
    }

    pub async fn verify_bytes(
        &self,
        signature: &str,
        message: &[u8],
        public_key: &str,
    ) -> Result<bool> {
        let request = request::encode_verify_bytes(signature, message, public_key)?;
        self.call::<bool>(Operation::VerifyBytes, request).await
    }

    pub async fn decrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        options: Option<&KeyOptions>,
    ) -> Result<String> {
        let request = request::encode_decrypt_symmetric(message, passphrase, options)?;
        self.call::<String>(Operation::DecryptSymmetric, request).await
    }

    pub async fn decrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        options: Option<&KeyOptions>,
    ) -> Result<Vec<u8>> {
        let request = request::encode_decrypt_symmetric_bytes(message, passphrase, options)?;
        self.call::<Vec<u8>>(Operation::DecryptSymmetricBytes, request).await
    }

    pub async fn encrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        file_hints: Option<&FileHints>,
        options: Option<&KeyOptions>,
    ) -> Result<String> {
        let request = request::encode_encrypt_symmetric(message, passphrase, file_hints, options)?;
        self.call::<String>(Operation::EncryptSymmetric, request).await
    }

    pub async fn encrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        file_hints: Option<&FileHints>,
        options: Option<&KeyOptions>,
    ) -> Result<Vec<u8>> {
        let request =
            request::encode_encrypt_symmetric_bytes(message, passphrase, file_hints, options)?;
        self.call::<Vec<u8>>(Operation::EncryptSymmetricBytes, request).await
    }

    pub async fn generate(&self, options: Option<&Options>) -> Result<KeyPair> {
        let request = request::encode_generate(options)?;
        self.call::<KeyPairWire>(Operation::Generate, request).await
    }
}

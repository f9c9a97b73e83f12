//! Generic response decoding.
//!
//! All four response shapes share one routine: read the error field, raise
//! an [`EngineError`] if it is non-empty, otherwise read and project the
//! payload. Only the projection differs per payload type.

use crate::error::{EngineError, Error};
use crate::model::KeyPair;
use crate::wire::codec::{WireError, decode_prefix};
use crate::wire::schema::KeyPairWire;
use bincode::Decode;

/// A response payload type and its caller-facing projection.
pub trait Payload: Decode<()> {
    type Output;

    fn project(self) -> Self::Output;
}

impl Payload for Vec<u8> {
    type Output = Vec<u8>;

    fn project(self) -> Vec<u8> {
        self
    }
}

impl Payload for String {
    type Output = String;

    fn project(self) -> String {
        self
    }
}

impl Payload for bool {
    type Output = bool;

    fn project(self) -> bool {
        self
    }
}

impl Payload for KeyPairWire {
    type Output = KeyPair;

    fn project(self) -> KeyPair {
        KeyPair::new(self.public_key, self.private_key)
    }
}

/// Decodes a response buffer into its payload or an engine failure.
///
/// The payload is decoded into freshly allocated storage; nothing in the
/// result borrows from `bytes`.
pub fn decode_response<P: Payload>(bytes: &[u8]) -> Result<P::Output, Error> {
    let (error, read): (String, usize) = decode_prefix(bytes)?;
    if !error.is_empty() {
        tracing::debug!(cause = %error, "engine reported an error");
        return Err(EngineError::new(error).into());
    }

    let rest = &bytes[read..];
    let (payload, used): (P, usize) = decode_prefix(rest)?;
    if used != rest.len() {
        return Err(WireError::TrailingBytes(rest.len() - used).into());
    }
    Ok(payload.project())
}

//! The fixed set of operations the external engine dispatches on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One engine operation. The routing name returned by [`Operation::as_str`]
/// is part of the wire contract and must match the engine's dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Decrypt,
    DecryptBytes,
    Encrypt,
    EncryptBytes,
    Sign,
    SignBytes,
    SignBytesToString,
    Verify,
    VerifyBytes,
    DecryptSymmetric,
    DecryptSymmetricBytes,
    EncryptSymmetric,
    EncryptSymmetricBytes,
    Generate,
}

/// The shape of the payload an operation's response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Bytes,
    String,
    Bool,
    KeyPair,
}

impl Operation {
    pub const ALL: [Operation; 14] = [
        Operation::Decrypt,
        Operation::DecryptBytes,
        Operation::Encrypt,
        Operation::EncryptBytes,
        Operation::Sign,
        Operation::SignBytes,
        Operation::SignBytesToString,
        Operation::Verify,
        Operation::VerifyBytes,
        Operation::DecryptSymmetric,
        Operation::DecryptSymmetricBytes,
        Operation::EncryptSymmetric,
        Operation::EncryptSymmetricBytes,
        Operation::Generate,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Decrypt => "decrypt",
            Operation::DecryptBytes => "decryptBytes",
            Operation::Encrypt => "encrypt",
            Operation::EncryptBytes => "encryptBytes",
            Operation::Sign => "sign",
            Operation::SignBytes => "signBytes",
            Operation::SignBytesToString => "signBytesToString",
            Operation::Verify => "verify",
            Operation::VerifyBytes => "verifyBytes",
            Operation::DecryptSymmetric => "decryptSymmetric",
            Operation::DecryptSymmetricBytes => "decryptSymmetricBytes",
            Operation::EncryptSymmetric => "encryptSymmetric",
            Operation::EncryptSymmetricBytes => "encryptSymmetricBytes",
            Operation::Generate => "generate",
        }
    }

    pub const fn response_kind(self) -> ResponseKind {
        match self {
            Operation::DecryptBytes
            | Operation::EncryptBytes
            | Operation::SignBytes
            | Operation::DecryptSymmetricBytes
            | Operation::EncryptSymmetricBytes => ResponseKind::Bytes,
            Operation::Decrypt
            | Operation::Encrypt
            | Operation::Sign
            | Operation::SignBytesToString
            | Operation::DecryptSymmetric
            | Operation::EncryptSymmetric => ResponseKind::String,
            Operation::Verify | Operation::VerifyBytes => ResponseKind::Bool,
            Operation::Generate => ResponseKind::KeyPair,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

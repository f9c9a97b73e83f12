//! Request and response structures exchanged with the engine.
//!
//! Every field is always present. Absent caller-side options are encoded as
//! their all-default counterparts, so a message never has a missing field.
//! Field order is the wire order and must not change without a schema bump.

use crate::model::{Cipher, Compression, Entity, FileHints, Hash, KeyOptions, Options};
use bincode::{Decode, Encode};

/// Engine-side hash enumeration. Variant order is the wire ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Encode, Decode)]
pub enum WireHash {
    #[default]
    Sha256,
    Sha224,
    Sha384,
    Sha512,
}

/// Engine-side cipher enumeration. Variant order is the wire ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Encode, Decode)]
pub enum WireCipher {
    #[default]
    Aes128,
    Aes192,
    Aes256,
}

/// Engine-side compression enumeration. Variant order is the wire ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Encode, Decode)]
pub enum WireCompression {
    #[default]
    None,
    Zlib,
    Zip,
}

impl From<Hash> for WireHash {
    fn from(hash: Hash) -> Self {
        match hash {
            Hash::Sha256 => WireHash::Sha256,
            Hash::Sha224 => WireHash::Sha224,
            Hash::Sha384 => WireHash::Sha384,
            Hash::Sha512 => WireHash::Sha512,
        }
    }
}

impl From<WireHash> for Hash {
    fn from(hash: WireHash) -> Self {
        match hash {
            WireHash::Sha256 => Hash::Sha256,
            WireHash::Sha224 => Hash::Sha224,
            WireHash::Sha384 => Hash::Sha384,
            WireHash::Sha512 => Hash::Sha512,
        }
    }
}

impl From<Cipher> for WireCipher {
    fn from(cipher: Cipher) -> Self {
        match cipher {
            Cipher::Aes128 => WireCipher::Aes128,
            Cipher::Aes192 => WireCipher::Aes192,
            Cipher::Aes256 => WireCipher::Aes256,
        }
    }
}

impl From<WireCipher> for Cipher {
    fn from(cipher: WireCipher) -> Self {
        match cipher {
            WireCipher::Aes128 => Cipher::Aes128,
            WireCipher::Aes192 => Cipher::Aes192,
            WireCipher::Aes256 => Cipher::Aes256,
        }
    }
}

impl From<Compression> for WireCompression {
    fn from(compression: Compression) -> Self {
        match compression {
            Compression::None => WireCompression::None,
            Compression::Zlib => WireCompression::Zlib,
            Compression::Zip => WireCompression::Zip,
        }
    }
}

impl From<WireCompression> for Compression {
    fn from(compression: WireCompression) -> Self {
        match compression {
            WireCompression::None => Compression::None,
            WireCompression::Zlib => Compression::Zlib,
            WireCompression::Zip => Compression::Zip,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct KeyOptionsWire {
    pub hash: WireHash,
    pub cipher: WireCipher,
    pub compression: WireCompression,
    pub compression_level: i32,
    pub rsa_bits: i32,
}

impl From<&KeyOptions> for KeyOptionsWire {
    fn from(options: &KeyOptions) -> Self {
        Self {
            hash: options.hash.into(),
            cipher: options.cipher.into(),
            compression: options.compression.into(),
            compression_level: options.compression_level,
            rsa_bits: options.rsa_bits,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct EntityWire {
    pub public_key: String,
    pub private_key: String,
    pub passphrase: String,
}

impl From<&Entity> for EntityWire {
    fn from(entity: &Entity) -> Self {
        Self {
            public_key: entity.public_key.clone(),
            private_key: entity.private_key.clone(),
            passphrase: entity.passphrase.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct FileHintsWire {
    pub is_binary: bool,
    pub file_name: String,
    /// RFC 3339, or empty when unknown.
    pub mod_time: String,
}

impl From<&FileHints> for FileHintsWire {
    fn from(hints: &FileHints) -> Self {
        Self {
            is_binary: hints.is_binary,
            file_name: hints.file_name.clone(),
            mod_time: hints.mod_time_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct OptionsWire {
    pub name: String,
    pub comment: String,
    pub email: String,
    pub passphrase: String,
    pub key_options: KeyOptionsWire,
}

impl From<&Options> for OptionsWire {
    fn from(options: &Options) -> Self {
        Self {
            name: options.name.clone(),
            comment: options.comment.clone(),
            email: options.email.clone(),
            passphrase: options.passphrase.clone(),
            key_options: KeyOptionsWire::from(&options.key_options),
        }
    }
}

// --- Requests ---
// `M` is `String` for the text variants and `Vec<u8>` for the byte variants.

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct DecryptRequest<M> {
    pub message: M,
    pub private_key: String,
    pub passphrase: String,
    pub options: KeyOptionsWire,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct EncryptRequest<M> {
    pub message: M,
    pub public_key: String,
    pub options: KeyOptionsWire,
    pub signed: EntityWire,
    pub file_hints: FileHintsWire,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct SignRequest<M> {
    pub message: M,
    pub public_key: String,
    pub private_key: String,
    pub passphrase: String,
    pub options: KeyOptionsWire,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct VerifyRequest<M> {
    pub signature: String,
    pub message: M,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct DecryptSymmetricRequest<M> {
    pub message: M,
    pub passphrase: String,
    pub options: KeyOptionsWire,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct EncryptSymmetricRequest<M> {
    pub message: M,
    pub passphrase: String,
    pub file_hints: FileHintsWire,
    pub options: KeyOptionsWire,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct GenerateRequest {
    pub options: OptionsWire,
}

// --- Responses ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct KeyPairWire {
    pub public_key: String,
    pub private_key: String,
}

/// A response: the error field followed by the payload.
///
/// The error field comes first so a decoder can stop before the payload
/// once it sees a non-empty error. An empty error means success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct Response<P> {
    pub error: String,
    pub output: P,
}

impl<P: Default> Response<P> {
    pub fn ok(output: P) -> Self {
        Self {
            error: String::new(),
            output,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            output: P::default(),
        }
    }
}

pub type StringResponse = Response<String>;
pub type BytesResponse = Response<Vec<u8>>;
pub type BoolResponse = Response<bool>;
pub type KeyPairResponse = Response<KeyPairWire>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::codec::{from_bytes, to_bytes};

    #[test]
    fn test_enum_ordinals_round_trip_through_wire() {
        for hash in Hash::ALL {
            let bytes = to_bytes(&WireHash::from(hash)).unwrap();
            assert_eq!(from_bytes::<u32>(&bytes).unwrap(), hash.ordinal());
            assert_eq!(Hash::from(from_bytes::<WireHash>(&bytes).unwrap()), hash);
        }
        for cipher in Cipher::ALL {
            let bytes = to_bytes(&WireCipher::from(cipher)).unwrap();
            assert_eq!(from_bytes::<u32>(&bytes).unwrap(), cipher.ordinal());
            assert_eq!(Cipher::from(from_bytes::<WireCipher>(&bytes).unwrap()), cipher);
        }
        for compression in Compression::ALL {
            let bytes = to_bytes(&WireCompression::from(compression)).unwrap();
            assert_eq!(from_bytes::<u32>(&bytes).unwrap(), compression.ordinal());
            assert_eq!(
                Compression::from(from_bytes::<WireCompression>(&bytes).unwrap()),
                compression
            );
        }
    }

    #[test]
    fn test_out_of_range_ordinal_is_rejected() {
        let bytes = to_bytes(&7u32).unwrap();
        assert!(from_bytes::<WireCipher>(&bytes).is_err());
    }

    #[test]
    fn test_default_structs_match_default_model() {
        assert_eq!(KeyOptionsWire::from(&KeyOptions::default()), KeyOptionsWire::default());
        assert_eq!(EntityWire::from(&Entity::default()), EntityWire::default());
        assert_eq!(FileHintsWire::from(&FileHints::default()), FileHintsWire::default());
        assert_eq!(OptionsWire::from(&Options::default()), OptionsWire::default());
    }
}

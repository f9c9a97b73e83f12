//! Request encoders, one per operation.
//!
//! Each encoder transcribes its arguments into the matching schema structure
//! and serializes it. Omitted configuration structs are replaced by their
//! all-default wire form; no field value is validated here.

use crate::model::{Entity, FileHints, KeyOptions, Options};
use crate::wire::codec::{WireError, to_bytes};
use crate::wire::schema::{
    DecryptRequest, DecryptSymmetricRequest, EncryptRequest, EncryptSymmetricRequest, EntityWire,
    FileHintsWire, GenerateRequest, KeyOptionsWire, OptionsWire, SignRequest, VerifyRequest,
};

fn key_options(options: Option<&KeyOptions>) -> KeyOptionsWire {
    options.map(KeyOptionsWire::from).unwrap_or_default()
}

fn entity(entity: Option<&Entity>) -> EntityWire {
    entity.map(EntityWire::from).unwrap_or_default()
}

fn file_hints(hints: Option<&FileHints>) -> FileHintsWire {
    hints.map(FileHintsWire::from).unwrap_or_default()
}

fn options(options: Option<&Options>) -> OptionsWire {
    options.map(OptionsWire::from).unwrap_or_default()
}

pub fn encode_decrypt(
    message: &str,
    private_key: &str,
    passphrase: &str,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&DecryptRequest {
        message: message.to_owned(),
        private_key: private_key.to_owned(),
        passphrase: passphrase.to_owned(),
        options: key_options(options),
    })
}

pub fn encode_decrypt_bytes(
    message: &[u8],
    private_key: &str,
    passphrase: &str,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&DecryptRequest {
        message: message.to_vec(),
        private_key: private_key.to_owned(),
        passphrase: passphrase.to_owned(),
        options: key_options(options),
    })
}

pub fn encode_encrypt(
    message: &str,
    public_key: &str,
    signed_entity: Option<&Entity>,
    hints: Option<&FileHints>,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&EncryptRequest {
        message: message.to_owned(),
        public_key: public_key.to_owned(),
        options: key_options(options),
        signed: entity(signed_entity),
        file_hints: file_hints(hints),
    })
}

pub fn encode_encrypt_bytes(
    message: &[u8],
    public_key: &str,
    signed_entity: Option<&Entity>,
    hints: Option<&FileHints>,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&EncryptRequest {
        message: message.to_vec(),
        public_key: public_key.to_owned(),
        options: key_options(options),
        signed: entity(signed_entity),
        file_hints: file_hints(hints),
    })
}

pub fn encode_sign(
    message: &str,
    public_key: &str,
    private_key: &str,
    passphrase: &str,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&SignRequest {
        message: message.to_owned(),
        public_key: public_key.to_owned(),
        private_key: private_key.to_owned(),
        passphrase: passphrase.to_owned(),
        options: key_options(options),
    })
}

pub fn encode_sign_bytes(
    message: &[u8],
    public_key: &str,
    private_key: &str,
    passphrase: &str,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&SignRequest {
        message: message.to_vec(),
        public_key: public_key.to_owned(),
        private_key: private_key.to_owned(),
        passphrase: passphrase.to_owned(),
        options: key_options(options),
    })
}

/// Same request shape as `signBytes`; only the response kind differs.
pub fn encode_sign_bytes_to_string(
    message: &[u8],
    public_key: &str,
    private_key: &str,
    passphrase: &str,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    encode_sign_bytes(message, public_key, private_key, passphrase, options)
}

pub fn encode_verify(signature: &str, message: &str, public_key: &str) -> Result<Vec<u8>, WireError> {
    to_bytes(&VerifyRequest {
        signature: signature.to_owned(),
        message: message.to_owned(),
        public_key: public_key.to_owned(),
    })
}

pub fn encode_verify_bytes(
    signature: &str,
    message: &[u8],
    public_key: &str,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&VerifyRequest {
        signature: signature.to_owned(),
        message: message.to_vec(),
        public_key: public_key.to_owned(),
    })
}

pub fn encode_decrypt_symmetric(
    message: &str,
    passphrase: &str,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&DecryptSymmetricRequest {
        message: message.to_owned(),
        passphrase: passphrase.to_owned(),
        options: key_options(options),
    })
}

pub fn encode_decrypt_symmetric_bytes(
    message: &[u8],
    passphrase: &str,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&DecryptSymmetricRequest {
        message: message.to_vec(),
        passphrase: passphrase.to_owned(),
        options: key_options(options),
    })
}

pub fn encode_encrypt_symmetric(
    message: &str,
    passphrase: &str,
    hints: Option<&FileHints>,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&EncryptSymmetricRequest {
        message: message.to_owned(),
        passphrase: passphrase.to_owned(),
        file_hints: file_hints(hints),
        options: key_options(options),
    })
}

pub fn encode_encrypt_symmetric_bytes(
    message: &[u8],
    passphrase: &str,
    hints: Option<&FileHints>,
    options: Option<&KeyOptions>,
) -> Result<Vec<u8>, WireError> {
    to_bytes(&EncryptSymmetricRequest {
        message: message.to_vec(),
        passphrase: passphrase.to_owned(),
        file_hints: file_hints(hints),
        options: key_options(options),
    })
}

pub fn encode_generate(generate_options: Option<&Options>) -> Result<Vec<u8>, WireError> {
    to_bytes(&GenerateRequest {
        options: options(generate_options),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cipher, Compression, Hash};
    use crate::wire::codec::from_bytes;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn any_text() -> impl Strategy<Value = String> {
        ".{0,24}"
    }

    proptest! {
        #[test]
        fn prop_omitted_structs_encode_as_defaults(
            message in any_text(),
            key in any_text(),
            passphrase in any_text(),
            payload in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let ko = KeyOptions::default();
            let en = Entity::default();
            let fh = FileHints::default();
            let op = Options::default();

            prop_assert_eq!(
                encode_decrypt(&message, &key, &passphrase, None).unwrap(),
                encode_decrypt(&message, &key, &passphrase, Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_decrypt_bytes(&payload, &key, &passphrase, None).unwrap(),
                encode_decrypt_bytes(&payload, &key, &passphrase, Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_encrypt(&message, &key, None, None, None).unwrap(),
                encode_encrypt(&message, &key, Some(&en), Some(&fh), Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_encrypt_bytes(&payload, &key, None, None, None).unwrap(),
                encode_encrypt_bytes(&payload, &key, Some(&en), Some(&fh), Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_sign(&message, &key, &key, &passphrase, None).unwrap(),
                encode_sign(&message, &key, &key, &passphrase, Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_sign_bytes(&payload, &key, &key, &passphrase, None).unwrap(),
                encode_sign_bytes(&payload, &key, &key, &passphrase, Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_sign_bytes_to_string(&payload, &key, &key, &passphrase, None).unwrap(),
                encode_sign_bytes_to_string(&payload, &key, &key, &passphrase, Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_decrypt_symmetric(&message, &passphrase, None).unwrap(),
                encode_decrypt_symmetric(&message, &passphrase, Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_decrypt_symmetric_bytes(&payload, &passphrase, None).unwrap(),
                encode_decrypt_symmetric_bytes(&payload, &passphrase, Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_encrypt_symmetric(&message, &passphrase, None, None).unwrap(),
                encode_encrypt_symmetric(&message, &passphrase, Some(&fh), Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_encrypt_symmetric_bytes(&payload, &passphrase, None, None).unwrap(),
                encode_encrypt_symmetric_bytes(&payload, &passphrase, Some(&fh), Some(&ko)).unwrap()
            );
            prop_assert_eq!(
                encode_generate(None).unwrap(),
                encode_generate(Some(&op)).unwrap()
            );
        }

        #[test]
        fn prop_key_options_transcribed_faithfully(
            hash in 0usize..4,
            cipher in 0usize..3,
            compression in 0usize..3,
            level in any::<i32>(),
            bits in any::<i32>(),
        ) {
            let options = KeyOptions::new()
                .with_hash(Hash::ALL[hash])
                .with_cipher(Cipher::ALL[cipher])
                .with_compression(Compression::ALL[compression])
                .with_compression_level(level)
                .with_rsa_bits(bits);

            let bytes = encode_decrypt_symmetric("m", "p", Some(&options)).unwrap();
            let decoded: DecryptSymmetricRequest<String> = from_bytes(&bytes).unwrap();

            prop_assert_eq!(Hash::from(decoded.options.hash), Hash::ALL[hash]);
            prop_assert_eq!(Cipher::from(decoded.options.cipher), Cipher::ALL[cipher]);
            prop_assert_eq!(Compression::from(decoded.options.compression), Compression::ALL[compression]);
            prop_assert_eq!(decoded.options.compression_level, level);
            prop_assert_eq!(decoded.options.rsa_bits, bits);
        }
    }

    #[test]
    fn test_encrypt_carries_nested_structs() {
        let signer = Entity::new()
            .with_private_key("<sk>")
            .with_passphrase("secret");
        let hints = FileHints::new()
            .with_binary(true)
            .with_file_name("report.pdf")
            .with_mod_time(Utc.with_ymd_and_hms(2023, 11, 5, 8, 0, 0).unwrap());

        let bytes = encode_encrypt("hello", "<pk>", Some(&signer), Some(&hints), None).unwrap();
        let decoded: EncryptRequest<String> = from_bytes(&bytes).unwrap();

        assert_eq!(decoded.message, "hello");
        assert_eq!(decoded.public_key, "<pk>");
        assert_eq!(decoded.signed.private_key, "<sk>");
        assert_eq!(decoded.signed.public_key, "");
        assert_eq!(decoded.signed.passphrase, "secret");
        assert!(decoded.file_hints.is_binary);
        assert_eq!(decoded.file_hints.file_name, "report.pdf");
        assert_eq!(decoded.file_hints.mod_time, "2023-11-05T08:00:00Z");
        assert_eq!(decoded.options, KeyOptionsWire::default());
    }

    #[test]
    fn test_no_validation_of_rsa_bits() {
        let options = Options::new()
            .with_name("Alice")
            .with_key_options(KeyOptions::new().with_rsa_bits(-1));

        let bytes = encode_generate(Some(&options)).unwrap();
        let decoded: GenerateRequest = from_bytes(&bytes).unwrap();

        assert_eq!(decoded.options.name, "Alice");
        assert_eq!(decoded.options.key_options.rsa_bits, -1);
    }

    #[test]
    fn test_sign_bytes_to_string_shares_sign_bytes_shape() {
        let a = encode_sign_bytes(b"data", "<pk>", "<sk>", "pw", None).unwrap();
        let b = encode_sign_bytes_to_string(b"data", "<pk>", "<sk>", "pw", None).unwrap();
        assert_eq!(a, b);
    }
}

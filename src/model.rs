//!
//! # 调用参数模型
//!
//! 调用方可见的配置结构：`Options`、`KeyOptions`、`Entity`、`FileHints`，
//! 以及由密钥生成响应解码得到的 `KeyPair`。
//! 每个字段都有文档化的默认值（空字符串 / 0 / false / 枚举首项），
//! 编码器总是收到完整填充的值。
//!
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 哈希算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Hash {
    #[default]
    Sha256,
    Sha224,
    Sha384,
    Sha512,
}

impl Hash {
    pub const ALL: [Hash; 4] = [Hash::Sha256, Hash::Sha224, Hash::Sha384, Hash::Sha512];

    /// 与外部引擎枚举一致的序号
    pub const fn ordinal(self) -> u32 {
        match self {
            Hash::Sha256 => 0,
            Hash::Sha224 => 1,
            Hash::Sha384 => 2,
            Hash::Sha512 => 3,
        }
    }
}

/// 对称加密算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cipher {
    #[default]
    Aes128,
    Aes192,
    Aes256,
}

impl Cipher {
    pub const ALL: [Cipher; 3] = [Cipher::Aes128, Cipher::Aes192, Cipher::Aes256];

    pub const fn ordinal(self) -> u32 {
        match self {
            Cipher::Aes128 => 0,
            Cipher::Aes192 => 1,
            Cipher::Aes256 => 2,
        }
    }
}

/// 压缩算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Compression {
    #[default]
    None,
    Zlib,
    Zip,
}

impl Compression {
    pub const ALL: [Compression; 3] = [Compression::None, Compression::Zlib, Compression::Zip];

    pub const fn ordinal(self) -> u32 {
        match self {
            Compression::None => 0,
            Compression::Zlib => 1,
            Compression::Zip => 2,
        }
    }
}

/// 算法与调优参数
///
/// 所有字段均可省略；零值表示由引擎端决定默认行为。
/// 这里不做任何取值校验（例如 RSA 位数），校验属于引擎的职责。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyOptions {
    pub hash: Hash,
    pub cipher: Cipher,
    pub compression: Compression,
    /// 压缩级别，0 表示引擎默认
    pub compression_level: i32,
    /// RSA 密钥位数，0 表示引擎默认
    pub rsa_bits: i32,
}

impl KeyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash(mut self, hash: Hash) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_cipher(mut self, cipher: Cipher) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.compression_level = level;
        self
    }

    pub fn with_rsa_bits(mut self, bits: i32) -> Self {
        self.rsa_bits = bits;
        self
    }
}

/// 密钥生成所需的身份信息与默认参数
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub passphrase: String,
    #[serde(default)]
    #[zeroize(skip)]
    pub key_options: KeyOptions,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = passphrase.into();
        self
    }

    pub fn with_key_options(mut self, key_options: KeyOptions) -> Self {
        self.key_options = key_options;
        self
    }
}

/// 用于签名或加密的身份密钥材料，离开作用域时自动擦除
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub passphrase: String,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = public_key.into();
        self
    }

    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = private_key.into();
        self
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = passphrase.into();
        self
    }
}

/// 描述明文文件属性的元数据
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileHints {
    pub is_binary: bool,
    pub file_name: String,
    pub mod_time: Option<DateTime<Utc>>,
}

impl FileHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binary(mut self, is_binary: bool) -> Self {
        self.is_binary = is_binary;
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_mod_time(mut self, mod_time: DateTime<Utc>) -> Self {
        self.mod_time = Some(mod_time);
        self
    }

    /// 修改时间的 RFC 3339 表示；未设置时为空字符串
    pub fn mod_time_rfc3339(&self) -> String {
        self.mod_time
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default()
    }
}

/// 密钥生成的结果，仅由响应解码器构造
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    public_key: String,
    private_key: String,
}

impl KeyPair {
    pub(crate) fn new(public_key: String, private_key: String) -> Self {
        Self {
            public_key,
            private_key,
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

//! bincode 配置与编解码辅助函数。

use bincode::config::Configuration;
use bincode::{Decode, Encode};
use thiserror::Error;

/// 双方约定的编码配置：小端、变长整数
static CONFIG: Configuration = bincode::config::standard();

#[derive(Error, Debug)]
pub enum WireError {
    #[error("Encode error: {0}")]
    Enc(#[source] Box<bincode::error::EncodeError>),
    #[error("Decode error: {0}")]
    Dec(#[source] Box<bincode::error::DecodeError>),
    #[error("{0} trailing bytes after message")]
    TrailingBytes(usize),
}

impl From<bincode::error::EncodeError> for WireError {
    fn from(err: bincode::error::EncodeError) -> Self {
        WireError::Enc(Box::from(err))
    }
}

impl From<bincode::error::DecodeError> for WireError {
    fn from(err: bincode::error::DecodeError) -> Self {
        WireError::Dec(Box::from(err))
    }
}

pub fn to_bytes<T: Encode>(value: &T) -> Result<Vec<u8>, WireError> {
    Ok(bincode::encode_to_vec(value, CONFIG)?)
}

/// 解码一条完整消息；多余的尾部字节视为格式不匹配
pub fn from_bytes<T: Decode<()>>(bytes: &[u8]) -> Result<T, WireError> {
    let (value, read) = decode_prefix(bytes)?;
    if read != bytes.len() {
        return Err(WireError::TrailingBytes(bytes.len() - read));
    }
    Ok(value)
}

/// 从缓冲区头部解码一个值，返回值与已消耗的字节数
pub(crate) fn decode_prefix<T: Decode<()>>(bytes: &[u8]) -> Result<(T, usize), WireError> {
    Ok(bincode::decode_from_slice(bytes, CONFIG)?)
}

//! Binary wire format shared with the external engine.
//!
//! - `schema`: the request and response structures, bincode-encoded.
//! - `request`: one encoder per operation.
//! - `response`: the generic response decoder.

pub mod codec;
pub mod request;
pub mod response;
pub mod schema;

pub use self::codec::{WireError, from_bytes, to_bytes};
pub use self::response::{Payload, decode_response};

//! # respwire - RESP encoder and decoder
//!
//! Converts between [`RespValue`] and the textual, length-prefixed wire
//! format spoken by Redis-style key-value stores.
//!
//! Only the five classic types are supported: simple strings, errors,
//! integers, bulk strings and arrays. Bulk strings and arrays can be null,
//! which is kept distinct from empty.
//!
//! Both directions are pure functions. The decoder expects a buffer that
//! holds at least one complete value and reports how many bytes that value
//! took, so a transport can advance its read buffer by exactly that amount.
//!
//! ## Example
//!
//! ```rust
//! use respwire::RespEncoder;
//! use respwire::RespValue;
//!
//! let request = RespValue::command(["GET", "key"]);
//! let bytes = request.encode();
//! assert_eq!(&bytes[..], b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n");
//!
//! let (decoded, consumed) = respwire::decode(&bytes).unwrap();
//! assert_eq!(decoded, request);
//! assert_eq!(consumed, bytes.len());
//! ```

mod encode;
mod error;
mod parser;
mod types;
mod utils;

pub use encode::RespEncoder;
pub use encode::encode;
pub use error::DecodeError;
pub use error::MAX_NESTING_DEPTH;
pub use parser::decode;
pub use types::RespKind;
pub use types::RespValue;

//! This module contains the conversions between the native values of custom GraphQL scalars
//! and their wire representation.
//!
//! Each scalar is a pair of independent, stateless functions exposed through [ScalarCodec].
//! This module does not depend on any GraphQL framework, so binding the codecs to
//! a schema is the responsibility of the caller.

mod address;
mod big_int;
mod bytes;
mod codec;
mod error;
mod input;
mod narrow_int;

pub mod float32;

pub use self::address::{Address, ADDRESS_LENGTH};
pub use self::bytes::Bytes;
pub use self::codec::ScalarCodec;
pub use self::error::{ScalarError, ScalarErrorKind};
pub use self::input::Input;

pub use num_bigint::BigInt;

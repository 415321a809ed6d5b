//! This module binds the scalar codecs to async-graphql.
//!
//! Every scalar is a thin wrapper around a native value from [graph_scalars]
//! that delegates parsing and formatting to its codec.

mod config;
mod error;
mod value;

pub mod entities;

pub use self::config::ScalarConfig;
pub use self::entities::{Address, BigInt, Bytes, Float32, Int16, Int8, UInt16, UInt8};

mod address;
mod big_int;
mod bytes;
mod float32;
mod narrow_int;

pub use self::address::Address;
pub use self::big_int::BigInt;
pub use self::bytes::Bytes;
pub use self::float32::Float32;
pub use self::narrow_int::{Int16, Int8, UInt16, UInt8};

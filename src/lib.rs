//! Byte-shift ("Caesar") cipher over length-tagged buffers, plus the
//! equality check and driver used by the `selftest` binary.

pub mod algos;
pub mod constants;
pub mod driver;
pub mod errors;
pub mod structs;
pub mod traits;
pub mod utils;

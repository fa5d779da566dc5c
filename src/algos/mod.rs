pub mod byte_shift;
pub mod caesar;
pub mod equality;

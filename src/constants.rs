pub const CLEAR_TEXT: &[u8] = b"Xtlnqnx%wthpx&";
pub const EXPECTED: &[u8] = b"Sogilis rocks!";
// 251 == -5 mod 256
pub const OFFSET: u8 = 251;

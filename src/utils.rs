/// Offset that undoes `offset`, i.e. `(256 - offset) mod 256`.
pub fn inverse_offset(offset: u8) -> u8 {
    offset.wrapping_neg()
}

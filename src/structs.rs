#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteShift {
    pub offset: u8,
}

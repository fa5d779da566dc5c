use crate::algos::caesar::{caesar_ciphered, caesar_deciphered};
use crate::errors::CipherError;
use crate::structs::ByteShift;
use crate::traits::{Decryptor, Encryptor};
use crate::utils::inverse_offset;

impl ByteShift {
    pub fn new(offset: u8) -> Self {
        ByteShift { offset }
    }

    /// The shift that undoes this one.
    pub fn inverse(&self) -> Self {
        ByteShift::new(inverse_offset(self.offset))
    }
}

impl Encryptor for ByteShift {
    fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>, CipherError> {
        caesar_ciphered(self.offset, message)
    }
}

impl Decryptor for ByteShift {
    fn decrypt(&self, message: &[u8]) -> Result<Vec<u8>, CipherError> {
        caesar_deciphered(self.offset, message)
    }
}

use crate::errors::CipherError;

pub trait Encryptor: Send + Sync {
    fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub trait Decryptor: Send + Sync {
    fn decrypt(&self, message: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub mod logic;

pub use logic::codec::{MASTER_KEY_LEN, NONCE_LEN, SealedSecret, SecretVault};

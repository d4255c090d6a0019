pub mod error;
pub mod cipher_traits;
pub mod key_expansion;
pub mod encryption_transformation;
pub mod utils;
pub mod feistel_network;
pub mod des_tables;
pub mod des_key_expansion;
pub mod des_transformation;
pub mod des;

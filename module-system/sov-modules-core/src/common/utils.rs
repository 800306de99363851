use digest::Digest;

use crate::module::{Context, Spec};

/// Derives a deterministic address from an arbitrary string key by hashing it
/// with the context's hasher.
pub fn generate_address<C: Context>(key: &str) -> <C as Spec>::Address {
    let hash: [u8; 32] = <C as Spec>::Hasher::digest(key.as_bytes()).into();
    <C as Spec>::Address::from(hash)
}

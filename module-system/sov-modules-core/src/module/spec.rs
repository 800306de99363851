//! Module specification definitions.

use core::fmt::Debug;

use digest::typenum::U32;
use digest::Digest;

use crate::common::BasicAddress;

/// The `Spec` trait configures certain key primitives to be used by a particular deployment.
/// `Spec` is almost always implemented on a Context object; since all Modules are generic
/// over a Context, developers can swap the address format or the hasher without touching
/// their module implementations.
pub trait Spec {
    /// The Address type used to identify participants. Typically calculated as the hash of a public key.
    type Address: BasicAddress;

    /// The preferred hasher, such as Sha256.
    type Hasher: Digest<OutputSize = U32>;
}

/// A context contains information which is passed to modules during
/// transaction execution. Currently, context includes the sender of the transaction
/// as authenticated by the transport layer.
pub trait Context: Spec + Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Sender of the transaction.
    fn sender(&self) -> &Self::Address;

    /// Constructor for the Context.
    fn new(sender: Self::Address) -> Self;
}

use serde::{Deserialize, Serialize};

use crate::common::Address;
use crate::module::{Context, Spec};

/// Context backed by [`Address`] and Sha256.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultContext {
    /// The authenticated sender of the current call.
    pub sender: Address,
}

impl Spec for DefaultContext {
    type Address = Address;
    type Hasher = sha2::Sha256;
}

impl Context for DefaultContext {
    fn sender(&self) -> &Self::Address {
        &self.sender
    }

    fn new(sender: Self::Address) -> Self {
        Self { sender }
    }
}

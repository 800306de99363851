//! Runtime module definitions.

use core::fmt::Debug;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::common::ModuleError;

mod default_context;
mod spec;

pub use default_context::*;
pub use spec::*;

/// A key/value record emitted by a module while processing a call.
#[derive(
    Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct Event {
    key: String,
    value: String,
}

impl Event {
    /// Creates a new event.
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }

    /// The event key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The event payload.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Response type for the `Module::call` method.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallResponse {
    /// Lists of events emitted by a call to a module.
    pub events: Vec<Event>,
}

impl CallResponse {
    /// Appends an event to the response.
    pub fn add_event(&mut self, key: &str, value: &str) {
        self.events.push(Event::new(key, value))
    }
}

/// The core trait implemented by all modules. This trait defines how a module is initialized at genesis,
/// and how it handles user transactions.
///
/// A module holds the rules, never the data: every method receives the
/// module's [`Module::State`] explicitly, so the same module value can drive
/// any number of independent states.
pub trait Module {
    /// Execution context.
    type Context: Context;

    /// Configuration for the genesis method.
    type Config;

    /// State owned by the caller and mutated by the module.
    type State: Default;

    /// Module defined argument to the call method.
    type CallMessage: Debug + BorshSerialize + BorshDeserialize;

    /// Genesis is called once, before any call, and can be used to set initial state values in the module.
    fn genesis(&self, _config: &Self::Config, _state: &mut Self::State) -> Result<(), ModuleError> {
        Ok(())
    }

    /// Call allows interaction with the module and invokes state changes.
    /// It takes a module defined type and a context as parameters.
    fn call(
        &self,
        message: Self::CallMessage,
        context: &Self::Context,
        state: &mut Self::State,
    ) -> Result<CallResponse, ModuleError>;
}

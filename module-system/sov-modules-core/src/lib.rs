#![deny(missing_docs)]
//! Core abstractions of the module system: addresses, execution contexts and
//! the [`Module`] trait implemented by every state machine in the workspace.

pub mod common;
pub mod module;

pub use common::*;
pub use module::*;

use anyhow::{ensure, Result};
use sov_modules_core::Context;
use tracing::debug;

use crate::{ElectionConfig, ElectionLedger, ElectionState};

impl<C: Context> ElectionLedger<C> {
    /// Installs the admin and the vote cap into a fresh state. A state that
    /// already has an admin is left untouched.
    pub(crate) fn init_module(
        &self,
        config: &ElectionConfig<C>,
        state: &mut ElectionState<C::Address>,
    ) -> Result<()> {
        ensure!(state.admin.is_none(), "Election is already initialized");
        ensure!(config.max_voters > 0, "max_voters must be positive");

        state.admin = Some(config.admin.clone());
        state.max_voters = config.max_voters;

        debug!(admin = %config.admin, max_voters = config.max_voters, "Election initialized");
        Ok(())
    }
}

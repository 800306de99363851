/// Failure to encode or decode a bech32 address.
#[derive(Debug, thiserror::Error)]
pub enum Bech32ParseError {
    /// The underlying codec rejected the input.
    #[error("Bech32 error: {0}")]
    Bech32(#[from] bech32::Error),
    /// The address was encoded under a foreign human readable part.
    #[error("Wrong HRP: {0}")]
    WrongHRP(String),
}

/// General error type in the Module System.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// Custom error thrown by a module.
    #[error(transparent)]
    ModuleError(#[from] anyhow::Error),
}

pub type ScrollvineResult<T> = Result<T, ScrollvineError>;

#[derive(thiserror::Error, Debug)]
pub enum ScrollvineError {
    /// Scene config or window data violated an invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Window derivation produced an unusable plan.
    #[error("compile error: {0}")]
    Compile(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollvineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn compile(msg: impl Into<String>) -> Self {
        Self::Compile(msg.into())
    }
}

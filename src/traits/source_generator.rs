use crate::model::{SourceArtifact, Symbol};

/// The injected generation callback.
///
/// Called once per matched symbol with the transformed [`Symbol`]. It must be
/// a pure function of its input: the host skips the call entirely when the
/// symbol is structurally equal to the previous pass, so any hidden state
/// would leak stale output.
///
/// Closures of the shape `Fn(&Symbol) -> anyhow::Result<Vec<SourceArtifact>>`
/// implement this trait directly.
pub trait SourceGenerator: Send + Sync {
    fn generate(&self, symbol: &Symbol) -> anyhow::Result<Vec<SourceArtifact>>;
}

impl<F> SourceGenerator for F
where
    F: Fn(&Symbol) -> anyhow::Result<Vec<SourceArtifact>> + Send + Sync,
{
    fn generate(&self, symbol: &Symbol) -> anyhow::Result<Vec<SourceArtifact>> {
        self(symbol)
    }
}

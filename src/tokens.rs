// src/tokens.rs
//! Token counts for the `--min-tokens` clone threshold.

use std::sync::LazyLock;
use tiktoken_rs::CoreBPE;

// Loaded on the first clone candidate. A load failure is logged once and
// every count is 0 afterwards, so `--min-tokens` above 0 rejects all clones.
static BPE: LazyLock<Option<CoreBPE>> = LazyLock::new(|| {
    tiktoken_rs::cl100k_base()
        .map_err(|e| tracing::error!("cl100k_base encoding unavailable: {e}"))
        .ok()
});

pub struct Tokenizer;

impl Tokenizer {
    /// Tokens in a duplicated fragment, as reported in the PMD `tokens`
    /// attribute.
    #[must_use]
    pub fn count(fragment: &str) -> usize {
        BPE.as_ref()
            .map_or(0, |bpe| bpe.encode_ordinary(fragment).len())
    }

    #[must_use]
    pub fn is_available() -> bool {
        BPE.is_some()
    }
}

use crate::types::CharLength;

/// Tunables for a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// The number of characters a URL counts as, regardless of its literal length.
    pub url_weight: CharLength,
    /// Replace literal `...` with a single ellipsis character before tokenizing.
    pub compact_ellipsis: bool,
    /// Apply the case-preserving "GNU/Linux is great" correction before tokenizing.
    pub correct_linux_phrases: bool,
    /// Merge multi-word dictionary phrases into single word tokens.
    pub combine_phrases: bool,
}

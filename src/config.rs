use crate::constants::DEFAULT_URL_WEIGHT;
use crate::models::ResolverConfig;

pub const DEFAULT_RESOLVER_CONFIG: &ResolverConfig = &ResolverConfig {
    url_weight: DEFAULT_URL_WEIGHT,
    compact_ellipsis: true,
    correct_linux_phrases: true,
    combine_phrases: true,
};

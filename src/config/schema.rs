use serde::{Deserialize, Serialize};

use crate::routing::RankerConfig;
use crate::scoring::ScoringConfig;

/// Top-level configuration file schema. Both sections are optional and
/// partial; anything omitted keeps the built-in clinical defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub ranking: RankerConfig,
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Kernel weights for the positional evaluation heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Weight of an exact pair (`PP`).
    pub pair_weight: i64,
    /// Weight of an exact triple (`PPP`).
    pub triple_weight: i64,
    /// Weight of a split triple (`PP_P` or `P_PP`), applied per shape.
    pub split_weight: i64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            pair_weight: 1,
            triple_weight: 100,
            split_weight: 100,
        }
    }
}

/// One depth-table entry: search `depth` plies when exactly `actions`
/// columns are open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRule {
    pub actions: usize,
    pub depth: usize,
}

/// Maps the number of currently open columns to a search depth. Fewer open
/// columns means a smaller branching factor, so the table searches deeper
/// as the board fills up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthPolicy {
    pub rules: Vec<DepthRule>,
    pub default_depth: usize,
}

impl Default for DepthPolicy {
    fn default() -> Self {
        DepthPolicy {
            rules: vec![
                DepthRule { actions: 6, depth: 4 },
                DepthRule { actions: 5, depth: 5 },
                DepthRule { actions: 4, depth: 6 },
                DepthRule { actions: 3, depth: 8 },
                DepthRule { actions: 2, depth: 13 },
            ],
            default_depth: 1,
        }
    }
}

impl DepthPolicy {
    /// A policy that always searches to the same depth.
    pub fn fixed(depth: usize) -> Self {
        DepthPolicy {
            rules: Vec::new(),
            default_depth: depth,
        }
    }

    /// Depth to search when `available` columns are open.
    pub fn depth_for(&self, available: usize) -> usize {
        self.rules
            .iter()
            .find(|rule| rule.actions == available)
            .map(|rule| rule.depth)
            .unwrap_or(self.default_depth)
    }
}

/// How the expectation node combines branch values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectimaxMode {
    /// Branch probability taken from the child's open column count, each
    /// branch folded in through a max with the running accumulator.
    Legacy,
    /// Textbook expectation: uniform probability over the current node's
    /// branches, plain weighted sum.
    Expected,
}

/// Search engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Utility magnitude of a decided board: `+terminal_utility` when
    /// Player One has won, negated for Player Two.
    pub terminal_utility: f64,
    pub depth: DepthPolicy,
    pub expectimax: ExpectimaxMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            terminal_utility: 10_000.0,
            depth: DepthPolicy::default(),
            expectimax: ExpectimaxMode::Legacy,
        }
    }
}

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub eval: EvalConfig,
    pub search: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            eval: EvalConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.eval.pair_weight < 0 {
            return Err(ConfigError::Validation(
                "eval.pair_weight must be >= 0".into(),
            ));
        }
        if self.eval.triple_weight < 0 {
            return Err(ConfigError::Validation(
                "eval.triple_weight must be >= 0".into(),
            ));
        }
        if self.eval.split_weight < 0 {
            return Err(ConfigError::Validation(
                "eval.split_weight must be >= 0".into(),
            ));
        }
        if self.search.terminal_utility <= 0.0 {
            return Err(ConfigError::Validation(
                "search.terminal_utility must be > 0".into(),
            ));
        }
        if self.search.depth.default_depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth.default_depth must be >= 1".into(),
            ));
        }
        for rule in &self.search.depth.rules {
            if rule.depth == 0 {
                return Err(ConfigError::Validation(format!(
                    "search.depth rule for {} actions must have depth >= 1",
                    rule.actions
                )));
            }
        }
        let mut seen = Vec::new();
        for rule in &self.search.depth.rules {
            if seen.contains(&rule.actions) {
                return Err(ConfigError::Validation(format!(
                    "search.depth has duplicate rule for {} actions",
                    rule.actions
                )));
            }
            seen.push(rule.actions);
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}

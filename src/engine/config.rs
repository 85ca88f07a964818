use serde::{Deserialize, Serialize};

use crate::concurrent::ExecutionMode;
use crate::error::{Result, SieveError};
use crate::lexical::ranking::{
    DEFAULT_ACCUMULATOR_SHARDS, DEFAULT_PARTITION_COUNT, MAX_RESULT_DOCUMENT_COUNT,
    RELEVANCE_EPSILON, RankingParams,
};

/// Number of requests remembered by a request queue (one day of minutes).
pub const DEFAULT_REQUEST_WINDOW: usize = 1440;

/// Configuration for the search engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Words dropped from documents and queries.
    pub stop_words: Vec<String>,
    /// Maximum number of hits returned by a top-N search.
    pub max_results: usize,
    /// Relevances closer than this fall back to rating order.
    pub relevance_epsilon: f64,
    /// Number of tasks a parallel operation is split into.
    pub partition_count: usize,
    /// Number of shards of the parallel score accumulator.
    pub accumulator_shards: usize,
    /// Sliding window of a request queue.
    pub request_window: usize,
    /// Mode used by the calls that do not take one.
    pub default_mode: ExecutionMode,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            stop_words: Vec::new(),
            max_results: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
            partition_count: DEFAULT_PARTITION_COUNT,
            accumulator_shards: DEFAULT_ACCUMULATOR_SHARDS,
            request_window: DEFAULT_REQUEST_WINDOW,
            default_mode: ExecutionMode::Sequential,
        }
    }

    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SieveError::invalid_config("max_results must be positive"));
        }
        if !self.relevance_epsilon.is_finite() || self.relevance_epsilon < 0.0 {
            return Err(SieveError::invalid_config(format!(
                "relevance_epsilon must be a finite non-negative number, got {}",
                self.relevance_epsilon
            )));
        }
        if self.partition_count == 0 {
            return Err(SieveError::invalid_config("partition_count must be positive"));
        }
        if self.accumulator_shards == 0 {
            return Err(SieveError::invalid_config(
                "accumulator_shards must be positive",
            ));
        }
        if self.request_window == 0 {
            return Err(SieveError::invalid_config("request_window must be positive"));
        }
        Ok(())
    }

    pub fn ranking_params(&self) -> RankingParams {
        RankingParams {
            max_results: self.max_results,
            relevance_epsilon: self.relevance_epsilon,
            partition_count: self.partition_count,
            accumulator_shards: self.accumulator_shards,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Space-separated stop words.
    pub fn stop_words_text(self, text: &str) -> Self {
        self.stop_words(text.split(' ').filter(|word| !word.is_empty()))
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }

    pub fn relevance_epsilon(mut self, epsilon: f64) -> Self {
        self.config.relevance_epsilon = epsilon;
        self
    }

    pub fn partition_count(mut self, parts: usize) -> Self {
        self.config.partition_count = parts;
        self
    }

    pub fn accumulator_shards(mut self, shards: usize) -> Self {
        self.config.accumulator_shards = shards;
        self
    }

    pub fn request_window(mut self, window: usize) -> Self {
        self.config.request_window = window;
        self
    }

    pub fn default_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.default_mode = mode;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

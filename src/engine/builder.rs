//! Builder for configuring engine instances

use std::sync::Arc;

use super::Engine;
use crate::config::{Config, FixedThreshold};
use crate::traits::{HistorySink, PoseExtractor, ReferenceStore, ThresholdSource};
use crate::{HeimdallError, Result};

/// Main entry point for creating engine instances.
pub struct Heimdall;

impl Heimdall {
    /// Create a new builder around the pose extractor.
    pub fn builder<X: PoseExtractor>(extractor: X) -> EngineBuilder<X> {
        EngineBuilder::new(extractor)
    }
}

/// Builder for configuring engine instances.
pub struct EngineBuilder<X: PoseExtractor> {
    extractor: X,
    store: Option<Arc<dyn ReferenceStore>>,
    sink: Option<Arc<dyn HistorySink>>,
    threshold: Option<Arc<dyn ThresholdSource>>,
    config: Config,
    target: Option<String>,
}

impl<X: PoseExtractor> EngineBuilder<X> {
    pub fn new(extractor: X) -> Self {
        Self {
            extractor,
            store: None,
            sink: None,
            threshold: None,
            config: Config::default(),
            target: None,
        }
    }

    /// Set the reference store the engine reloads snapshots from.
    pub fn reference_store(mut self, store: Arc<dyn ReferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the sink that receives verified events and one-shot checks.
    pub fn history_sink(mut self, sink: Arc<dyn HistorySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the match threshold source.
    ///
    /// Defaults to a fixed threshold taken from the configuration.
    pub fn threshold_source(mut self, source: Arc<dyn ThresholdSource>) -> Self {
        self.threshold = Some(source);
        self
    }

    /// Set the engine configuration (sanitized at build time).
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the initial verification target movement.
    pub fn target(mut self, movement: impl Into<String>) -> Self {
        self.target = Some(movement.into());
        self
    }

    /// Build the engine.
    ///
    /// Requires a reference store and a history sink; everything else has
    /// defaults. The reference snapshot starts empty; call
    /// [`Engine::reload_references`] to populate it.
    pub fn build(self) -> Result<Engine<X>> {
        let store = self.store.ok_or_else(|| {
            HeimdallError::Configuration("no reference store configured".to_string())
        })?;
        let sink = self.sink.ok_or_else(|| {
            HeimdallError::Configuration("no history sink configured".to_string())
        })?;
        let config = self.config.sanitized();
        let threshold = self
            .threshold
            .unwrap_or_else(|| Arc::new(FixedThreshold(config.threshold)));

        Ok(Engine::new(
            self.extractor,
            store,
            sink,
            threshold,
            config,
            self.target.unwrap_or_default(),
        ))
    }
}

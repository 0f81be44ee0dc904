//! Named logger registry
//!
//! Maps logger names to shared logger instances. The root logger has the
//! empty name; every other logger copies the root's channel reference and
//! threshold once, when it is created. Later changes to the root do not
//! reach loggers that already exist.
//!
//! The registry is an ordinary value: construct it once and pass it (or an
//! `Arc` of it) to the code that needs it.

use super::{
    channel::{Channel, ChannelHandle},
    filter::{Filter, StdFilter},
    format::{Format, StdFormat},
    log_level::{LogLevel, DEFAULT_THRESHOLD},
    logger::Logger,
};
use crate::channels::ConsoleChannel;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name of the root logger.
pub const ROOT: &str = "";

pub struct Registry<F = StdFormat, L = StdFilter, D = ConsoleChannel> {
    loggers: Mutex<HashMap<String, Arc<Logger<F, L, D>>>>,
    threshold: LogLevel,
    format: F,
    filter: L,
}

impl Registry {
    /// Empty registry with the default policies and threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policies(DEFAULT_THRESHOLD, StdFormat::default(), StdFilter)
    }

    /// Empty registry whose loggers start at `threshold`.
    #[must_use]
    pub fn with_threshold(threshold: LogLevel) -> Self {
        Self::with_policies(threshold, StdFormat::default(), StdFilter)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, L, D> Registry<F, L, D>
where
    F: Format + Clone,
    L: Filter + Clone,
    D: Channel + Default + 'static,
{
    /// Empty registry; every logger it creates gets a clone of `format` and
    /// `filter`.
    #[must_use]
    pub fn with_policies(threshold: LogLevel, format: F, filter: L) -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
            threshold,
            format,
            filter,
        }
    }

    /// Create the root logger up front with `channel`, so named loggers
    /// created afterwards share it.
    #[must_use]
    pub fn with_root_channel(self, channel: impl Into<ChannelHandle>) -> Self {
        self.root().set_channel(channel);
        self
    }

    /// Logger registered under `name`, created on first lookup.
    ///
    /// Creating a named logger also creates the root logger if needed. The
    /// whole lookup runs under the registry lock, so concurrent first
    /// lookups of one name always yield the same instance.
    pub fn get(&self, name: &str) -> Arc<Logger<F, L, D>> {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(self.create(name));
        if !name.is_empty() {
            let root = self.root_locked(&mut loggers);
            logger.inherit_from(&root);
        }
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    pub fn root(&self) -> Arc<Logger<F, L, D>> {
        self.get(ROOT)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    fn create(&self, name: &str) -> Logger<F, L, D> {
        Logger::with_policies(name, self.threshold, self.format.clone(), self.filter.clone())
    }

    fn root_locked(
        &self,
        loggers: &mut HashMap<String, Arc<Logger<F, L, D>>>,
    ) -> Arc<Logger<F, L, D>> {
        Arc::clone(
            loggers
                .entry(ROOT.to_string())
                .or_insert_with(|| Arc::new(self.create(ROOT))),
        )
    }
}

impl<F, L, D> fmt::Debug for Registry<F, L, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.loggers.lock().len())
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

//! Shared helpers for unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::core::{Result, Source};

/// Counters shared between a [`Tracked`] source and the test observing it
#[derive(Debug, Clone, Default)]
pub(crate) struct Stats {
    pulls: Arc<AtomicUsize>,
    finishes: Arc<AtomicUsize>,
}

impl Stats {
    pub(crate) fn pulls(&self) -> usize {
        self.pulls.load(Ordering::SeqCst)
    }

    pub(crate) fn finishes(&self) -> usize {
        self.finishes.load(Ordering::SeqCst)
    }
}

/// A source that records how often it is pulled and finalized
pub(crate) struct Tracked<T> {
    items: VecDeque<T>,
    stats: Stats,
}

impl<T> Tracked<T> {
    pub(crate) fn new<I: IntoIterator<Item = T>>(items: I) -> (Self, Stats) {
        let stats = Stats::default();
        let source = Self {
            items: items.into_iter().collect(),
            stats: stats.clone(),
        };
        (source, stats)
    }
}

#[async_trait]
impl<T: Send + 'static> Source for Tracked<T> {
    type Item = T;

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        self.stats.pulls.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.pop_front())
    }

    async fn finish(&mut self) -> Result<()> {
        self.stats.finishes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

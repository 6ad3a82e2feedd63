//! Scheduler for managing the crawl frontier and request pacing
//!
//! This module handles:
//! - FIFO queue of URLs waiting to be crawled
//! - The visited set, owned per crawl
//! - The enqueue policy for links already waiting in the queue
//! - The fixed delay between requests

use crate::config::EnqueuePolicy;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;

/// Queue and visited set for one crawl
///
/// A URL enters the visited set when it is taken for processing, before it
/// is fetched. Visited URLs are never enqueued again, but a URL may sit in
/// the queue more than once under `EnqueuePolicy::AllowDuplicates`; such
/// copies are dropped when dequeued.
#[derive(Debug, Clone)]
pub struct Frontier {
    queue: VecDeque<String>,
    visited: HashSet<String>,
    queued: HashSet<String>,
    policy: EnqueuePolicy,
}

impl Frontier {
    /// Creates a frontier holding only `seed`
    pub fn new(seed: impl Into<String>, policy: EnqueuePolicy) -> Self {
        let mut frontier = Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            queued: HashSet::new(),
            policy,
        };
        frontier.enqueue(seed.into());
        frontier
    }

    /// Removes and returns the URL at the head of the queue
    pub fn pop(&mut self) -> Option<String> {
        let url = self.queue.pop_front()?;
        if self.policy == EnqueuePolicy::DedupOnEnqueue {
            self.queued.remove(&url);
        }
        Some(url)
    }

    /// Records `url` as taken for processing
    ///
    /// Returns false if it was already visited.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Appends `url` to the queue tail unless the policy rejects it
    ///
    /// Returns true if the URL was queued.
    pub fn enqueue(&mut self, url: String) -> bool {
        if self.visited.contains(&url) {
            return false;
        }

        match self.policy {
            EnqueuePolicy::AllowDuplicates => {}
            EnqueuePolicy::DedupOnEnqueue => {
                if !self.queued.insert(url.clone()) {
                    return false;
                }
            }
        }

        self.queue.push_back(url);
        true
    }

    /// Number of URLs waiting, duplicates included
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Fixed delay applied after every processed URL
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    delay: Duration,
    pauses: u32,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pauses: 0 }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of pauses taken so far, zero-length ones included
    pub fn pauses(&self) -> u32 {
        self.pauses
    }

    /// Sleeps for the configured delay; a zero delay returns immediately
    pub async fn pause(&mut self) {
        self.pauses += 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

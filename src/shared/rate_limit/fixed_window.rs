//! Fixed-window request counting keyed by client address.
//!
//! Each key owns a counter bound to the window that was open when the key
//! first (re)appeared; the counter resets when the next window boundary
//! passes. Counters live in a dashmap, so concurrent requests from the same
//! address serialize on the shard lock for that key only.

use dashmap::DashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FixedWindowPolicy {
    pub max_requests: u32,
    pub window: Duration,
}

impl FixedWindowPolicy {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Time until the current window closes and the counter resets.
    pub reset_after: Duration,
}

struct WindowSlot {
    window_start: Instant,
    count: u32,
}

pub struct FixedWindowLimiter {
    policy: FixedWindowPolicy,
    windows: DashMap<String, WindowSlot>,
}

impl FixedWindowLimiter {
    pub fn new(policy: FixedWindowPolicy) -> Self {
        Self {
            policy,
            windows: DashMap::new(),
        }
    }

    pub fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> RateLimitDecision {
        let policy = self.policy;
        let mut slot = self.windows.entry(key.to_string()).or_insert(WindowSlot {
            window_start: now,
            count: 0,
        });

        let elapsed = now.duration_since(slot.window_start);
        if elapsed >= policy.window {
            slot.window_start = now;
            slot.count = 0;
        }

        let reset_after = policy
            .window
            .saturating_sub(now.duration_since(slot.window_start));

        if slot.count >= policy.max_requests {
            return RateLimitDecision {
                allowed: false,
                limit: policy.max_requests,
                remaining: 0,
                reset_after,
            };
        }

        slot.count += 1;
        RateLimitDecision {
            allowed: true,
            limit: policy.max_requests,
            remaining: policy.max_requests - slot.count,
            reset_after,
        }
    }

    /// Drop keys whose window closed before `now - max_age`; keeps the map
    /// from accumulating one entry per client address seen since startup.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.windows
            .retain(|_, slot| now.duration_since(slot.window_start) <= max_age);
    }

    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }
}

//! Simulated unread-badge arrivals.
//!
//! Stand-in for inbound push until the backend delivers per-channel unread
//! counts: each tick may bump the badge of one inactive channel.

#[cfg(test)]
#[path = "badges_test.rs"]
mod badges_test;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::console::ports::ChannelManager;
use crate::state::channels::ChannelId;

pub struct BadgeSimulator {
    rng: SmallRng,
    probability: f64,
}

impl BadgeSimulator {
    pub fn new(seed: u64, probability: f64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed), probability }
    }

    /// Run one tick. Returns the channel whose badge was incremented.
    ///
    /// The active channel is never a candidate.
    pub fn tick(&mut self, channels: &dyn ChannelManager) -> Option<ChannelId> {
        if self.rng.random::<f64>() >= self.probability {
            return None;
        }

        let current = channels.current_channel();
        let candidates: Vec<ChannelId> = ChannelId::ALL.into_iter().filter(|c| *c != current).collect();
        let target = *candidates.choose(&mut self.rng)?;

        let count = channels.badge(target).saturating_add(1);
        channels.update_notification_badge(target, count);
        Some(target)
    }
}

use std::collections::HashMap;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{normalize_name, RgbColor, CHANNEL_MAX, CHANNEL_MIN};

/// Assigns each (brand, category) pair a display color on first sight and
/// returns the same color for the rest of the process.
///
/// Colors live only in memory; a restart draws new ones.
#[derive(Debug)]
pub struct ColorKeyAssigner {
    cache: HashMap<(String, String), RgbColor>,
    rng: StdRng,
}

impl ColorKeyAssigner {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[cfg(test)]
    fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            cache: HashMap::new(),
            rng,
        }
    }

    /// Color for the pair, compared case-insensitively.
    pub fn color_for(&mut self, brand: &str, category: &str) -> RgbColor {
        let key = (normalize_name(brand), normalize_name(category));
        if let Some(color) = self.cache.get(&key) {
            return *color;
        }
        let color = RgbColor::new(self.channel(), self.channel(), self.channel());
        debug!("Assigned color {} to ({}, {})", color, key.0, key.1);
        self.cache.insert(key, color);
        color
    }

    /// Cached color for the pair, without assigning one.
    pub fn peek(&self, brand: &str, category: &str) -> Option<RgbColor> {
        self.cache
            .get(&(normalize_name(brand), normalize_name(category)))
            .copied()
    }

    /// Number of distinct pairs seen so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn channel(&mut self) -> u8 {
        self.rng.gen_range(CHANNEL_MIN..=CHANNEL_MAX)
    }
}

impl Default for ColorKeyAssigner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pair_same_color_case_insensitive() {
        let mut colors = ColorKeyAssigner::new();
        let first = colors.color_for("Nike", "shoe");
        let second = colors.color_for("NIKE", "SHOE");
        assert_eq!(first, second);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors.peek("nike", "Shoe"), Some(first));
    }

    #[test]
    fn test_new_pair_gets_own_cache_entry() {
        let mut colors = ColorKeyAssigner::with_seed(7);
        colors.color_for("NIKE", "SHOE");
        colors.color_for("NIKE", "BAG");
        colors.color_for("PUMA", "SHOE");
        assert_eq!(colors.len(), 3);
        assert!(colors.peek("ADIDAS", "SHOE").is_none());
    }

    #[test]
    fn test_channels_stay_in_range() {
        let mut colors = ColorKeyAssigner::with_seed(42);
        for i in 0..500 {
            let color = colors.color_for(&format!("BRAND{}", i), "CAT");
            for channel in color.channels() {
                assert!(channel >= CHANNEL_MIN, "channel {} below range", channel);
            }
        }
    }

    #[test]
    fn test_seeded_assigners_agree() {
        let mut a = ColorKeyAssigner::with_seed(3);
        let mut b = ColorKeyAssigner::with_seed(3);
        assert_eq!(a.color_for("NIKE", "SHOE"), b.color_for("nike", "shoe"));
    }
}

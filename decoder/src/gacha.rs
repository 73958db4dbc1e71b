//! Seeded draw simulation.
//!
//! The game's draw sequence is reproducible from a single 32-bit seed: an
//! xorshift32 chain yields two values per roll, one picking the slot and
//! one placing the rarity inside a 0..10000 band against configured
//! thresholds. Pool configuration is loaded from JSON keyed by pool name,
//! each pool carrying its ordered slots and thresholds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Draw pool configuration document: pool name → pool.
pub type PoolConfig = BTreeMap<String, DrawPool>;

/// One configured draw pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawPool {
    pub slots: Vec<DrawSlot>,
    pub rarity_thresholds: RarityThresholds,
}

/// One slot of a pool, in draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawSlot {
    pub id: i64,
    pub name: String,
}

/// Rarity band boundaries over the 0..10000 range. Values below `normal`
/// are Normal, values in `normal..rare` are Rare, values at or above
/// `rare` are SuperRare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RarityThresholds {
    pub normal: u32,
    pub rare: u32,
}

/// Rarity band of one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Normal,
    Rare,
    SuperRare,
}

impl Rarity {
    /// Fixed display label, matching the feed's own strings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "ノーマル",
            Self::Rare => "レア",
            Self::SuperRare => "激レア",
        }
    }
}

/// One simulated draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResult {
    /// 1-based roll number.
    pub roll: usize,
    pub slot_id: i64,
    pub name: String,
    pub rarity: Rarity,
}

/// Advances the xorshift32 state by one step.
pub fn xorshift32(mut seed: u32) -> u32 {
    seed ^= seed << 13;
    seed ^= seed >> 17;
    seed ^= seed << 15;
    seed
}

/// Generates the seed chain starting from `initial`: element 0 is the
/// initial seed itself, each following element one xorshift32 step on.
pub fn seed_sequence(initial: u32, count: usize) -> Vec<u32> {
    let mut seeds = Vec::with_capacity(count);
    let mut current = initial;
    for index in 0..count {
        if index > 0 {
            current = xorshift32(current);
        }
        seeds.push(current);
    }
    seeds
}

/// Simulates `rolls` draws from `pool` with the given seed.
///
/// Deterministic: the same seed and pool always yield the same draws. Two
/// seeds are consumed per roll — slot pick first, rarity second. An empty
/// pool yields no draws.
pub fn simulate_draws(pool: &DrawPool, seed: u32, rolls: usize) -> Vec<DrawResult> {
    if pool.slots.is_empty() {
        return Vec::new();
    }

    let seeds = seed_sequence(seed, rolls * 2);
    let mut results = Vec::with_capacity(rolls);

    for roll in 0..rolls {
        let slot_seed = seeds[roll * 2];
        let rarity_seed = seeds[roll * 2 + 1];

        let slot = &pool.slots[slot_seed as usize % pool.slots.len()];
        let rarity_rand = rarity_seed % 10_000;

        let thresholds = pool.rarity_thresholds;
        let rarity = if rarity_rand >= thresholds.rare {
            Rarity::SuperRare
        } else if rarity_rand >= thresholds.normal {
            Rarity::Rare
        } else {
            Rarity::Normal
        };

        results.push(DrawResult {
            roll: roll + 1,
            slot_id: slot.id,
            name: slot.name.clone(),
            rarity,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pool() -> DrawPool {
        DrawPool {
            slots: vec![
                DrawSlot { id: 1000, name: "Alpha".to_string() },
                DrawSlot { id: 1001, name: "Beta".to_string() },
                DrawSlot { id: 1002, name: "Gamma".to_string() },
            ],
            rarity_thresholds: RarityThresholds { normal: 7000, rare: 9500 },
        }
    }

    #[test]
    fn test_xorshift32_reference_sequence() {
        // Hand-computed from the reference implementation.
        assert_eq!(xorshift32(1), 268_476_417);
        assert_eq!(xorshift32(268_476_417), 1_157_628_417);
        assert_eq!(xorshift32(42), 2_685_485_096);
    }

    #[test]
    fn test_seed_sequence_starts_with_initial() {
        let seeds = seed_sequence(1, 3);
        assert_eq!(seeds, vec![1, 268_476_417, 1_157_628_417]);
    }

    #[test]
    fn test_draws_are_deterministic() {
        let pool = test_pool();
        let first = simulate_draws(&pool, 12_345, 10);
        let second = simulate_draws(&pool, 12_345, 10);
        assert_eq!(first.len(), 10);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.slot_id, b.slot_id);
            assert_eq!(a.rarity, b.rarity);
        }
    }

    #[test]
    fn test_rarity_banding_honors_thresholds() {
        let mut pool = test_pool();

        // Everything below `normal` is Normal.
        pool.rarity_thresholds = RarityThresholds { normal: 10_000, rare: 10_000 };
        assert!(
            simulate_draws(&pool, 7, 10)
                .iter()
                .all(|draw| draw.rarity == Rarity::Normal)
        );

        // Everything at or above `rare` is SuperRare.
        pool.rarity_thresholds = RarityThresholds { normal: 0, rare: 0 };
        assert!(
            simulate_draws(&pool, 7, 10)
                .iter()
                .all(|draw| draw.rarity == Rarity::SuperRare)
        );
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let pool = DrawPool {
            slots: Vec::new(),
            rarity_thresholds: RarityThresholds { normal: 7000, rare: 9500 },
        };
        assert!(simulate_draws(&pool, 1, 10).is_empty());
    }

    #[test]
    fn test_pool_config_json_shape() {
        let json = r#"{
            "NC": {
                "slots": [{"id": 1000, "name": "Alpha"}],
                "rarityThresholds": {"normal": 7000, "rare": 9500}
            }
        }"#;
        let config: PoolConfig = serde_json::from_str(json).unwrap();
        let pool = config.get("NC").expect("NC pool");
        assert_eq!(pool.slots[0].name, "Alpha");
        assert_eq!(pool.rarity_thresholds.rare, 9500);
    }

    #[test]
    fn test_rarity_labels() {
        assert_eq!(Rarity::Normal.label(), "ノーマル");
        assert_eq!(Rarity::Rare.label(), "レア");
        assert_eq!(Rarity::SuperRare.label(), "激レア");
    }
}

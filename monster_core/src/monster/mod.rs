//! Monster - Stats plus the Train/Rest/Battle transitions
//!
//! All rolls are drawn from the injected [`RandomSource`] in a fixed order:
//! - train: xp gain, then level-up rolls
//! - battle: win chance, xp gain (wins only), then level-up rolls
//! - level-up: attack, defense, speed
//! - rest: energy recovered

mod outcome;
mod stats;

pub use outcome::{
    BattleOutcome, BattleResult, LevelUp, MonsterSnapshot, RestOutcome, TrainOutcome,
};
pub use stats::MonsterStats;

use crate::config::constants::{
    BATTLE_ENERGY_COST, BATTLE_LOSS_PENALTY, BATTLE_WIN_CHANCE, BATTLE_XP_GAIN,
    LEVEL_UP_ATTACK_GAIN, LEVEL_UP_DEFENSE_GAIN, LEVEL_UP_SPEED_GAIN, MAX_ENERGY, MAX_XP_GROWTH,
    REST_RECOVERY, TRAIN_ENERGY_COST, TRAIN_XP_GAIN,
};
use crate::error::MonsterError;
use crate::rng::{RandomSource, RngSource};
use crate::types::Action;
use rand::rngs::StdRng;

/// A single monster and the dice it rolls with
#[derive(Debug, Clone)]
pub struct Monster<R> {
    stats: MonsterStats,
    rng: R,
}

impl Monster<RngSource<StdRng>> {
    /// Fresh monster with a reproducible random source
    pub fn seeded(seed: u64) -> Self {
        Monster::new(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> Monster<R> {
    /// Fresh monster with starting stats
    pub fn new(rng: R) -> Self {
        Self::with_stats(MonsterStats::default(), rng)
    }

    pub fn with_stats(stats: MonsterStats, rng: R) -> Self {
        Monster { stats, rng }
    }

    pub fn stats(&self) -> &MonsterStats {
        &self.stats
    }

    pub fn snapshot(&self) -> MonsterSnapshot {
        MonsterSnapshot::from(&self.stats)
    }

    pub fn into_parts(self) -> (MonsterStats, R) {
        (self.stats, self.rng)
    }

    /// Spend 20 energy for 15-25 XP
    pub fn train(&mut self) -> Result<TrainOutcome, MonsterError> {
        self.require_energy(Action::Train)?;

        let gained_xp = self.roll(TRAIN_XP_GAIN);
        self.stats.xp = self.stats.xp.saturating_add(gained_xp);
        self.stats.energy -= TRAIN_ENERGY_COST;
        tracing::debug!(gained_xp, energy = self.stats.energy, "trained");

        let level_up = self.check_level_up();
        Ok(TrainOutcome {
            gained_xp,
            level_up,
        })
    }

    /// Recover 20-40 energy, capped at 100. Never fails.
    pub fn rest(&mut self) -> RestOutcome {
        let recovered = self.roll(REST_RECOVERY);
        let energy = self.stats.energy.saturating_add(recovered as i32);
        self.stats.energy = energy.min(MAX_ENERGY);
        tracing::debug!(recovered, energy = self.stats.energy, "rested");

        RestOutcome { recovered }
    }

    /// Fight a coin-flip battle for 30 energy
    ///
    /// A win grants 30-50 XP. A loss costs 15 energy on top of the flat cost,
    /// and energy is not floored, so it can end below zero.
    pub fn battle(&mut self) -> Result<BattleOutcome, MonsterError> {
        self.require_energy(Action::Battle)?;

        let result = if self.rng.roll_chance(BATTLE_WIN_CHANCE) {
            let gained_xp = self.roll(BATTLE_XP_GAIN);
            self.stats.xp = self.stats.xp.saturating_add(gained_xp);
            BattleResult::Won { gained_xp }
        } else {
            self.stats.energy -= BATTLE_LOSS_PENALTY;
            BattleResult::Lost
        };
        self.stats.energy -= BATTLE_ENERGY_COST;
        tracing::debug!(?result, energy = self.stats.energy, "battled");

        let level_up = self.check_level_up();
        Ok(BattleOutcome { result, level_up })
    }

    fn require_energy(&self, action: Action) -> Result<(), MonsterError> {
        let required = action.energy_cost();
        if self.stats.energy < required {
            return Err(MonsterError::InsufficientEnergy {
                action,
                required,
                available: self.stats.energy,
            });
        }
        Ok(())
    }

    /// Single-step check: at most one level per XP gain, excess XP is dropped
    fn check_level_up(&mut self) -> Option<LevelUp> {
        if self.stats.xp < self.stats.max_xp {
            return None;
        }

        let (numerator, denominator) = MAX_XP_GROWTH;
        self.stats.level = self.stats.level.saturating_add(1);
        self.stats.xp = 0;
        // Integer division truncates like floor() for non-negative values
        let grown = u64::from(self.stats.max_xp) * u64::from(numerator) / u64::from(denominator);
        self.stats.max_xp = u32::try_from(grown).unwrap_or(u32::MAX);

        let attack_gain = self.roll(LEVEL_UP_ATTACK_GAIN);
        let defense_gain = self.roll(LEVEL_UP_DEFENSE_GAIN);
        let speed_gain = self.roll(LEVEL_UP_SPEED_GAIN);
        self.stats.attack = self.stats.attack.saturating_add(attack_gain);
        self.stats.defense = self.stats.defense.saturating_add(defense_gain);
        self.stats.speed = self.stats.speed.saturating_add(speed_gain);

        let level_up = LevelUp {
            new_level: self.stats.level,
            new_max_xp: self.stats.max_xp,
            attack_gain,
            defense_gain,
            speed_gain,
        };
        tracing::debug!(new_level = level_up.new_level, "level up");
        Some(level_up)
    }

    fn roll(&mut self, (low, high): (u32, u32)) -> u32 {
        self.rng.roll_range(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    fn monster_with(stats: MonsterStats, rolls: ScriptedRolls) -> Monster<ScriptedRolls> {
        Monster::with_stats(stats, rolls)
    }

    #[test]
    fn test_train_from_defaults() {
        let mut monster = Monster::new(ScriptedRolls::new().with_ranges([25]));

        let outcome = monster.train().unwrap();

        assert_eq!(outcome.gained_xp, 25);
        assert!(outcome.level_up.is_none());
        assert_eq!(monster.stats().xp, 25);
        assert_eq!(monster.stats().energy, 80);
        assert_eq!(monster.stats().level, 1);
        assert_eq!(monster.stats().attack, 10);
    }

    #[test]
    fn test_train_triggers_level_up() {
        let stats = MonsterStats {
            xp: 90,
            ..Default::default()
        };
        // xp gain, then attack/defense/speed gains
        let mut monster = monster_with(stats, ScriptedRolls::new().with_ranges([25, 4, 2, 3]));

        let outcome = monster.train().unwrap();

        let level_up = outcome.level_up.expect("should level up");
        assert_eq!(level_up.new_level, 2);
        assert_eq!(level_up.new_max_xp, 150);
        assert_eq!(
            (level_up.attack_gain, level_up.defense_gain, level_up.speed_gain),
            (4, 2, 3)
        );

        let after = monster.stats();
        assert_eq!(after.level, 2);
        assert_eq!(after.xp, 0);
        assert_eq!(after.max_xp, 150);
        assert_eq!(after.attack, 14);
        assert_eq!(after.defense, 7);
        assert_eq!(after.speed, 6);
        assert_eq!(after.energy, 80);
    }

    #[test]
    fn test_level_up_exactly_at_threshold() {
        let stats = MonsterStats {
            xp: 85,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_ranges([15]));

        let outcome = monster.train().unwrap();

        assert!(outcome.level_up.is_some());
        assert_eq!(monster.stats().level, 2);
    }

    #[test]
    fn test_train_low_energy_fails_without_change() {
        let stats = MonsterStats {
            energy: 10,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_ranges([25]));

        let err = monster.train().unwrap_err();

        assert_eq!(
            err,
            MonsterError::InsufficientEnergy {
                action: Action::Train,
                required: 20,
                available: 10,
            }
        );
        assert_eq!(*monster.stats(), stats);
        // The roll was never consumed
        assert!(!monster.into_parts().1.is_exhausted());
    }

    #[test]
    fn test_train_at_exact_cost() {
        let stats = MonsterStats {
            energy: 20,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_ranges([15]));

        assert!(monster.train().is_ok());
        assert_eq!(monster.stats().energy, 0);
    }

    #[test]
    fn test_rest_caps_at_max() {
        let stats = MonsterStats {
            energy: 90,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_ranges([40]));

        let outcome = monster.rest();

        assert_eq!(outcome.recovered, 40);
        assert_eq!(monster.stats().energy, 100);
    }

    #[test]
    fn test_rest_never_levels_up() {
        let stats = MonsterStats {
            xp: 150,
            energy: 10,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_ranges([20]));

        monster.rest();

        assert_eq!(monster.stats().level, 1);
        assert_eq!(monster.stats().xp, 150);
        assert_eq!(monster.stats().energy, 30);
    }

    #[test]
    fn test_battle_loss() {
        let mut monster = Monster::new(ScriptedRolls::new().with_chances([false]));

        let outcome = monster.battle().unwrap();

        assert_eq!(outcome.result, BattleResult::Lost);
        assert!(outcome.level_up.is_none());
        assert_eq!(monster.stats().energy, 55);
        assert_eq!(monster.stats().xp, 0);
    }

    #[test]
    fn test_battle_win() {
        let mut monster = Monster::new(
            ScriptedRolls::new()
                .with_chances([true])
                .with_ranges([38]),
        );

        let outcome = monster.battle().unwrap();

        assert_eq!(outcome.gained_xp(), Some(38));
        assert_eq!(monster.stats().xp, 38);
        assert_eq!(monster.stats().energy, 70);
    }

    #[test]
    fn test_battle_loss_can_go_negative() {
        let stats = MonsterStats {
            energy: 30,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_chances([false]));

        monster.battle().unwrap();

        assert_eq!(monster.stats().energy, -15);
    }

    #[test]
    fn test_battle_low_energy_fails_without_change() {
        let stats = MonsterStats {
            energy: 29,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_chances([true]));

        let err = monster.battle().unwrap_err();

        assert_eq!(err.action(), Action::Battle);
        assert_eq!(*monster.stats(), stats);
    }

    #[test]
    fn test_single_level_up_discards_overflow() {
        // 99 + 50 overshoots the threshold by 49; the overshoot is dropped
        let stats = MonsterStats {
            xp: 99,
            ..Default::default()
        };
        let mut monster = monster_with(
            stats,
            ScriptedRolls::new()
                .with_chances([true])
                .with_ranges([50, 2, 1, 1]),
        );

        let outcome = monster.battle().unwrap();

        assert_eq!(outcome.level_up.map(|l| l.new_level), Some(2));
        assert_eq!(monster.stats().level, 2);
        assert_eq!(monster.stats().xp, 0);
        assert_eq!(monster.stats().max_xp, 150);
    }

    #[test]
    fn test_max_xp_truncates() {
        let stats = MonsterStats {
            xp: 200,
            max_xp: 225,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_ranges([25]));

        monster.train().unwrap();

        // 225 * 1.5 = 337.5
        assert_eq!(monster.stats().max_xp, 337);
    }

    #[test]
    fn test_stats_saturate_near_u32_max() {
        let stats = MonsterStats {
            level: u32::MAX,
            xp: u32::MAX - 10,
            max_xp: u32::MAX,
            attack: u32::MAX - 1,
            defense: u32::MAX,
            speed: u32::MAX - 2,
            ..Default::default()
        };
        let mut monster = monster_with(stats, ScriptedRolls::new().with_ranges([25, 5, 4, 3]));

        let outcome = monster.train().unwrap();

        assert!(outcome.level_up.is_some());
        let after = monster.stats();
        assert_eq!(after.level, u32::MAX);
        assert_eq!(after.xp, 0);
        assert_eq!(after.max_xp, u32::MAX);
        assert_eq!(after.attack, u32::MAX);
        assert_eq!(after.defense, u32::MAX);
        assert_eq!(after.speed, u32::MAX);
    }

    #[test]
    fn test_battle_xp_saturates() {
        let stats = MonsterStats {
            xp: u32::MAX - 5,
            max_xp: u32::MAX,
            ..Default::default()
        };
        let mut monster = monster_with(
            stats,
            ScriptedRolls::new()
                .with_chances([true])
                .with_ranges([50, 2, 1, 1]),
        );

        let outcome = monster.battle().unwrap();

        assert_eq!(outcome.level_up.map(|l| l.new_level), Some(2));
        assert_eq!(monster.stats().max_xp, u32::MAX);
    }

    #[test]
    fn test_snapshot_matches_stats() {
        let stats = MonsterStats {
            level: 7,
            xp: 12,
            max_xp: 759,
            energy: 45,
            attack: 30,
            defense: 20,
            speed: 14,
        };
        let monster = monster_with(stats, ScriptedRolls::new());

        let snapshot = monster.snapshot();

        assert_eq!(snapshot.level, 7);
        assert_eq!(snapshot.energy, 45);
        assert_eq!(snapshot.evolution_stage, 1);
    }

    #[test]
    fn test_seeded_monster_is_reproducible() {
        let mut a = Monster::seeded(99);
        let mut b = Monster::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.train().ok(), b.train().ok());
            assert_eq!(a.rest(), b.rest());
            assert_eq!(a.battle().ok(), b.battle().ok());
        }
        assert_eq!(a.stats(), b.stats());
    }
}

//! Stage-based difficulty scaling
//!
//! Monsters are built from fixed templates and multiplied up per stage.
//! Regular monsters and bosses grow along different curves.

/// Base chance for a room to hold a monster on stage 0
const MONSTER_BASE_CHANCE: f64 = 0.3;
/// Extra monster chance per stage
const MONSTER_CHANCE_PER_STAGE: f64 = 0.05;

/// Per-stat multipliers for a given stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageScaling {
    pub stage: u32,
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub xp: f64,
    pub gold: f64,
}

impl StageScaling {
    /// Scaling for regular room and wandering monsters
    pub fn normal(stage: u32) -> Self {
        Self {
            stage,
            hp: stage_factor(stage, 0.2),
            attack: stage_factor(stage, 0.1),
            defense: stage_factor(stage, 0.05),
            xp: stage_factor(stage, 0.1),
            gold: stage_factor(stage, 0.1),
        }
    }

    /// Scaling for the boss guarding a boss stage. HP grows much faster.
    pub fn boss(stage: u32) -> Self {
        Self {
            stage,
            hp: stage_factor(stage, 0.5),
            attack: stage_factor(stage, 0.2),
            defense: stage_factor(stage, 0.1),
            xp: stage_factor(stage, 0.2),
            gold: stage_factor(stage, 0.2),
        }
    }

    pub fn scale_hp(&self, base: i32) -> i32 {
        (base as f64 * self.hp) as i32
    }

    pub fn scale_attack(&self, base: i32) -> i32 {
        (base as f64 * self.attack) as i32
    }

    pub fn scale_defense(&self, base: i32) -> i32 {
        (base as f64 * self.defense) as i32
    }

    pub fn scale_xp(&self, base: u32) -> u32 {
        (base as f64 * self.xp) as u32
    }

    pub fn scale_gold(&self, base: u32) -> u32 {
        (base as f64 * self.gold) as u32
    }
}

/// `1 + per_stage * (stage - 1)`, so stage 1 is always unscaled
fn stage_factor(stage: u32, per_stage: f64) -> f64 {
    1.0 + stage.saturating_sub(1) as f64 * per_stage
}

/// Chance that a non-start room spawns a monster on a normal stage
pub fn monster_spawn_chance(stage: u32) -> f64 {
    (MONSTER_BASE_CHANCE + stage as f64 * MONSTER_CHANCE_PER_STAGE).min(1.0)
}

/// Every `interval`-th stage is a boss stage
pub fn is_boss_stage(stage: u32, interval: u32) -> bool {
    interval != 0 && stage % interval == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_one_is_unscaled() {
        let normal = StageScaling::normal(1);
        let boss = StageScaling::boss(1);
        assert_eq!(normal.scale_hp(30), 30);
        assert_eq!(normal.scale_defense(4), 4);
        assert_eq!(boss.scale_hp(200), 200);
        assert_eq!(boss.scale_gold(50), 50);
    }

    #[test]
    fn test_scaling_truncates() {
        // 5 * 1.1 = 5.5 -> 5
        let scaling = StageScaling::normal(2);
        assert_eq!(scaling.scale_attack(5), 5);
        // 2 * 1.05 = 2.1 -> 2
        assert_eq!(scaling.scale_defense(2), 2);
    }

    #[test]
    fn test_boss_hp_curve() {
        assert_eq!(StageScaling::boss(5).scale_hp(200), 600);
        assert_eq!(StageScaling::boss(3).scale_hp(200), 400);
    }

    #[test]
    fn test_spawn_chance() {
        assert!((monster_spawn_chance(1) - 0.35).abs() < 1e-9);
        assert!((monster_spawn_chance(4) - 0.5).abs() < 1e-9);
        assert_eq!(monster_spawn_chance(100), 1.0);
    }

    #[test]
    fn test_boss_cadence() {
        assert!(!is_boss_stage(1, 5));
        assert!(!is_boss_stage(4, 5));
        assert!(is_boss_stage(5, 5));
        assert!(is_boss_stage(10, 5));
        assert!(!is_boss_stage(3, 0));
    }
}

//! Monster presets and spawning
//!
//! Every monster is one of a few stat templates, multiplied by the
//! scaling for the stage it spawns on.

use std::fmt;

use super::Health;
use crate::progression::StageScaling;

/// Base stats a monster is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp_drop: u32,
    pub gold_drop: u32,
}

pub const SLIME: MonsterTemplate = MonsterTemplate {
    name: "Slime",
    hp: 30,
    attack: 5,
    defense: 2,
    xp_drop: 10,
    gold_drop: 5,
};

pub const SKELETON: MonsterTemplate = MonsterTemplate {
    name: "Skeleton",
    hp: 50,
    attack: 8,
    defense: 4,
    xp_drop: 20,
    gold_drop: 10,
};

pub const DRAGON: MonsterTemplate = MonsterTemplate {
    name: "Dragon",
    hp: 200,
    attack: 20,
    defense: 10,
    xp_drop: 100,
    gold_drop: 50,
};

/// The closed set of monster types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterKind {
    Slime,
    Skeleton,
    /// Boss of boss stages
    Dragon,
}

impl MonsterKind {
    /// Kinds that roam regular stages
    pub const COMMON: [MonsterKind; 2] = [MonsterKind::Slime, MonsterKind::Skeleton];

    pub fn template(&self) -> &'static MonsterTemplate {
        match self {
            MonsterKind::Slime => &SLIME,
            MonsterKind::Skeleton => &SKELETON,
            MonsterKind::Dragon => &DRAGON,
        }
    }

    pub fn name(&self) -> &'static str {
        self.template().name
    }
}

/// A live monster in a room or a battle
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub kind: MonsterKind,
    pub health: Health,
    pub attack: i32,
    pub defense: i32,
    pub xp_drop: u32,
    pub gold_drop: u32,
}

impl Monster {
    /// Build an unscaled monster straight from its template
    pub fn new(kind: MonsterKind) -> Self {
        let t = kind.template();
        Self {
            kind,
            health: Health::new(t.hp),
            attack: t.attack,
            defense: t.defense,
            xp_drop: t.xp_drop,
            gold_drop: t.gold_drop,
        }
    }

    /// Build a monster with every stat scaled, hp starting full
    pub fn spawn_scaled(kind: MonsterKind, scaling: &StageScaling) -> Self {
        let t = kind.template();
        Self {
            kind,
            health: Health::new(scaling.scale_hp(t.hp)),
            attack: scaling.scale_attack(t.attack),
            defense: scaling.scale_defense(t.defense),
            xp_drop: scaling.scale_xp(t.xp_drop),
            gold_drop: scaling.scale_gold(t.gold_drop),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns true if this hit brought the monster to exactly 0 hp
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health.take_damage(amount)
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        let slime = Monster::new(MonsterKind::Slime);
        assert_eq!(slime.health, Health::new(30));
        assert_eq!((slime.attack, slime.defense), (5, 2));
        assert_eq!((slime.xp_drop, slime.gold_drop), (10, 5));

        let dragon = Monster::new(MonsterKind::Dragon);
        assert_eq!(dragon.health.max, 200);
        assert_eq!(dragon.to_string(), "Dragon");
    }

    #[test]
    fn test_stage_one_spawn_matches_template() {
        let scaled = Monster::spawn_scaled(MonsterKind::Skeleton, &StageScaling::normal(1));
        assert_eq!(scaled, Monster::new(MonsterKind::Skeleton));
    }

    #[test]
    fn test_normal_scaling_above_stage_one() {
        let skeleton = Monster::spawn_scaled(MonsterKind::Skeleton, &StageScaling::normal(3));
        assert_eq!(skeleton.health, Health::new(70));
        assert_eq!((skeleton.attack, skeleton.defense), (9, 4));
        assert_eq!((skeleton.xp_drop, skeleton.gold_drop), (24, 12));
    }

    #[test]
    fn test_boss_scaling() {
        let boss = Monster::spawn_scaled(MonsterKind::Dragon, &StageScaling::boss(5));
        assert_eq!(boss.health, Health::new(600));
        assert_eq!(boss.xp_drop, 180);
    }
}

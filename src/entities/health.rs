//! Hit point pool shared by the player and monsters

use std::fmt;

/// Current and maximum hit points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, clamping at zero. Returns true when hp lands on exactly 0.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current = (self.current - amount).max(0);
        self.current == 0
    }

    /// Restore hp, never above max
    pub fn heal(&mut self, amount: i32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    /// Refill to max
    pub fn restore(&mut self) {
        self.current = self.max;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut health = Health::new(5);
        assert!(health.take_damage(6));
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut health = Health::new(20);
        health.take_damage(5);
        health.heal(100);
        assert_eq!(health.current, 20);
    }

    #[test]
    fn test_huge_heal_saturates() {
        let mut health = Health::new(50);
        health.take_damage(10);
        health.heal(i32::MAX);
        assert_eq!(health.current, 50);
    }

    proptest! {
        #[test]
        fn damage_law(max in 1i32..1000, before in 0i32..1000, dmg in 0i32..=i32::MAX) {
            let mut health = Health { current: before.min(max), max };
            let start = health.current;
            let dead = health.take_damage(dmg);
            prop_assert_eq!(health.current, (start - dmg).max(0));
            prop_assert_eq!(dead, health.current == 0);
        }

        #[test]
        fn heal_law(max in 1i32..1000, before in 0i32..1000, amount in 0i32..=i32::MAX) {
            let mut health = Health { current: before.min(max), max };
            let start = health.current;
            health.heal(amount);
            prop_assert_eq!(health.current, (start as i64 + amount as i64).min(max as i64) as i32);
        }
    }
}

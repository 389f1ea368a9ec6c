//! Damage calculation
//!
//! Flat subtraction: attack minus defense, never negative.

/// Damage an attacker deals through a defender's defense
pub fn calculate_damage(attack: i32, defense: i32) -> i32 {
    (attack - defense).max(0)
}

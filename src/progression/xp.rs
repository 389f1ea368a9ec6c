//! Experience and leveling
//!
//! XP thresholds, level-up gains, and rank titles.

/// Max HP gained per level
pub const LEVEL_UP_HP: i32 = 10;
/// Attack gained per level
pub const LEVEL_UP_ATTACK: i32 = 2;
/// Defense gained per level
pub const LEVEL_UP_DEFENSE: i32 = 1;

/// XP the player must hold to level up from `level`
pub fn xp_threshold(level: u32) -> u32 {
    level * 100
}

/// Get a title/rank based on level
pub fn level_title(level: u32) -> &'static str {
    match level {
        0..=2 => "Novice",
        3..=4 => "Apprentice",
        5..=7 => "Journeyman",
        8..=10 => "Adept",
        11..=14 => "Expert",
        15..=18 => "Master",
        19..=24 => "Grandmaster",
        _ => "Legend",
    }
}

//! Single-round battle resolution
//!
//! The player acts first. A kill or a successful flee ends the round before
//! the monster can answer.

use rand::Rng;

use super::calculate_damage;
use crate::entities::{Monster, Player};

/// What the player chose to do this round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    Magic,
    Item,
    Flee,
}

impl BattleAction {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "attack" => Some(BattleAction::Attack),
            "magic" => Some(BattleAction::Magic),
            "item" => Some(BattleAction::Item),
            "flee" => Some(BattleAction::Flee),
            _ => None,
        }
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Monster slain; rewards already credited to the player
    Victory { xp: u32, gold: u32 },
    /// Player escaped; the monster lives on
    Fled,
    /// Both still standing
    Ongoing,
    /// The monster's retaliation killed the player
    PlayerDefeated,
}

/// Outcome plus the narration for the round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub messages: Vec<String>,
}

/// Resolve one round. `None` is an unrecognised action and forfeits the turn.
pub fn resolve_round<R: Rng + ?Sized>(
    player: &mut Player,
    monster: &mut Monster,
    action: Option<BattleAction>,
    flee_chance: f64,
    rng: &mut R,
) -> RoundReport {
    let mut messages = Vec::new();

    match action {
        Some(BattleAction::Attack) => {
            let damage = calculate_damage(player.attack, monster.defense);
            let slain = monster.take_damage(damage);
            messages.push(format!("You attack the {} for {} damage.", monster.name(), damage));

            if slain {
                let (xp, gold) = (monster.xp_drop, monster.gold_drop);
                messages.push(format!("The {} is defeated!", monster.name()));
                if player.add_xp(xp) {
                    messages.push(format!("{} leveled up to Level {}!", player.name, player.level));
                }
                player.add_gold(gold);
                messages.push(format!("You gained {} XP and {} gold.", xp, gold));
                return RoundReport {
                    outcome: RoundOutcome::Victory { xp, gold },
                    messages,
                };
            }
        }
        Some(BattleAction::Magic) => {
            messages.push("You wave your hands, but nothing happens.".to_string());
        }
        Some(BattleAction::Item) => {
            messages.push("You fumble in your bag, but find nothing useful.".to_string());
        }
        Some(BattleAction::Flee) => {
            if rng.gen_bool(flee_chance) {
                messages.push("You successfully fled the battle!".to_string());
                return RoundReport {
                    outcome: RoundOutcome::Fled,
                    messages,
                };
            }
            messages.push("You failed to flee!".to_string());
        }
        None => {
            messages.push("Invalid battle action. You lose your turn.".to_string());
        }
    }

    let damage = calculate_damage(monster.attack, player.defense);
    let slain = player.take_damage(damage);
    messages.push(format!("The {} attacks you for {} damage.", monster.name(), damage));

    let outcome = if slain {
        messages.push("You have been defeated!".to_string());
        RoundOutcome::PlayerDefeated
    } else {
        RoundOutcome::Ongoing
    };
    log::debug!("Round vs {}: {:?}", monster.name(), outcome);

    RoundReport { outcome, messages }
}

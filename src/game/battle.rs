//! Battle turns
//!
//! One player action per turn, resolved by the combat module. The engine
//! only moves the monster and the state around afterwards.

use rand::Rng;

use super::state::{prompt, Encounter, EncounterOrigin, Game, GameState};
use crate::combat::{resolve_round, BattleAction, RoundOutcome};
use crate::error::GameError;
use crate::ui::{text, Console};

impl<R: Rng> Game<R> {
    pub(super) fn battle_turn<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        let Some(monster) = self.current_enemy() else {
            return Ok(());
        };
        let monster_line = format!(
            "{} HP: {} | Attack: {} | Defense: {}",
            monster.name(),
            monster.health,
            monster.attack,
            monster.defense
        );

        console.print(text::BATTLE_BANNER);
        console.print(&format!(
            "{} HP: {} | Attack: {} | Defense: {}",
            self.player.name, self.player.health, self.player.attack, self.player.defense
        ));
        console.print(&monster_line);
        console.print("------------------------------");

        let input = prompt(console, text::BATTLE_PROMPT)?;
        let action = BattleAction::parse(&input);

        let GameState::Battle(encounter) = &mut self.state else {
            return Ok(());
        };
        let report = resolve_round(
            &mut self.player,
            &mut encounter.monster,
            action,
            self.config.flee_chance,
            &mut self.rng,
        );
        for message in &report.messages {
            console.print(message);
        }

        match report.outcome {
            RoundOutcome::Ongoing => {}
            RoundOutcome::Victory { xp, gold } => {
                if let Some(encounter) = self.end_battle(GameState::Exploration) {
                    log::info!(
                        "Defeated {} ({} xp, {} gold)",
                        encounter.monster.name(),
                        xp,
                        gold
                    );
                }
            }
            RoundOutcome::Fled => {
                if let Some(encounter) = self.end_battle(GameState::Exploration) {
                    self.return_to_room(encounter);
                }
            }
            RoundOutcome::PlayerDefeated => {
                let cause = format!("slain by a {}", encounter.monster.name());
                log::info!("Game over on stage {}: {}", self.stage, cause);
                let over = GameState::GameOver {
                    stage_reached: self.stage,
                    cause,
                };
                if let Some(encounter) = self.end_battle(over) {
                    self.return_to_room(encounter);
                }
            }
        }
        Ok(())
    }

    /// Leave Battle for `next`, handing back the encounter
    fn end_battle(&mut self, next: GameState) -> Option<Encounter> {
        log::debug!("State transition: {} -> {}", self.state.name(), next.name());
        match std::mem::replace(&mut self.state, next) {
            GameState::Battle(encounter) => Some(encounter),
            _ => None,
        }
    }

    /// Surviving residents go back to the head of their room's queue
    fn return_to_room(&mut self, encounter: Encounter) {
        if let EncounterOrigin::Resident(coord) = encounter.origin {
            if let Some(room) = self.dungeon.room_mut(coord) {
                room.return_enemy(encounter.monster);
            }
        }
    }
}

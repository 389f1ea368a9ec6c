//! The hub between stages: upgrades, the (closed) shop, and moving on

use rand::Rng;

use super::state::{prompt, Game, GameState};
use crate::error::GameError;
use crate::progression::{is_boss_stage, Upgrade};
use crate::ui::{text, Console};
use crate::world::generate_dungeon;

impl<R: Rng> Game<R> {
    /// Re-prompts until the player continues to the next stage
    pub(super) fn hub_visit<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        console.print(&text::header("WELCOME TO THE HUB"));
        console.print("Here you can rest, upgrade your stats, or buy items.");

        loop {
            let choice = prompt(console, text::HUB_PROMPT)?;
            match choice.as_str() {
                "upgrade" => self.upgrade_menu(console)?,
                "shop" => console.print("The shopkeeper is currently away. Come back later!"),
                "continue" => {
                    self.advance_stage(console);
                    return Ok(());
                }
                _ => console.print("Invalid choice."),
            }
        }
    }

    /// One purchase attempt (or "back"), then return to the hub menu
    fn upgrade_menu<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        console.print("\n--- UPGRADE STATS ---");
        console.print(&format!("Current Gold: {}", self.player.gold));
        console.print(&format!("Current XP: {}", self.player.xp));
        for (i, upgrade) in Upgrade::ALL.iter().enumerate() {
            console.print(&format!("{}. {}", i + 1, upgrade.label()));
        }
        console.print(&format!("{}. Back", Upgrade::ALL.len() + 1));

        loop {
            let choice = prompt(console, text::UPGRADE_PROMPT)?;
            if choice == "3" || choice == "back" {
                return Ok(());
            }
            match Upgrade::from_choice(&choice) {
                Some(upgrade) => {
                    match upgrade.purchase(&mut self.player) {
                        Ok(message) => console.print(&message),
                        Err(e) => console.print(&e.to_string()),
                    }
                    return Ok(());
                }
                None => console.print("Invalid choice."),
            }
        }
    }

    /// Next stage: fresh dungeon, back at its start room
    pub(super) fn advance_stage<C: Console + ?Sized>(&mut self, console: &mut C) {
        self.stage += 1;
        let boss = is_boss_stage(self.stage, self.config.boss_interval);
        console.print(&format!("\n--- Entering Stage {}! ---\n", self.stage));

        self.dungeon = generate_dungeon(&mut self.rng, self.config.dungeon_size, self.stage, boss);
        self.current = self.dungeon.start_coords();
        if boss {
            console.print("A terrible roar echoes through the halls. Something guards the exit.");
        }
        self.set_state(GameState::Exploration);
    }
}

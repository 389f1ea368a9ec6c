//! Rooms: narration, exits, resident monsters, and loose items

use std::collections::BTreeMap;

use super::{Coord, Direction};
use crate::entities::Monster;

/// A single room of the dungeon grid.
///
/// Exits are coordinate keys into the owning `Dungeon`, never references.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Room {
    pub description: String,
    pub exits: BTreeMap<Direction, Coord>,
    /// Resident monsters; battles always target the first
    pub enemies: Vec<Monster>,
    pub items: Vec<String>,
    /// Set once the player has been narrated into the room
    pub visited: bool,
}

impl Room {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn add_exit(&mut self, dir: Direction, target: Coord) {
        self.exits.insert(dir, target);
    }

    pub fn exit(&self, dir: Direction) -> Option<Coord> {
        self.exits.get(&dir).copied()
    }

    pub fn add_enemy(&mut self, monster: Monster) {
        self.enemies.push(monster);
    }

    pub fn has_enemies(&self) -> bool {
        !self.enemies.is_empty()
    }

    /// Take the monster at `index` out of the room
    pub fn remove_enemy(&mut self, index: usize) -> Option<Monster> {
        (index < self.enemies.len()).then(|| self.enemies.remove(index))
    }

    /// Put a monster back at the head of the queue
    pub fn return_enemy(&mut self, monster: Monster) {
        self.enemies.insert(0, monster);
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove the first item matching `name` case-insensitively, returning
    /// the stored spelling
    pub fn take_item(&mut self, name: &str) -> Option<String> {
        let index = self
            .items
            .iter()
            .position(|item| item.eq_ignore_ascii_case(name))?;
        Some(self.items.remove(index))
    }

    pub fn remove_item(&mut self, name: &str) -> bool {
        self.take_item(name).is_some()
    }

    /// Full narration: description, doors, items, monsters
    pub fn describe(&self) -> String {
        let doors = self
            .exits
            .keys()
            .map(|dir| format!("There is a door to the {}.", dir.label()))
            .collect::<Vec<_>>()
            .join(" ");

        let mut lines = vec![self.description.clone(), doors];
        if !self.items.is_empty() {
            lines.push(format!("You see: {}.", self.items.join(", ")));
        }
        if !self.enemies.is_empty() {
            let names: Vec<&str> = self.enemies.iter().map(|m| m.name()).collect();
            lines.push(format!("You encounter: {}.", names.join(", ")));
        }
        lines.retain(|line| !line.is_empty());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::MonsterKind;

    #[test]
    fn test_take_item_case_insensitive() {
        let mut room = Room::new("A room.");
        room.add_item("Health Potion");
        assert_eq!(room.take_item("health potion"), Some("Health Potion".to_string()));
        assert!(!room.remove_item("health potion"));
    }

    #[test]
    fn test_remove_item_first_match_only() {
        let mut room = Room::new("A room.");
        room.add_item("Small Shield");
        room.add_item("Small Shield");
        assert!(room.remove_item("SMALL SHIELD"));
        assert_eq!(room.items.len(), 1);
    }

    #[test]
    fn test_enemy_queue() {
        let mut room = Room::new("A room.");
        room.add_enemy(Monster::new(MonsterKind::Slime));
        room.add_enemy(Monster::new(MonsterKind::Skeleton));
        let first = room.remove_enemy(0).unwrap();
        assert_eq!(first.kind, MonsterKind::Slime);
        room.return_enemy(first);
        assert_eq!(room.enemies[0].kind, MonsterKind::Slime);
        assert!(room.remove_enemy(5).is_none());
    }

    #[test]
    fn test_describe() {
        let mut room = Room::new("You are in a dimly lit room at (0,0).");
        room.add_exit(Direction::East, Coord::new(1, 0));
        room.add_exit(Direction::North, Coord::new(0, 1));
        room.add_item("Rusty Sword");
        room.add_enemy(Monster::new(MonsterKind::Slime));

        let text = room.describe();
        assert_eq!(
            text,
            "You are in a dimly lit room at (0,0).\n\
             There is a door to the North. There is a door to the East.\n\
             You see: Rusty Sword.\n\
             You encounter: Slime."
        );
    }
}

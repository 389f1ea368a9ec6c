//! Permanent stat upgrades bought at the hub with gold and XP

use thiserror::Error;

use crate::entities::Player;

/// Purchasable upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upgrade {
    /// +5 attack
    Attack,
    /// +20 max HP, and the same amount of current HP
    MaxHp,
}

/// Gold and XP price of an upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeCost {
    pub gold: u32,
    pub xp: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("Not enough gold or XP. (needs {gold} gold and {xp} XP)")]
    InsufficientFunds { gold: u32, xp: u32 },
}

impl Upgrade {
    pub const ALL: [Upgrade; 2] = [Upgrade::Attack, Upgrade::MaxHp];

    const ATTACK_BONUS: i32 = 5;
    const MAX_HP_BONUS: i32 = 20;

    /// Map an upgrade menu choice ("1", "2") to an upgrade
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Upgrade::Attack),
            "2" => Some(Upgrade::MaxHp),
            _ => None,
        }
    }

    pub fn cost(&self) -> UpgradeCost {
        match self {
            Upgrade::Attack => UpgradeCost { gold: 20, xp: 50 },
            Upgrade::MaxHp => UpgradeCost { gold: 15, xp: 40 },
        }
    }

    /// Menu line, e.g. "Upgrade Attack (+5 Attack, Cost: 20 Gold, 50 XP)"
    pub fn label(&self) -> String {
        let cost = self.cost();
        match self {
            Upgrade::Attack => format!(
                "Upgrade Attack (+{} Attack, Cost: {} Gold, {} XP)",
                Self::ATTACK_BONUS, cost.gold, cost.xp
            ),
            Upgrade::MaxHp => format!(
                "Upgrade Max HP (+{} Max HP, Cost: {} Gold, {} XP)",
                Self::MAX_HP_BONUS, cost.gold, cost.xp
            ),
        }
    }

    pub fn affordable(&self, player: &Player) -> bool {
        let cost = self.cost();
        player.gold >= cost.gold && player.xp >= cost.xp
    }

    /// Pay for and apply the upgrade. Leaves the player untouched on failure.
    pub fn purchase(&self, player: &mut Player) -> Result<String, UpgradeError> {
        let cost = self.cost();
        if !self.affordable(player) {
            return Err(UpgradeError::InsufficientFunds { gold: cost.gold, xp: cost.xp });
        }

        player.gold -= cost.gold;
        player.xp -= cost.xp;

        let message = match self {
            Upgrade::Attack => {
                player.attack += Self::ATTACK_BONUS;
                format!("Attack upgraded! New Attack: {}", player.attack)
            }
            Upgrade::MaxHp => {
                player.health.max += Self::MAX_HP_BONUS;
                player.health.current += Self::MAX_HP_BONUS;
                format!(
                    "Max HP upgraded! New Max HP: {}, Current HP: {}",
                    player.health.max, player.health.current
                )
            }
        };
        log::info!("Purchased {:?} upgrade", self);
        Ok(message)
    }
}

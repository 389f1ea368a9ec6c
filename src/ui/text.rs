//! Fixed narration: banners, menus, and help

pub const WELCOME: &str = "Welcome to Portalcrawl!\nType 'help' at any time to list commands.";

pub const RULE: &str = "==============================";

pub const BATTLE_BANNER: &str = r"
██████╗  █████╗ ████████╗████████╗██╗     ███████╗
██╔══██╗██╔══██╗╚══██╔══╝╚══██╔══╝██║     ██╔════╝
██████╔╝███████║   ██║      ██║   ██║     █████╗
██╔══██╗██╔══██║   ██║      ██║   ██║     ██╔══╝
██████╔╝██║  ██║   ██║      ██║   ███████╗███████╗
╚═════╝ ╚═╝  ╚═╝   ╚═╝      ╚═╝   ╚══════╝╚══════╝";

pub const GAME_OVER_BANNER: &str = r"
  _   _   _   _     _   _   _   _   _
 / \ / \ / \ / \   / \ / \ / \ / \ / \
( G | A | M | E ) ( O | V | E | R | ! )
 \_/ \_/ \_/ \_/   \_/ \_/ \_/ \_/ \_/";

pub const HELP: &str = "\
--- Available Commands ---
  move <direction> (e.g., 'move north', 'move east')
  move portal (to advance to the next stage if cleared)
  status (display player stats)
  inventory (display player inventory)
  take <item name> (pick up an item from the room)
  attack (initiate battle with an enemy in the room)
  help (display this list)
--------------------------";

pub const EXPLORE_PROMPT: &str = "What do you want to do? ";
pub const BATTLE_PROMPT: &str = "Choose an action: [Attack, Magic, Item, Flee] ";
pub const HUB_PROMPT: &str = "What would you like to do? [Upgrade, Shop, Continue] ";
pub const UPGRADE_PROMPT: &str = "Choose an upgrade: ";

/// A title framed by rules
pub fn header(title: &str) -> String {
    format!("\n{}\n{}\n{}", RULE, title, RULE)
}

use crate::{
    Card, Deck, DiscardPile, Player, RngState, Room, RuleViolation, Severity, WeaponSlot,
};
use serde::{Deserialize, Serialize};

mod commands;
mod invariants;
mod snapshot;

pub use snapshot::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver { victory: bool },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Command {
    DrawRoom,
    UseCard { slot: usize },
    RunFromRoom,
    DiscardWeapon,
    Restart,
}

impl Command {
    pub fn label(&self) -> String {
        match self {
            Self::DrawRoom => "draw_room".to_string(),
            Self::UseCard { slot } => format!("use_card {slot}"),
            Self::RunFromRoom => "run".to_string(),
            Self::DiscardWeapon => "discard_weapon".to_string(),
            Self::Restart => "restart".to_string(),
        }
    }
}

/// What a command did, phrased for the player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub severity: Severity,
    pub game_over: bool,
    pub victory: bool,
    #[serde(default)]
    pub violation: Option<RuleViolation>,
}

/// One dungeon session. Every mutation of deck, room, weapon, discard pile
/// and player goes through the command methods.
#[derive(Debug, Clone)]
pub struct GameEngine {
    rng: RngState,
    deck: Deck,
    room: Room,
    player: Player,
    discard: DiscardPile,
    just_ran: bool,
    status: GameStatus,
    total_cards: usize,
}

impl GameEngine {
    /// Shuffles a fresh dungeon deck and deals the first room.
    pub fn new(mut rng: RngState) -> Self {
        let mut deck = Deck::scoundrel();
        deck.shuffle(&mut rng);
        Self::with_deck(deck, rng)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(RngState::from_seed(seed))
    }

    /// Deals the first room straight off `deck` without shuffling it.
    pub fn with_deck(deck: Deck, rng: RngState) -> Self {
        let mut engine = Self {
            rng,
            deck,
            room: Room::new(),
            player: Player::new(),
            discard: DiscardPile::default(),
            just_ran: false,
            status: GameStatus::Playing,
            total_cards: 0,
        };
        engine.room.refill(&mut engine.deck);
        engine.total_cards = engine.held_cards();
        engine
    }

    /// Replaces the player, e.g. to start wounded or already armed. Cards on
    /// the player's weapon slot join the session's card total.
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self.total_cards = self.held_cards();
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn weapon_slot(&self) -> &WeaponSlot {
        &self.player.weapon_slot
    }

    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    pub fn just_ran(&self) -> bool {
        self.just_ran
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    pub fn victory(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { victory: true })
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn can_run(&self) -> bool {
        !self.is_game_over() && !self.just_ran && !self.room.is_empty()
    }

    pub fn can_discard_weapon(&self) -> bool {
        !self.is_game_over() && self.player.weapon_slot.weapon().is_some()
    }

    /// Every card the session currently holds, wherever it sits.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.deck
            .iter()
            .chain(self.room.cards().map(|(_, card)| card))
            .chain(self.player.weapon_slot.iter())
            .chain(self.discard.iter())
    }

    fn held_cards(&self) -> usize {
        self.all_cards().count()
    }
}

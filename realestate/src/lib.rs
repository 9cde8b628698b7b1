mod board;
mod error;
mod money;
mod player;
mod space;

use std::fmt::{Display, Formatter};
use ahash::HashMap;
use itertools::Itertools;
use tracing::{debug, info, warn};

pub use board::Board;
pub use error::GameError;
pub use money::purchase_price;
pub use player::Player;
pub use space::Space;

pub type Money = i64;

/// A monopoly style game: a circular board of spaces, the players walking it,
/// and the rules for buying spaces and paying rent.
///
/// Nothing here rolls dice or enforces turn order. Callers decide who moves and
/// how far.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    players: HashMap<String, Player>,
}

pub struct Options {
    pub land_bonus: Money,
    pub rents: Vec<u32>,
    pub starting_balance: Money,
    pub num_players: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            land_bonus: 50,
            rents: vec![
                50, 50, 50, 75, 75, 75, 100, 100, 100, 150, 150, 150,
                200, 200, 200, 250, 250, 250, 300, 300, 300, 350, 350, 350,
            ],
            starting_balance: 1000,
            num_players: 3,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Exactly one player still has money.
    Winner(String),
    /// Two or more players still have money.
    Pending,
    /// Everyone is broke.
    NoSurvivors,
}

impl Outcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Winner(name) => Some(name),
            Outcome::Pending | Outcome::NoSurvivors => None,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the board and registers players named "Player 1" through "Player N".
    pub fn with_options(options: &Options) -> Self {
        let mut game = Self::new();
        game.create_spaces(options.land_bonus, &options.rents);

        for n in 1..=options.num_players {
            game.create_player(format!("Player {n}"), options.starting_balance);
        }

        game
    }

    /// Appends go plus one space per rent. A second call extends the board, it
    /// does not replace it.
    pub fn create_spaces(&mut self, land_bonus: Money, rents: &[u32]) {
        self.board.extend(land_bonus, rents);
        debug!(spaces = self.board.len(), land_bonus, "created spaces");
    }

    /// Registers a player on go. An existing player with the same name is replaced.
    pub fn create_player(&mut self, name: impl Into<String>, balance: Money) {
        let name = name.into();
        let player = Player::new(name.clone(), balance);

        if self.players.insert(name.clone(), player).is_some() {
            warn!(player = %name, "player re-registered, previous state discarded");
        }
    }

    pub fn player_balance(&self, name: &str) -> Option<Money> {
        self.players.get(name).map(Player::balance)
    }

    pub fn player_position(&self, name: &str) -> Option<usize> {
        self.players.get(name).map(Player::position)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Buys the space `name` is standing on.
    ///
    /// Returns `Ok(false)` without changing anything when the player is on go, is
    /// broke, cannot afford the price, or the space already has an owner.
    pub fn buy_space(&mut self, name: &str) -> Result<bool, GameError> {
        let player = self.players
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;

        let position = player.position();
        if position == 0 || player.is_eliminated() {
            return Ok(false);
        }

        let Some(space) = self.board.get_mut(position) else {
            return Ok(false);
        };

        let price = space.purchase_price();
        if space.is_owned() || player.balance() < price {
            return Ok(false);
        }

        player.withdraw(price);
        space.set_owner(Some(name.to_string()));

        info!(player = name, position, price, "bought space");

        Ok(true)
    }

    /// Moves `name` forward and settles rent on the space they land on.
    ///
    /// Running off the end of the board subtracts the board length once and pays
    /// the land bonus once, however far past the end the move goes. A player with
    /// no money cannot move and `Ok(false)` is returned, as is a distance too large
    /// to add to the current position. Neither case changes any state.
    pub fn move_player(&mut self, name: &str, spaces_to_move: usize) -> Result<bool, GameError> {
        let board_len = self.board.len();
        let land_bonus = self.board.land_bonus();

        let player = self.player_mut_or_err(name)?;
        if player.is_eliminated() {
            debug!(player = name, "eliminated player cannot move");
            return Ok(false);
        }

        let Some(mut new_position) = player.position().checked_add(spaces_to_move) else {
            debug!(player = name, spaces_to_move, "move distance overflows position");
            return Ok(false);
        };
        if new_position >= board_len {
            new_position -= board_len;
            player.deposit(land_bonus);
            info!(player = name, amount = land_bonus, "passed go");
        }

        player.set_position(new_position);
        debug!(player = name, position = new_position, "moved");

        self.pay_rent(name)?;

        Ok(true)
    }

    pub fn check_game_over(&self) -> Outcome {
        match self.players.values().filter(|player| !player.is_eliminated()).at_most_one() {
            Ok(Some(player)) => Outcome::Winner(player.name().to_string()),
            Ok(None) => Outcome::NoSurvivors,
            Err(_) => Outcome::Pending,
        }
    }

    fn player_or_err(&self, name: &str) -> Result<&Player, GameError> {
        self.players
            .get(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    fn player_mut_or_err(&mut self, name: &str) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }
}

#[allow(unused_must_use)]
impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("  Real Estate: {} Spaces | Land Bonus ${}", self.board.len(), self.board.land_bonus()));
        writeln!(f);

        for player in self.players.values().sorted_by(|a, b| a.name().cmp(b.name())) {
            if player.is_eliminated() {
                write!(f, "x");
            } else {
                write!(f, " ");
            }
            f.write_fmt(format_args!(" {: <12} @{: <4} ${: <8}", player.name(), player.position(), player.balance()));
            f.write_fmt(format_args!("{}", self.board.spaces_owned_by(player.name()).join(",")));
            writeln!(f);
        }

        f.write_fmt(format_args!("{}", self.board));

        Ok(())
    }
}

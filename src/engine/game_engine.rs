//! Turn flow of a game: setup, word placement, passing, hand swapping and the end
//! of the game.

use crate::config::{EngineConfig, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::dictionary::{Dictionary, WordValidator};
use crate::engine::events::{GameEvent, GameListener};
use crate::engine::outcome::{MoveRejection, TurnOutcome};
use crate::engine::snapshot::GameSnapshot;
use crate::engine::word_extraction::{word_at, word_positions};
use crate::game::bag::TileBag;
use crate::game::board::{Board, BOARD_SIZE, CENTER};
use crate::game::game_state::GameState;
use crate::game::language::Language;
use crate::game::player::Player;
use crate::game::tile::Tile;
use crate::scoring::score_word;
use crate::{Result, ScrabbleError};
use std::fmt;

type Placement = ((usize, usize), Tile);

/// Owns everything that changes during a game and applies the rules to it.
///
/// Callers read the committed state through the accessors and submit moves as a
/// full candidate board built from [`GameEngine::candidate_board`]. Words are
/// checked against any [`Dictionary`], a loaded [`WordValidator`] by default.
pub struct GameEngine<D = WordValidator> {
    language: Language,
    board: Board,
    bag: TileBag,
    validator: D,
    players: Vec<Player>,
    current_player: usize,
    skipped_turns: usize,
    state: GameState,
    center_used: bool,
    invalid_move: bool,
    hand_size: usize,
    listeners: Vec<Box<dyn GameListener>>,
}

impl GameEngine<WordValidator> {
    /// Sets up a game in `language` for 2 to 4 players, loading the configured word list.
    pub fn setup<S: AsRef<str>>(
        config: &EngineConfig,
        language: Language,
        player_names: &[S],
    ) -> Result<Self> {
        let players = create_players(player_names)?;
        if !(1..=HAND_SIZE).contains(&config.hand_size) {
            return Err(ScrabbleError::InvalidHandSize(config.hand_size));
        }
        let path = config
            .word_list(language)
            .ok_or(ScrabbleError::MissingWordList(language))?;
        let validator = WordValidator::from_file(path, language)?;
        log::info!("The word list for \"{}\" was set successfully", language);
        Ok(Self::build(validator, TileBag::new(language), players, config.hand_size))
    }
}

impl<D: Dictionary> GameEngine<D> {
    /// Sets up a game from an already loaded dictionary and bag.
    pub fn new<S: AsRef<str>>(
        validator: D,
        bag: TileBag,
        player_names: &[S],
    ) -> Result<Self> {
        let players = create_players(player_names)?;
        Ok(Self::build(validator, bag, players, HAND_SIZE))
    }

    fn build(validator: D, bag: TileBag, players: Vec<Player>, hand_size: usize) -> Self {
        let mut engine = GameEngine {
            language: validator.language(),
            board: Board::new(),
            bag,
            validator,
            players,
            current_player: 0,
            skipped_turns: 0,
            state: GameState::Running,
            center_used: false,
            invalid_move: false,
            hand_size,
            listeners: Vec::new(),
        };
        engine.distribute_initial_tiles();
        log::info!(
            "Game is set up: {} players, language {}, {} tiles left in the bag",
            engine.players.len(),
            engine.language,
            engine.bag.remaining_count()
        );
        engine
    }

    fn distribute_initial_tiles(&mut self) {
        for player in &mut self.players {
            if let Ok(tiles) = self.bag.draw(self.hand_size) {
                tiles.into_iter().for_each(|tile| player.add_tile(tile));
            }
        }
        log::info!("Initial tiles are distributed");
    }

    pub fn subscribe(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn language(&self) -> Language {
        self.language
    }

    /// The committed board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A copy of the committed board to place tentative tiles on.
    pub fn candidate_board(&self) -> Board {
        self.board.clone()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn skipped_turns(&self) -> usize {
        self.skipped_turns
    }

    /// Whether a committed word already covers the center field.
    pub fn center_used(&self) -> bool {
        self.center_used
    }

    /// Set while the last submitted move was rejected.
    pub fn invalid_move(&self) -> bool {
        self.invalid_move
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    pub fn remaining_tiles(&self) -> usize {
        self.bag.remaining_count()
    }

    pub fn validator(&self) -> &D {
        &self.validator
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// The player with the strictly highest score, `None` when the lead is shared.
    pub fn winner(&self) -> Option<&Player> {
        let best = self.players.iter().map(Player::score).max()?;
        let mut leaders = self.players.iter().filter(|p| p.score() == best);
        let leader = leaders.next();
        if leaders.next().is_some() {
            None
        } else {
            leader
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            language: self.language,
            board: self.board.clone(),
            players: self.players.clone(),
            current_player: self.current_player,
            state: self.state,
            skipped_turns: self.skipped_turns,
            remaining_tiles: self.bag.remaining_count(),
            invalid_move: self.invalid_move,
        }
    }

    // ========================================================================
    // Moves
    // ========================================================================

    /// Ends the current player's turn with `candidate` as the proposed board.
    ///
    /// A candidate without new tiles is a pass. Otherwise the new tiles have to form a
    /// single listed word together with the tiles they touch; the word is scored,
    /// committed and the hand refilled. Rejected moves change nothing but the
    /// invalid-move flag, and the same player keeps the turn.
    ///
    /// Only the tiles of `candidate` are read. Multipliers always come from the
    /// committed board.
    pub fn finish_turn(&mut self, candidate: &Board) -> Result<TurnOutcome> {
        self.ensure_running()?;

        let placed = match new_placements(&self.board, candidate) {
            Ok(placed) => placed,
            Err(rejection) => return Ok(self.reject(rejection)),
        };
        for ((row, col), tile) in &placed {
            log::info!("Found new {} on: row={}, col={}", tile, row, col);
        }

        if placed.is_empty() {
            return Ok(self.pass());
        }

        let mut proposed = self.board.clone();
        for &((row, col), tile) in &placed {
            proposed.place_tile(tile, row, col)?;
        }

        match self.check_move(&proposed, &placed) {
            Ok((word, positions, remaining_hand)) => {
                let points = score_word(&proposed, &positions)?;
                self.commit(proposed, remaining_hand, points)?;
                log::info!("Turn finished successfully with word \"{}\" for {} points", word, points);
                self.advance_turn();
                Ok(TurnOutcome::Scored { word, points })
            }
            Err(rejection) => Ok(self.reject(rejection)),
        }
    }

    /// Validates a non-empty placement without touching any state. `proposed` is the
    /// committed board with the placement on it.
    fn check_move(
        &self,
        proposed: &Board,
        placed: &[Placement],
    ) -> std::result::Result<(String, Vec<(usize, usize)>, Vec<Tile>), MoveRejection> {
        if !self.center_used && !placed.iter().any(|(pos, _)| *pos == CENTER) {
            return Err(MoveRejection::CenterNotCovered);
        }

        let mut remaining_hand = self.current_player().hand().to_vec();
        for (_, tile) in placed {
            match remaining_hand.iter().position(|t| t == tile) {
                Some(index) => {
                    remaining_hand.remove(index);
                }
                None => return Err(MoveRejection::TileNotInHand(*tile)),
            }
        }

        let ((row, col), _) = placed[0];
        let positions = word_positions(proposed, row, col).ok_or(MoveRejection::NoWordFormed)?;
        if placed.iter().any(|(pos, _)| !positions.contains(pos)) {
            return Err(MoveRejection::ScatteredTiles);
        }
        if self.center_used
            && !placed
                .iter()
                .any(|&((row, col), _)| has_occupied_neighbour(&self.board, row, col))
        {
            return Err(MoveRejection::NotConnected);
        }

        let word = word_at(proposed, &positions);
        log::info!("Found new word: \"{}\"", word);
        if !self.validator.contains_word(&word) {
            return Err(MoveRejection::InvalidWord(word));
        }
        Ok((word, positions, remaining_hand))
    }

    fn commit(&mut self, proposed: Board, remaining_hand: Vec<Tile>, points: u32) -> Result<()> {
        self.board = proposed;
        self.center_used = self.board.is_occupied(CENTER.0, CENTER.1);

        let refill = self.hand_size.saturating_sub(remaining_hand.len());
        let drawn = if refill > 0 {
            self.bag.draw(refill)?
        } else {
            Vec::new()
        };

        let player = &mut self.players[self.current_player];
        player.set_hand(remaining_hand);
        drawn.into_iter().for_each(|tile| player.add_tile(tile));
        player.add_points(points);
        let score = player.score();

        self.skipped_turns = 0;
        self.clear_invalid_move();
        self.emit(GameEvent::ScoreChanged {
            player: self.current_player,
            score,
        });
        Ok(())
    }

    fn pass(&mut self) -> TurnOutcome {
        self.skipped_turns += 1;
        log::info!("Turn was skipped, {} skipped turn(s) in a row", self.skipped_turns);
        self.clear_invalid_move();
        if self.skipped_turns >= 2 * self.players.len() {
            log::info!("Game is over by skipping turns");
            self.set_state(GameState::Over);
        }
        self.advance_turn();
        TurnOutcome::Passed
    }

    fn reject(&mut self, rejection: MoveRejection) -> TurnOutcome {
        log::warn!(
            "Turn of {} could not be finished: {}",
            self.current_player().name(),
            rejection
        );
        if !self.invalid_move {
            self.invalid_move = true;
            self.emit(GameEvent::InvalidMoveFlagged(true));
        }
        TurnOutcome::Rejected(rejection)
    }

    /// Puts the current player's whole hand back into the bag and draws a new one.
    pub fn swap_hand(&mut self) -> Result<()> {
        self.ensure_running()?;

        let player = &mut self.players[self.current_player];
        let returned = player.clear_hand();
        let count = returned.len();
        returned.into_iter().for_each(|tile| self.bag.return_tile(tile));
        for tile in self.bag.draw(self.hand_size)? {
            player.add_tile(tile);
        }
        log::info!("Player {} swapped {} tile(s)", player.name(), count);

        self.skipped_turns = 0;
        self.clear_invalid_move();
        self.advance_turn();
        Ok(())
    }

    /// Ends the game from the outside, e.g. when the window is closed.
    pub fn abort(&mut self) -> Result<()> {
        self.ensure_running()?;
        log::info!("Game was aborted");
        self.set_state(GameState::Aborted);
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn ensure_running(&self) -> Result<()> {
        if self.state.is_terminal() {
            log::warn!("Rejected a move on a finished game ({})", self.state);
            return Err(ScrabbleError::GameFinished(self.state));
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        log::info!(
            "Switched to next player: {}, number of skipped turns: {}",
            self.current_player().name(),
            self.skipped_turns
        );
        self.emit(GameEvent::TurnAdvanced {
            current_player: self.current_player,
        });
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
        self.emit(GameEvent::GameStateChanged(state));
    }

    fn clear_invalid_move(&mut self) {
        if self.invalid_move {
            self.invalid_move = false;
            self.emit(GameEvent::InvalidMoveFlagged(false));
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}

impl<D> fmt::Debug for GameEngine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("language", &self.language)
            .field("players", &self.players)
            .field("current_player", &self.current_player)
            .field("state", &self.state)
            .field("skipped_turns", &self.skipped_turns)
            .field("bag", &self.bag)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn create_players<S: AsRef<str>>(player_names: &[S]) -> Result<Vec<Player>> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_names.len()) {
        return Err(ScrabbleError::InvalidPlayerCount(player_names.len()));
    }
    player_names
        .iter()
        .map(|name| Player::new(name.as_ref()))
        .collect()
}

/// Whether a field next to (`row`, `col`) already holds a tile.
fn has_occupied_neighbour(board: &Board, row: usize, col: usize) -> bool {
    let neighbours = [
        row.checked_sub(1).map(|r| (r, col)),
        (row + 1 < BOARD_SIZE).then_some((row + 1, col)),
        col.checked_sub(1).map(|c| (row, c)),
        (col + 1 < BOARD_SIZE).then_some((row, col + 1)),
    ];
    neighbours
        .into_iter()
        .flatten()
        .any(|(r, c)| board.is_occupied(r, c))
}

/// Tiles present on `candidate` but not on `committed`, in row-major order.
///
/// Fails if the candidate drops or replaces a committed tile.
fn new_placements(
    committed: &Board,
    candidate: &Board,
) -> std::result::Result<Vec<Placement>, MoveRejection> {
    let mut placed = Vec::new();
    for ((row, col), field) in committed.fields() {
        let proposed = candidate.occupant(row, col);
        match (field.occupant(), proposed) {
            (Some(existing), Some(tile)) if existing == tile => {}
            (Some(_), _) => return Err(MoveRejection::CommittedFieldChanged { row, col }),
            (None, Some(tile)) => placed.push(((row, col), tile)),
            (None, None) => {}
        }
    }
    Ok(placed)
}

//! Application state and input handling.
//!
//! The app owns the engine for the whole session and turns decoded keys
//! into engine calls. It holds no game rules: legality, outcomes and scores
//! all come back from the engine.

use crossterm::event::{KeyEvent, KeyEventKind};
use derive_getters::Getters;
use noughts_engine::{EngineError, GameEngine, Player, Position, RoundOutcome};
use tracing::{debug, info, instrument, warn};

use crate::config::Settings;
use crate::input::{self, EntryKey, Intent};

/// Marker played by the person at the keyboard.
pub const HUMAN: Player = Player::PlayerOne;

/// Marker played by the computer.
pub const COMPUTER: Player = Player::PlayerTwo;

/// Longest text accepted by the move prompt.
const MAX_ENTRY_LEN: usize = 3;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title card shown at start.
    Splash,
    /// The board, scores and prompts.
    Playing,
    /// "Really quit?" prompt over the board.
    ConfirmQuit,
}

/// Where the current round stands, from the UI's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for "1" (you) or "2" (computer).
    ChoosingFirstPlayer,
    /// The human is on turn.
    HumanTurn,
    /// The computer is on turn.
    ComputerTurn,
    /// The round has a result waiting to be acknowledged.
    RoundOver(RoundOutcome),
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    settings: Settings,
    screen: Screen,
    number_view: bool,
    /// Text typed into the move prompt, when it is open.
    entry: Option<String>,
    cursor: Position,
    errors: Vec<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh engine, showing the splash screen.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        let number_view = *settings.number_view();
        Self {
            engine: GameEngine::new(),
            settings,
            screen: Screen::Splash,
            number_view,
            entry: None,
            cursor: Position::Center,
            errors: Vec::new(),
            should_quit: false,
        }
    }

    /// Current phase of the round.
    pub fn phase(&self) -> Phase {
        let outcome = self.engine.outcome();
        if outcome.is_over() {
            return Phase::RoundOver(outcome);
        }
        match self.engine.current_player() {
            None => Phase::ChoosingFirstPlayer,
            Some(HUMAN) => Phase::HumanTurn,
            Some(_) => Phase::ComputerTurn,
        }
    }

    /// True when the event loop should let the computer play.
    pub fn computer_to_move(&self) -> bool {
        self.screen == Screen::Playing && self.phase() == Phase::ComputerTurn
    }

    /// Handles one key press.
    #[instrument(skip(self, key), fields(code = ?key.code, screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match self.screen {
            Screen::Splash => {
                if input::decode(key) == Intent::ForceQuit {
                    self.should_quit = true;
                } else {
                    debug!("Leaving splash screen");
                    self.screen = Screen::Playing;
                }
            }
            Screen::ConfirmQuit => match input::decode(key) {
                Intent::Yes | Intent::ForceQuit => {
                    info!("User quit");
                    self.should_quit = true;
                }
                _ => self.screen = Screen::Playing,
            },
            Screen::Playing => self.handle_playing_key(key),
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        if self.entry.is_some() {
            self.handle_entry_key(key);
            return;
        }

        self.errors.clear();
        let intent = input::decode(key);
        match intent {
            Intent::ForceQuit => self.should_quit = true,
            Intent::Quit => self.screen = Screen::ConfirmQuit,
            Intent::ToggleNumberView => self.number_view = !self.number_view,
            _ => self.handle_phase_intent(intent),
        }
    }

    fn handle_phase_intent(&mut self, intent: Intent) {
        match (self.phase(), intent) {
            (Phase::ChoosingFirstPlayer, Intent::Digit(1)) => self.choose_first(HUMAN),
            (Phase::ChoosingFirstPlayer, Intent::Digit(2)) => self.choose_first(COMPUTER),

            (Phase::HumanTurn, Intent::BeginEntry) => self.entry = Some(String::new()),
            (Phase::HumanTurn, Intent::Digit(d)) => {
                let raw = d.to_string();
                self.play_human(usize::from(d), &raw);
            }
            (Phase::HumanTurn, Intent::MoveCursor(code)) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            (Phase::HumanTurn, Intent::Confirm) => {
                let cell = self.cursor.number();
                self.play_human(cell, &cell.to_string());
            }

            (Phase::RoundOver(_), Intent::NewRound | Intent::Confirm) => self.start_new_round(),

            (phase, intent) => debug!(?phase, ?intent, "Key ignored"),
        }
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.entry.as_mut() else {
            return;
        };

        match input::decode_entry(key) {
            EntryKey::Char(c) => {
                if buffer.chars().count() < MAX_ENTRY_LEN {
                    buffer.push(c);
                }
            }
            EntryKey::Backspace => {
                buffer.pop();
            }
            EntryKey::Cancel => self.entry = None,
            EntryKey::Submit => {
                let text = self.entry.take().unwrap_or_default();
                self.submit_entry(&text);
            }
            EntryKey::Ignore => {}
        }
    }

    /// Plays whatever was typed into the move prompt.
    #[instrument(skip(self))]
    fn submit_entry(&mut self, text: &str) {
        self.errors.clear();
        self.number_view = false;
        match text.trim().parse::<usize>() {
            Ok(cell) => self.play_human(cell, text),
            Err(_) => self.reject(text, None),
        }
    }

    fn choose_first(&mut self, player: Player) {
        if let Err(e) = self.engine.choose_first_player(player) {
            self.errors.push(e.to_string());
        }
    }

    fn play_human(&mut self, cell: usize, raw: &str) {
        match self.engine.apply_move(HUMAN, cell) {
            Ok(outcome) => {
                debug!(cell, ?outcome, "Human moved");
                if let Some(pos) = Position::from_number(cell) {
                    self.cursor = pos;
                }
            }
            Err(e) => self.reject(raw, Some(e)),
        }
    }

    fn reject(&mut self, raw: &str, error: Option<EngineError>) {
        warn!(input = raw, error = ?error, "Move rejected");
        self.errors
            .push(format!("\"{}\" is not valid, please try again!", raw.trim()));
        if let Some(e) = error {
            self.errors.push(e.to_string());
        }
    }

    /// Lets the computer take its turn.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Result<RoundOutcome, EngineError> {
        let decision = self.engine.decide_next_move(COMPUTER)?;
        info!(
            cell = decision.position.number(),
            reason = ?decision.reason,
            "Computer moves"
        );
        self.engine.apply_move(COMPUTER, decision.position.number())
    }

    fn start_new_round(&mut self) {
        match self.engine.acknowledge_round_end() {
            Ok(outcome) => {
                info!(%outcome, "Starting new round");
                self.cursor = Position::Center;
            }
            Err(e) => self.errors.push(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use noughts_engine::Square;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn playing_app() -> App {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_splash_then_first_player_prompt() {
        let mut app = App::new(Settings::default());
        assert_eq!(app.screen(), &Screen::Splash);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.screen(), &Screen::Playing);
        assert_eq!(app.phase(), Phase::ChoosingFirstPlayer);
    }

    #[test]
    fn test_choosing_computer_first_hands_it_the_turn() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('2'));
        assert!(app.computer_to_move());

        app.play_computer_turn().unwrap();
        assert_eq!(
            app.engine().board().get(Position::Center),
            Square::Occupied(COMPUTER)
        );
        assert_eq!(app.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_typed_move_is_applied() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.entry().as_deref(), Some(""));

        type_keys(&mut app, "7");
        press(&mut app, KeyCode::Enter);

        assert!(app.entry().is_none());
        assert_eq!(
            app.engine().board().get(Position::BottomLeft),
            Square::Occupied(HUMAN)
        );
        assert!(app.computer_to_move());
    }

    #[test]
    fn test_garbage_entry_is_reported_without_mutation() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('n'));
        assert!(*app.number_view());

        press(&mut app, KeyCode::Char('m'));
        type_keys(&mut app, "abc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.errors()[0], "\"abc\" is not valid, please try again!");
        assert_eq!(app.engine().board().occupied_count(), 0);
        assert!(!*app.number_view());
        assert_eq!(app.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_occupied_cell_reports_engine_error() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        app.play_computer_turn().unwrap();

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.errors().len(), 2);
        assert_eq!(app.errors()[1], "Cell 5 is already occupied");

        // The next key clears old errors.
        press(&mut app, KeyCode::Left);
        assert!(app.errors().is_empty());
    }

    #[test]
    fn test_entry_is_capped_and_editable() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('m'));
        type_keys(&mut app, "12345");
        assert_eq!(app.entry().as_deref(), Some("123"));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.entry().as_deref(), Some("12"));
        press(&mut app, KeyCode::Esc);
        assert!(app.entry().is_none());
        assert_eq!(app.engine().board().occupied_count(), 0);
    }

    #[test]
    fn test_cursor_play() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.engine().board().get(Position::TopLeft),
            Square::Occupied(HUMAN)
        );
    }

    #[test]
    fn test_round_end_and_new_round_scores() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('2'));
        // Computer: 5, human: 2, computer: 1, human: 3, computer: 9 wins.
        for human_cell in ['2', '3'] {
            app.play_computer_turn().unwrap();
            press(&mut app, KeyCode::Char(human_cell));
        }
        let outcome = app.play_computer_turn().unwrap();
        assert_eq!(outcome, RoundOutcome::Won(COMPUTER));
        assert_eq!(app.phase(), Phase::RoundOver(RoundOutcome::Won(COMPUTER)));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.phase(), Phase::ChoosingFirstPlayer);
        assert_eq!(*app.engine().scores().player_two(), 1);
        assert_eq!(*app.engine().scores().draws(), 0);
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.screen(), &Screen::ConfirmQuit);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), &Screen::Playing);
        assert!(!*app.should_quit());

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(*app.should_quit());
    }

    #[test]
    fn test_second_quit_key_returns_to_game() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!*app.should_quit());
        assert_eq!(app.screen(), &Screen::Playing);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::new(Settings::default());
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.screen(), &Screen::Splash);
    }
}

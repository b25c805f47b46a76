//! TUI application state and logic

use crate::core::{GameSession, Status};
use crate::output::FigurePart;
use crate::wordlists::{Difficulty, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

/// Application state
pub struct App {
    source: Box<dyn WordSource>,
    pub session: Option<GameSession>,
    pub fixed_difficulty: Option<Difficulty>,
    pub selected: Difficulty,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    SelectDifficulty,
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app; with a fixed difficulty the first round starts at once
    #[must_use]
    pub fn new(source: Box<dyn WordSource>, difficulty: Option<Difficulty>) -> Self {
        let mut app = Self {
            source,
            session: None,
            fixed_difficulty: difficulty,
            selected: difficulty.unwrap_or(Difficulty::Easy),
            input_mode: InputMode::SelectDifficulty,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Guess the hidden word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        };

        if difficulty.is_some() {
            app.start_round();
        }
        app
    }

    /// Fetch a word for the selected difficulty and start a round
    pub fn start_round(&mut self) {
        let difficulty = self.selected;
        let word = match self.source.word(difficulty) {
            Ok(word) => word,
            Err(e) => {
                warn!(error = %e, "word source failed");
                self.input_mode = InputMode::SelectDifficulty;
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let started = if let Some(session) = self.session.as_mut() {
            session.start(word)
        } else {
            GameSession::new(word).map(|session| self.session = Some(session))
        };

        if let Err(e) = started {
            warn!(error = %e, "unusable word");
            self.input_mode = InputMode::SelectDifficulty;
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        info!(%difficulty, "round started");
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!("New {difficulty} round started! Type a letter and press Enter."),
            MessageStyle::Info,
        );
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.guess(Some(input.as_str())) {
            Ok(Status::Won) => {
                let word = session.word().text().to_uppercase();
                info!(%word, "round won");
                self.input_mode = InputMode::RoundOver;
                self.add_message(&format!("You win! The word was {word}."), MessageStyle::Success);
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            Ok(Status::Lost) => {
                let word = session.word().text().to_uppercase();
                info!(%word, "round lost");
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("You lost! Better luck next time. The word was {word}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            Ok(Status::InProgress) => {
                let stage = session.wrong_guess_stage();
                let missed = session
                    .guesses()
                    .last()
                    .is_some_and(|&letter| !session.word().has_letter(letter));
                if missed && let Some(part) = FigurePart::for_stage(stage) {
                    self.add_message(
                        &format!("No '{input}' in the word. There goes the {}.", part.name()),
                        MessageStyle::Error,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Begin another round after the current one ended
    pub fn new_round(&mut self) {
        if self.fixed_difficulty.is_some() {
            self.start_round();
        } else {
            self.input_mode = InputMode::SelectDifficulty;
            self.add_message("Choose a difficulty for the next round.", MessageStyle::Info);
        }
    }

    /// Move the difficulty selection one tier, wrapping around
    pub fn cycle_difficulty(&mut self, forward: bool) {
        let all = Difficulty::ALL;
        let current = all.iter().position(|&d| d == self.selected).unwrap_or(0);
        let next = if forward {
            (current + 1) % all.len()
        } else {
            (current + all.len() - 1) % all.len()
        };
        self.selected = all[next];
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::SelectDifficulty => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up | KeyCode::Left => self.cycle_difficulty(false),
                KeyCode::Down | KeyCode::Right | KeyCode::Tab => self.cycle_difficulty(true),
                KeyCode::Char(c) => {
                    if let Ok(difficulty) = c.to_string().parse() {
                        self.selected = difficulty;
                    }
                }
                KeyCode::Enter => self.start_round(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            // Guess input is disabled until a new round starts
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSourceError;

    /// Hands out a fixed sequence of words, then runs dry
    struct ScriptedSource(Vec<&'static str>);

    impl WordSource for ScriptedSource {
        fn word(&mut self, difficulty: Difficulty) -> Result<String, WordSourceError> {
            if self.0.is_empty() {
                return Err(WordSourceError::EmptyTier(difficulty));
            }
            Ok(self.0.remove(0).to_string())
        }
    }

    fn app_with(words: Vec<&'static str>, difficulty: Option<Difficulty>) -> App {
        App::new(Box::new(ScriptedSource(words)), difficulty)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn type_guess(app: &mut App, c: char) {
        press(app, KeyCode::Char(c));
        press(app, KeyCode::Enter);
    }

    fn last_message(app: &App) -> &Message {
        app.messages.last().unwrap()
    }

    #[test]
    fn starts_in_difficulty_selection() {
        let app = app_with(vec!["cat"], None);
        assert_eq!(app.input_mode, InputMode::SelectDifficulty);
        assert!(app.session.is_none());
    }

    #[test]
    fn fixed_difficulty_starts_round() {
        let app = app_with(vec!["cat"], Some(Difficulty::Hard));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.as_ref().unwrap().masked_word(), "_ _ _");
    }

    #[test]
    fn select_difficulty_with_keys() {
        let mut app = app_with(vec!["rocket"], None);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, Difficulty::Medium);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, Difficulty::Hard);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.selected, Difficulty::Medium);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn guesses_update_session() {
        let mut app = app_with(vec!["book"], Some(Difficulty::Easy));
        type_guess(&mut app, 'o');
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.masked_word(), "_ o o _");
        assert_eq!(session.guess_history_text(), "Guesses: o");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn wrong_guess_names_drawn_part() {
        let mut app = app_with(vec!["book"], Some(Difficulty::Easy));
        type_guess(&mut app, 'z');
        assert!(last_message(&app).text.contains("head"));
        type_guess(&mut app, 'y');
        assert!(last_message(&app).text.contains("body"));
    }

    #[test]
    fn rejected_guess_shows_error() {
        let mut app = app_with(vec!["book"], Some(Difficulty::Easy));
        type_guess(&mut app, 'o');
        type_guess(&mut app, 'o');
        assert_eq!(last_message(&app).style, MessageStyle::Error);

        type_guess(&mut app, '7');
        assert_eq!(last_message(&app).style, MessageStyle::Error);
        assert_eq!(app.session.as_ref().unwrap().guesses().len(), 1);
    }

    #[test]
    fn win_moves_to_round_over() {
        let mut app = app_with(vec!["cat"], Some(Difficulty::Easy));
        for c in ['c', 'a', 't'] {
            type_guess(&mut app, c);
        }
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.messages.iter().any(|m| m.text.contains("You win")));

        // Letters no longer reach the session
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn loss_reveals_word() {
        let mut app = app_with(vec!["dog"], Some(Difficulty::Easy));
        for c in ['x', 'y', 'z', 'q', 'v', 'w'] {
            type_guess(&mut app, c);
        }
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.messages.iter().any(|m| m.text.contains("DOG")));
    }

    #[test]
    fn new_round_with_fixed_difficulty_restarts() {
        let mut app = app_with(vec!["cat", "book"], Some(Difficulty::Easy));
        for c in ['c', 'a', 't'] {
            type_guess(&mut app, c);
        }
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Guessing);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.word().text(), "book");
        assert_eq!(session.wrong_guess_stage(), 0);
        assert_eq!(session.guess_history_text(), "Guesses: ");
    }

    #[test]
    fn new_round_without_fixed_difficulty_asks_again() {
        let mut app = app_with(vec!["cat"], None);
        press(&mut app, KeyCode::Enter);
        for c in ['c', 'a', 't'] {
            type_guess(&mut app, c);
        }
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::SelectDifficulty);
    }

    #[test]
    fn empty_source_stays_in_selection() {
        let mut app = app_with(vec![], None);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::SelectDifficulty);
        assert_eq!(last_message(&app).style, MessageStyle::Error);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(vec!["cat"], Some(Difficulty::Easy));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a guess while playing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with(vec![], None);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with(vec![], None);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}

//! TUI rendering with ratatui
//!
//! Screens for choosing a difficulty and playing a round.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameSession, MAX_WRONG_GUESSES, Status};
use crate::output::gallows_lines;
use crate::wordlists::Difficulty;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match (&app.session, app.input_mode) {
        (Some(session), InputMode::Guessing | InputMode::RoundOver) => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(40), // Gallows
                    Constraint::Percentage(60), // Word and messages
                ])
                .split(chunks[1]);

            render_gallows(f, session, main_chunks[0]);
            render_round_panel(f, app, session, main_chunks[1]);
        }
        _ => render_difficulty_select(f, app, chunks[1]),
    }

    render_input(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_difficulty_select(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(area);

    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let selected = difficulty == app.selected;
            let (marker, style) = if selected {
                (
                    "▶ ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            let hint = match difficulty {
                Difficulty::Easy => "short words",
                Difficulty::Medium => "6-8 letters",
                Difficulty::Hard => "long words",
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{:<8}", difficulty.name()), style),
                Span::styled(hint, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Choose Difficulty ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_gallows(f: &mut Frame, session: &GameSession, area: Rect) {
    let color = match session.status() {
        Status::Lost => Color::Red,
        Status::Won => Color::Green,
        Status::InProgress => Color::White,
    };

    let lines: Vec<Line> = gallows_lines(session.wrong_guess_stage())
        .into_iter()
        .map(Line::from)
        .collect();

    let gallows = Paragraph::new(lines).style(Style::default().fg(color)).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(gallows, area);
}

fn render_round_panel(f: &mut Frame, app: &App, session: &GameSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word and history
            Constraint::Length(3), // Lives gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let status = session.status();
    let status_color = match status {
        Status::InProgress => Color::Yellow,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Word:   "),
            Span::styled(
                session.masked_word(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(session.guess_history_text()),
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(status.to_string(), Style::default().fg(status_color)),
        ]),
    ];

    let word = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(word, chunks[0]);

    let remaining = session.remaining_wrong_guesses();
    let percent = (remaining * 100 / MAX_WRONG_GUESSES) as u16;
    let gauge = Gauge::default()
        .block(Block::default().title(" Lives ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(if remaining > 2 {
            Color::Green
        } else {
            Color::Red
        }))
        .percent(percent)
        .label(format!("{remaining}/{MAX_WRONG_GUESSES} wrong guesses left"));
    f.render_widget(gauge, chunks[1]);

    render_messages(f, app, chunks[2]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::SelectDifficulty => (
            " Press Enter to start ",
            app.selected.name(),
            Color::Cyan,
        ),
        InputMode::Guessing => (
            " Guess a letter | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (" Round over ", "", Color::DarkGray),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::SelectDifficulty => "↑/↓ or e/m/h: Choose | Enter: Start | q: Quit",
        InputMode::Guessing => "a-z: Type guess | Enter: Submit | Esc: Quit",
        InputMode::RoundOver => "n: New Round | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{FileWordSource, WordSource};
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn source(words: &[&str]) -> Box<dyn WordSource> {
        Box::new(FileWordSource::from_slice(words, Some(0)))
    }

    #[test]
    fn renders_difficulty_screen() {
        let app = App::new(source(&["cat"]), None);
        let screen = render(&app);
        assert!(screen.contains("Choose Difficulty"));
        assert!(screen.contains("medium"));
    }

    #[test]
    fn renders_round_state() {
        let mut app = App::new(source(&["book"]), Some(Difficulty::Easy));
        for code in [KeyCode::Char('o'), KeyCode::Enter, KeyCode::Char('z'), KeyCode::Enter] {
            app.handle_key(KeyEvent::from(code));
        }

        let screen = render(&app);
        assert!(screen.contains("_ o o _"));
        assert!(screen.contains("Guesses: o, z"));
        assert!(screen.contains("5/6 wrong guesses left"));
        assert!(screen.contains('O'), "head is drawn after one wrong guess");
    }

    #[test]
    fn renders_round_over() {
        let mut app = App::new(source(&["ox"]), Some(Difficulty::Easy));
        for code in [KeyCode::Char('o'), KeyCode::Enter, KeyCode::Char('x'), KeyCode::Enter] {
            app.handle_key(KeyEvent::from(code));
        }

        let screen = render(&app);
        assert!(screen.contains("Round over"));
        assert!(screen.contains("New Round"));
    }
}

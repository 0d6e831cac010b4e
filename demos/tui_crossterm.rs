//! Terminal UI example using crossterm and ratatui.
//!
//! Renders the on-screen keyboard under a text area and mirrors typed keys.
//! F2 switches the layout language, F3 toggles caps lock, Esc quits.
//! Run with: cargo run --example tui_crossterm

use std::collections::HashMap;
use std::io;

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing_subscriber::EnvFilter;
use vkbd::{
    Engine, EngineConfig, InputEvent, KeyEvent, KeyIdentifier, KeyTable, LocalClipboard, Modifiers,
};

struct App {
    engine: Engine,
    clipboard: LocalClipboard,
    /// Typed character to (key, needs shift), across every language.
    reverse: HashMap<char, (KeyIdentifier, bool)>,
    last_key: Option<KeyIdentifier>,
}

impl App {
    fn new() -> Self {
        let engine = Engine::builder()
            .config(EngineConfig {
                native_keys: Vec::new(),
                ..EngineConfig::default()
            })
            .text("Type on your keyboard.\n")
            .build();
        let reverse = reverse_map(engine.table());
        Self {
            engine,
            clipboard: LocalClipboard::new(),
            reverse,
            last_key: None,
        }
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        match event.code {
            CKeyCode::F(2) => {
                self.engine.switch_language();
                return;
            }
            CKeyCode::F(3) => {
                self.send(KeyIdentifier::new("CapsLock"), Modifiers::empty());
                return;
            }
            _ => {}
        }

        let mut mods = Modifiers::empty();
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            mods |= Modifiers::CTRL;
        }
        if event.modifiers.contains(KeyModifiers::ALT) {
            mods |= Modifiers::ALT;
        }

        let id = match event.code {
            CKeyCode::Char(c) => {
                let Some((id, shifted)) = self.reverse.get(&c).cloned() else {
                    return;
                };
                // Terminals deliver the final character; caps lock already
                // shaped it, so only shifted symbols need the flag.
                if shifted || (c.is_uppercase() && !self.engine.modifiers().caps_lock()) {
                    mods |= Modifiers::SHIFT;
                }
                id
            }
            CKeyCode::Enter => KeyIdentifier::new("Enter"),
            CKeyCode::Tab => KeyIdentifier::new("Tab"),
            CKeyCode::Backspace => KeyIdentifier::new("Backspace"),
            CKeyCode::Delete => KeyIdentifier::new("Delete"),
            CKeyCode::Left => KeyIdentifier::new("ArrowLeft"),
            CKeyCode::Right => KeyIdentifier::new("ArrowRight"),
            CKeyCode::Up => KeyIdentifier::new("ArrowUp"),
            CKeyCode::Down => KeyIdentifier::new("ArrowDown"),
            _ => return,
        };
        self.send(id, mods);
    }

    fn send(&mut self, id: KeyIdentifier, mods: Modifiers) {
        self.engine
            .handle_event(&mut self.clipboard, InputEvent::Key(KeyEvent::down(id.clone(), mods)));
        self.engine
            .handle_event(&mut self.clipboard, InputEvent::Key(KeyEvent::up(id.clone(), mods)));
        self.last_key = Some(id);
    }
}

fn reverse_map(table: &KeyTable) -> HashMap<char, (KeyIdentifier, bool)> {
    let mut map = HashMap::new();
    for def in table.keys().filter(|d| !d.fixed) {
        for language in 0..table.language_count() {
            if let Some(shifted) = def.shifted(language).and_then(|s| s.chars().next()) {
                map.entry(shifted).or_insert((def.id.clone(), true));
            }
            let primary = def.primary(language);
            for c in primary.chars().chain(primary.to_uppercase().chars()) {
                map.entry(c).or_insert((def.id.clone(), false));
            }
        }
    }
    map.insert(' ', (KeyIdentifier::new("Space"), false));
    map
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(7), Constraint::Length(3)].as_ref())
        .split(f.size());

    // Text area with the selection highlighted
    let snap = app.engine.buffer_snapshot();
    let mut lines = vec![Line::default()];
    for (i, c) in snap.content.chars().enumerate() {
        if c == '\n' {
            lines.push(Line::default());
            continue;
        }
        let style = if i >= snap.selection_start && i < snap.selection_end {
            Style::default().bg(Color::Blue)
        } else {
            Style::default()
        };
        if let Some(line) = lines.last_mut() {
            let cell = if c == '\t' { "    ".to_string() } else { c.to_string() };
            line.spans.push(Span::styled(cell, style));
        }
    }
    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("vkbd demo"));
    f.render_widget(text, chunks[0]);

    // Keyboard
    let mut rows = Vec::new();
    for row in app.engine.table().rows() {
        let mut spans = Vec::new();
        for id in row {
            let mut style = Style::default().fg(Color::White);
            if id.is_caps_lock() && app.engine.caps_lock_visual_state() {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            if app.last_key.as_ref() == Some(id) {
                style = style.bg(Color::DarkGray);
            }
            let label = match app.engine.display_text(id).as_str() {
                "\t" => "Tab".to_string(),
                " " => "     ".to_string(),
                other => other.to_string(),
            };
            spans.push(Span::styled(format!("[{label}]"), style));
        }
        rows.push(Line::from(spans));
    }
    let keyboard = Paragraph::new(rows).block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, chunks[1]);

    // Status line
    let status = format!(
        "{} | caps {} | F2 language, F3 caps lock, Esc quit",
        app.engine.language().name,
        if app.engine.caps_lock_visual_state() { "on" } else { "off" },
    );
    let status = Paragraph::new(status)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);
}

fn main() -> Result<(), io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == CKeyCode::Esc {
                break;
            }
            app.handle_crossterm_event(key);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

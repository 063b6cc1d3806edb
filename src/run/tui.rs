use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::BudgetSource;
use crate::session::Session;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::form::FormField;
use crate::ui::util::{scroll_down, scroll_to_top, scroll_up};

pub(crate) fn as_tui(session: Session, budget_source: BudgetSource) -> Result<()> {
    let mut app = App::new(session, budget_source);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, borders and table header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Form => handle_form_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => commands::handle_command("orders", app)?,
        KeyCode::Char('2') => commands::handle_command("summary", app)?,
        KeyCode::Char('3') => commands::handle_command("budget", app)?,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, screens[(idx + 1) % screens.len()])?;
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev])?;
        }
        KeyCode::Char('n') => app.open_form(),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => app.set_status(""),
        _ => {}
    }
    Ok(())
}

fn switch_screen(app: &mut App, screen: Screen) -> Result<()> {
    let name = match screen {
        Screen::Orders => "orders",
        Screen::Summary => "summary",
        Screen::Budget => "budget",
    };
    commands::handle_command(name, app)
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: event::KeyEvent, app: &mut App) {
    let categories = app.session.budget().len();
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.set_status("Order cancelled");
        }
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
        KeyCode::Char('+') | KeyCode::Right => app.form.adjust(1, categories),
        KeyCode::Left => app.form.adjust(-1, categories),
        // '-' is a literal character in the date field
        KeyCode::Char('-')
            if matches!(app.form.field, FormField::Category | FormField::Quantity) =>
        {
            app.form.adjust(-1, categories)
        }
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
}

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows;
    match app.screen {
        Screen::Orders => {
            let len = app.session.ledger().len();
            scroll_down(&mut app.order_index, &mut app.order_scroll, len, page);
        }
        Screen::Summary | Screen::Budget => {
            if app.row_index + 1 < app.session.budget().len() {
                app.row_index += 1;
            }
        }
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Orders => scroll_up(&mut app.order_index, &mut app.order_scroll),
        Screen::Summary | Screen::Budget => {
            app.row_index = app.row_index.saturating_sub(1);
        }
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Orders => scroll_to_top(&mut app.order_index, &mut app.order_scroll),
        Screen::Summary | Screen::Budget => app.row_index = 0,
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.screen {
        Screen::Orders => app.select_last_order(),
        Screen::Summary | Screen::Budget => {
            app.row_index = app.session.budget().len().saturating_sub(1);
        }
    }
}

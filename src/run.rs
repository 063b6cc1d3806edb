mod cli;
mod tui;

pub(crate) use cli::{as_cli, command_position, open_session};
pub(crate) use tui::as_tui;

use crate::github::types::FetchStatus;
use crate::projects::FetchTicket;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    ProjectsLoaded {
        ticket: FetchTicket,
        status: FetchStatus,
    },
}

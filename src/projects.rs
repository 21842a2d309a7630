use crate::github::types::FetchStatus;
use chrono::{DateTime, Local};

/// Identifies one fetch attempt. Results carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// View model behind the featured-projects section.
#[derive(Debug, Default)]
pub struct ProjectsState {
    status: FetchStatus,
    attempt: u64,
    mounted: bool,
    pub last_fetched: Option<DateTime<Local>>,
}

impl ProjectsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// First call starts the initial fetch; later calls do nothing.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.begin())
    }

    /// Only a failed fetch can be retried.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !self.status.is_failed() {
            return None;
        }
        Some(self.begin())
    }

    fn begin(&mut self) -> FetchTicket {
        self.attempt += 1;
        self.status = FetchStatus::Pending;
        FetchTicket(self.attempt)
    }

    /// Returns false when the result belongs to a superseded attempt or the
    /// attempt has already resolved.
    pub fn complete(&mut self, ticket: FetchTicket, status: FetchStatus) -> bool {
        if ticket.0 != self.attempt || !self.status.is_pending() || status.is_pending() {
            return false;
        }
        self.status = status;
        self.last_fetched = Some(Local::now());
        true
    }
}

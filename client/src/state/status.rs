//! Browser connectivity and backend liveness.
//!
//! Only consulted when the status check is enabled at build time; otherwise
//! the app always renders its routes.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Which top-level screen the app should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// First `/health` check still running.
    Pending,
    Offline,
    ServerDown,
    App,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusState {
    pub enabled: bool,
    pub online: bool,
    /// `None` until the first check completes.
    pub server_online: Option<bool>,
    pub checking: bool,
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            enabled: false,
            online: true,
            server_online: None,
            checking: false,
        }
    }
}

impl StatusState {
    pub fn screen(&self) -> Screen {
        if !self.enabled {
            return Screen::App;
        }
        if !self.online {
            return Screen::Offline;
        }
        match self.server_online {
            None => Screen::Pending,
            Some(false) => Screen::ServerDown,
            Some(true) => Screen::App,
        }
    }

    pub fn check_started(&mut self) {
        self.checking = true;
    }

    pub fn check_finished(&mut self, server_online: bool) {
        self.checking = false;
        self.server_online = Some(server_online);
    }
}

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::ui::panel::FetchPanel;
use crate::ui::view::PanelView;

/// Work handed to the fetch worker.
pub enum UiCommand {
    /// Mount-time fetch.
    Fetch(Arc<dyn FetchPanel>),
    /// User asked to try again.
    Retry(Arc<dyn FetchPanel>),
}

impl std::fmt::Debug for UiCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiCommand::Fetch(panel) => f.debug_tuple("Fetch").field(&panel.kind()).finish(),
            UiCommand::Retry(panel) => f.debug_tuple("Retry").field(&panel.kind()).finish(),
        }
    }
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    panels: Vec<Arc<dyn FetchPanel>>,
    selected: usize,
    animation_tick: u8,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new(panels: Vec<Arc<dyn FetchPanel>>) -> Self {
        Self {
            should_quit: false,
            panels,
            selected: 0,
            animation_tick: 0,
            commands: None,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    /// Drop the command sender so the worker can drain and stop.
    pub fn detach_commands(&mut self) {
        self.commands = None;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn panels(&self) -> &[Arc<dyn FetchPanel>] {
        &self.panels
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_panel(&self) -> Option<&Arc<dyn FetchPanel>> {
        self.panels.get(self.selected)
    }

    pub fn selected_view(&self) -> PanelView {
        self.selected_panel()
            .map(|panel| panel.view())
            .unwrap_or(PanelView::Blank)
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn select_next(&mut self) {
        if !self.panels.is_empty() {
            self.selected = (self.selected + 1) % self.panels.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.panels.is_empty() {
            self.selected = (self.selected + self.panels.len() - 1) % self.panels.len();
        }
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// Issue the initial fetch for every panel.
    pub fn mount(&mut self) {
        for panel in self.panels.clone() {
            self.send(UiCommand::Fetch(panel));
        }
    }

    /// Retry the selected panel once it has settled.
    ///
    /// Returns false while the panel is idle or loading, since neither view
    /// offers a retry button.
    pub fn retry_selected(&mut self) -> bool {
        let Some(panel) = self.selected_panel().cloned() else {
            return false;
        };
        if !panel.status().is_terminal() {
            return false;
        }
        self.send(UiCommand::Retry(panel));
        true
    }

    /// Retry every settled panel.
    pub fn refresh_all(&mut self) -> usize {
        let settled: Vec<_> = self
            .panels
            .iter()
            .filter(|panel| panel.status().is_terminal())
            .cloned()
            .collect();
        let count = settled.len();
        for panel in settled {
            self.send(UiCommand::Retry(panel));
        }
        count
    }

    fn send(&self, command: UiCommand) {
        let Some(sender) = &self.commands else {
            tracing::warn!(?command, "No fetch worker attached, dropping command");
            return;
        };
        if let Err(err) = sender.try_send(command) {
            tracing::warn!(error = %err, "Failed to queue fetch command");
        }
    }
}

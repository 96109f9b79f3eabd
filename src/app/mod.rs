pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::palette::GeneratorMode;
use crate::palette::shades::SHADE_LEVELS;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Commit, Event};
use rand::rngs::StdRng;
use state::{AppState, Screen, Toast};
use std::time::Duration;
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    rng: StdRng,
}

impl App {
    /// `mode` is the session's generator. It may differ from `cfg.generator.mode`
    /// (CLI override) and is never written back to the config.
    pub fn new(
        cfg: Config,
        config_path: std::path::PathBuf,
        mode: GeneratorMode,
        rng: StdRng,
    ) -> Self {
        let state = AppState::new(mode, cfg.ui.notation, cfg.export.format);
        Self {
            cfg,
            config_path,
            state,
            rng,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(64);

        input::spawn_input_task(tx.clone());

        let cursor = self.state.history.ensure_seeded(
            &mut self.rng,
            self.state.mode,
            self.cfg.generator.count,
        );
        self.refresh_status();
        tracing::info!(cursor, mode = self.state.mode.label(), "session started");

        // First draw
        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Commit(commit) => self.apply_commit(commit),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.ui.notation = self.state.notation;
        self.cfg.export.format = self.state.export_format;

        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        // One palette change at a time while a transition is running.
        let history_action = matches!(
            action,
            Action::Generate
                | Action::PreviousPalette
                | Action::NextPalette
                | Action::FirstPalette
                | Action::LastPalette
        );
        if history_action && self.state.changing {
            return;
        }

        let history = &self.state.history;
        match action {
            Action::Generate => {
                let palette = self
                    .state
                    .mode
                    .generate(&mut self.rng, self.cfg.generator.count);
                self.schedule(Commit::Append(palette), tx);
            }
            Action::PreviousPalette if history.can_go_back() => {
                let index = history.cursor() - 1;
                self.schedule(Commit::GoTo(index), tx);
            }
            Action::NextPalette if history.can_go_forward() => {
                let index = history.cursor() + 1;
                self.schedule(Commit::GoTo(index), tx);
            }
            Action::FirstPalette if history.can_go_back() => {
                self.schedule(Commit::GoTo(0), tx);
            }
            Action::LastPalette if history.can_go_forward() => {
                let index = history.len() - 1;
                self.schedule(Commit::GoTo(index), tx);
            }
            _ => self.reduce(action),
        }
    }

    /// Commit a history change, after the fade when a transition is configured.
    fn schedule(&mut self, commit: Commit, tx: &mpsc::Sender<Event>) {
        let delay = self.cfg.ui.transition_ms;
        if delay == 0 {
            self.apply_commit(commit);
            return;
        }

        self.state.changing = true;
        let tx = tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            let _ = tx.send(Event::Commit(commit)).await;
        });
    }

    fn apply_commit(&mut self, commit: Commit) {
        self.state.changing = false;
        match commit {
            Commit::Append(palette) => {
                let origin = palette.origin.label();
                let cursor = self.state.history.append(palette);
                tracing::info!(cursor, origin = %origin, "palette committed");
            }
            Commit::GoTo(index) => {
                if !self.state.history.go_to(index) {
                    tracing::debug!(index, "ignored history jump");
                }
            }
        }
        self.state.clamp_selection();
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let history = &self.state.history;
        self.state.status = match history.current() {
            Some(palette) => format!(
                "{}  {}/{}  {}",
                history.share_query(),
                history.cursor() + 1,
                history.len(),
                palette.origin.label()
            ),
            None => String::new(),
        };
    }

    fn reduce(&mut self, action: Action) {
        let palette_len = self.state.history.current().map_or(0, |p| p.len());
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::SetScreen(screen) => self.state.screen = screen,
            Action::Back => self.state.screen = Screen::Palette,
            Action::SelectColumn(index) => {
                if index < palette_len {
                    self.state.selected = index;
                }
            }
            Action::NextColumn => {
                if palette_len > 0 {
                    self.state.selected = (self.state.selected + 1) % palette_len;
                }
            }
            Action::PrevColumn => {
                if palette_len > 0 {
                    self.state.selected = (self.state.selected + palette_len - 1) % palette_len;
                }
            }
            Action::CycleNotation => {
                self.state.notation = self.state.notation.next();
                self.state.toast = Some(Toast::success(format!(
                    "Showing {}",
                    self.state.notation.label()
                )));
            }
            Action::OpenShades => match self.state.selected_color() {
                Some(_) => {
                    self.state.screen = Screen::Shades;
                    self.state.shade_selected = SHADE_LEVELS.len() / 2;
                }
                None => self.state.toast = Some(Toast::error("No color selected")),
            },
            Action::ShadeUp => {
                self.state.shade_selected = self.state.shade_selected.saturating_sub(1);
            }
            Action::ShadeDown => {
                self.state.shade_selected =
                    (self.state.shade_selected + 1).min(SHADE_LEVELS.len() - 1);
            }
            Action::CycleExportFormat => {
                self.state.export_format = self.state.export_format.next();
            }
            // History actions land here only when they are no-ops.
            Action::Generate
            | Action::PreviousPalette
            | Action::NextPalette
            | Action::FirstPalette
            | Action::LastPalette
            | Action::Resize => {}
        }
    }
}

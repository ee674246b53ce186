//! TUI runtime: owns the terminal and runs the event loop.
//!
//! The reducer stays pure; all I/O happens here. The loop polls the
//! terminal with a tick cadence, feeds events through `update`, and
//! redraws only when state changed. Polling switches between a fast and
//! an idle interval so flash decay animates smoothly without burning CPU
//! while the app sits still.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tally_core::catalog::Catalog;
use tracing::debug;

use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick interval while a row flash is animating.
const FAST_TICK: Duration = Duration::from_millis(50);

/// Tick interval when nothing is animating.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Sets up the terminal and creates the runtime around a catalog.
    pub fn new(catalog: Catalog) -> Result<Self> {
        // Panic hook must be in place before entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(catalog),
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // initial render

        while !self.state.ui.should_quit {
            for event in self.collect_events()? {
                update::update(&mut self.state, event);
                dirty = true;
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(frame, &self.state);
                })?;
                dirty = false;
            }
        }

        debug!("event loop finished");
        Ok(())
    }

    /// Polls the terminal until the next tick is due.
    ///
    /// Blocks up to one tick interval so input stays responsive while the
    /// tick cadence holds. Buffered terminal events are drained in one go.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let tick_interval = if self.state.ui.has_active_flashes() {
            FAST_TICK
        } else {
            IDLE_TICK
        };

        let mut events = Vec::new();
        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

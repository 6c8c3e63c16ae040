//! Live board: redraws the dashboard whenever the feed publishes a new
//! state snapshot, and triggers a refresh on a fixed interval.
//!
//! Redraws are driven by the state channel, not the timer: a tick only
//! kicks off a fetch, and the loading/result/error snapshots it produces
//! each repaint the screen as they arrive.

use crate::display;
use crate::feed::FetchState;
use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize;
use std::time::{Duration, Instant};
use tokio::signal;
use tokio::sync::watch;
use tokio::time;

/// Watch-mode controller around one feed subscription.
pub struct LiveBoard {
    term: Term,
    updates: watch::Receiver<FetchState>,
    interval: Duration,
    started: Instant,
    refreshes: u64,
}

impl LiveBoard {
    pub fn new(updates: watch::Receiver<FetchState>, interval: Duration) -> Self {
        Self {
            term: Term::stdout(),
            updates,
            interval,
            started: Instant::now(),
            refreshes: 0,
        }
    }

    /// Run until ctrl-c (or until the feed side is dropped). `refresh`
    /// starts one fetch; the first tick fires immediately.
    pub async fn run<F, Fut>(&mut self, mut refresh: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        self.term.hide_cursor()?;
        let mut ticker = time::interval(self.interval);

        let result = loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    break Ok(());
                }

                _ = ticker.tick() => {
                    refresh().await;
                    self.refreshes += 1;
                }

                changed = self.updates.changed() => {
                    // Err means the feed is gone; nothing left to watch.
                    if changed.is_err() {
                        break Ok(());
                    }
                    if let Err(e) = self.redraw() {
                        break Err(e);
                    }
                }
            }
        };

        self.term.show_cursor()?;
        println!(
            "Watch stopped after {} refreshes ({:?}).",
            self.refreshes,
            self.started.elapsed()
        );
        result
    }

    fn redraw(&mut self) -> Result<()> {
        self.term.clear_screen()?;
        println!(
            "{}  {} {}  {} {:?}  {} {:?}",
            "OKR Board (live)".bold(),
            "refreshes:".dimmed(),
            self.refreshes,
            "every:".dimmed(),
            self.interval,
            "elapsed:".dimmed(),
            self.started.elapsed()
        );
        println!("{}", "Press Ctrl+C to exit".dimmed());
        display::print_board(&self.updates.borrow_and_update());
        Ok(())
    }
}

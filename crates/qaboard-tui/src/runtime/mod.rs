//! Board runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. Request effects are spawned as tokio tasks
//! whose results come back through the inbox, which is drained every frame.
//!
//! Structure:
//! - `mod.rs`: the runtime and effect dispatch
//! - `inbox.rs`: inbox channel types
//! - `handlers.rs`: one async handler per request effect

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use qaboard_core::api::ApiClient;
use qaboard_core::config::Config;
use qaboard_core::session::Session;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence: toast expiry and redraws of async results.
pub const TICK_DURATION: Duration = Duration::from_millis(100);

/// Full-screen board runtime.
///
/// The terminal is restored on drop and, through the panic hook, on panic.
pub struct BoardRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: ApiClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl BoardRuntime {
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = inbox::channel();

        Ok(Self {
            terminal,
            state: AppState::new(config, session),
            client: ApiClient::new(&config.base_url),
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the event loop until the user quits.
    ///
    /// Must be called from within a tokio runtime; requests are spawned onto
    /// it.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        info!(base_url = self.client.base_url(), "board started");

        let effects = update::init(&mut self.state);
        self.execute_effects(effects);
        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;
            for event in events {
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects request results, terminal input and the tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let poll_duration = if events.is_empty() {
            TICK_DURATION.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns a handler and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            // The receiver only goes away when the board is closing.
            let _ = tx.send(f(client).await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::FetchQuestions { task } => {
                self.spawn_effect(move |client| handlers::fetch_questions(client, task));
            }
            UiEffect::Login { email, password } => {
                self.spawn_effect(move |client| handlers::login(client, email, password));
            }
            UiEffect::Signup { email, password } => {
                self.spawn_effect(move |client| handlers::signup(client, email, password));
            }
            UiEffect::PostQuestion {
                title,
                content,
                session,
            } => {
                self.spawn_effect(move |client| {
                    handlers::post_question(client, title, content, session)
                });
            }
            UiEffect::PostAnswer {
                question_id,
                content,
                session,
            } => {
                self.spawn_effect(move |client| {
                    handlers::post_answer(client, question_id, content, session)
                });
            }
            UiEffect::Vote { kind, id, session } => {
                self.spawn_effect(move |client| handlers::vote(client, kind, id, session));
            }
        }
    }
}

impl Drop for BoardRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

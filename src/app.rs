use crate::core::search::SearchClient;
use crate::runtime::debounce::{Debounced, debounce};
use crate::runtime::effect::Effect;
use crate::task::{FetchExecutor, FetchRequest};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent, TerminalSize};
use crate::ui::renderer::{RenderFrame, Renderer};
use crate::ui::spinner::Spinner;
use crate::widgets::autocomplete::Autocomplete;
use std::time::{Duration, Instant};
use tracing::debug;

type FetchTrigger = Debounced<FetchRequest, Box<dyn FnMut(FetchRequest)>>;

/// The autocomplete page: widget state, debounced search dispatch and the
/// worker pool delivering results. Owns no terminal, so it can be driven
/// with synthetic events and clocks.
pub struct App {
    widget: Autocomplete,
    trigger: FetchTrigger,
    executor: FetchExecutor,
    renderer: Renderer,
    spinner: Spinner,
    should_exit: bool,
}

impl App {
    pub fn new(client: SearchClient, debounce_delay: Duration) -> Self {
        let executor = FetchExecutor::new(client);
        let spawner = executor.spawner();
        let dispatch: Box<dyn FnMut(FetchRequest)> = Box::new(move |request: FetchRequest| {
            debug!(
                query = %request.query,
                generation = request.generation,
                "dispatching search"
            );
            spawner.spawn(request);
        });

        Self {
            widget: Autocomplete::new().with_placeholder("e.g. Targaryen"),
            trigger: debounce(dispatch, debounce_delay),
            executor,
            renderer: Renderer::default(),
            spinner: Spinner::new(),
            should_exit: false,
        }
    }

    pub fn widget(&self) -> &Autocomplete {
        &self.widget
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn fetch_pending(&self) -> bool {
        self.trigger.is_pending()
    }

    /// Returns whether the frame needs to be redrawn.
    pub fn handle_event(&mut self, event: TerminalEvent, now: Instant) -> bool {
        match event {
            TerminalEvent::Key(key) => self.handle_key(key, now),
            TerminalEvent::Click { row, .. } => self.handle_click(row, now),
            TerminalEvent::Resize(_) => true,
            TerminalEvent::Tick => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            self.should_exit = true;
            return false;
        }

        let result = self.widget.on_key(key);
        self.apply_effects(result.effects, now);
        result.request_render
    }

    /// `row` is a frame row, as reported by the terminal.
    pub fn handle_click(&mut self, row: u16, now: Instant) -> bool {
        let Some(widget_row) = row.checked_sub(self.renderer.widget_top()) else {
            return false;
        };
        let result = self.widget.on_click(widget_row);
        self.apply_effects(result.effects, now);
        result.request_render
    }

    /// Fires a due search, applies finished ones and animates the spinner.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.trigger.fire_due(now);

        let mut dirty = false;
        for completion in self.executor.drain_ready() {
            dirty |= self.widget.on_fetch_resolved(completion);
        }

        if self.widget.state().is_loading() {
            self.spinner.tick();
            dirty = true;
        }
        dirty
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.trigger.poll_timeout(now, default_timeout)
    }

    pub fn render(&self, size: TerminalSize) -> RenderFrame {
        self.renderer.render(&self.widget, &self.spinner, size)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::ScheduleFetch(request) => self.trigger.call(request, now),
                Effect::CancelFetch => {
                    if self.trigger.cancel() {
                        debug!("pending search cancelled");
                    }
                }
            }
        }
    }
}

use crate::app::App;
use crate::terminal::{Terminal, TerminalEvent};
use std::io;
use std::time::{Duration, Instant};

const IDLE_POLL: Duration = Duration::from_millis(120);

pub struct Runtime {
    app: App,
    terminal: Terminal,
}

impl Runtime {
    pub fn new(app: App, terminal: Terminal) -> Self {
        Self { app, terminal }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.app.should_exit() {
                if self.app.tick(Instant::now()) {
                    self.render()?;
                }

                let timeout = self.app.poll_timeout(Instant::now(), IDLE_POLL);
                let event = self.terminal.poll_event(timeout)?;
                if let TerminalEvent::Resize(size) = event {
                    self.terminal.set_size(size);
                }
                if self.app.handle_event(event, Instant::now()) {
                    self.render()?;
                }
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.app.render(self.terminal.size());
        self.terminal.render_frame(&frame)
    }
}

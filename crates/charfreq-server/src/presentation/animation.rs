//! Mailbox animation scripts and their scheduler.
//!
//! Each UML method selection triggers a finite, fixed list of timed state
//! transitions. A script is data — `(delay, state)` pairs with delays
//! measured from activation — and one `AnimationPlayer` drives one script
//! at a time on a single cancellable scheduler task, so resetting cancels
//! every pending transition at once.

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// Visible state of the mailbox scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MailboxState {
    /// The mailbox door is open and the flag is raised.
    pub open: bool,
    /// The letter has moved out of (or into) the box.
    pub letter_out: bool,
    /// The count panel is visible. Once shown it stays up through close.
    pub count_shown: bool,
}

/// One timed transition: publish `state` once `delay_ms` have elapsed
/// since the script started.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub delay_ms: u64,
    pub state: MailboxState,
}

/// A finite animation: the method it illustrates plus its ordered steps.
#[derive(Debug, Clone, Serialize)]
pub struct AnimationScript {
    pub method: &'static str,
    pub steps: Vec<Step>,
}

const fn step(delay_ms: u64, open: bool, letter_out: bool, count_shown: bool) -> Step {
    Step {
        delay_ms,
        state: MailboxState {
            open,
            letter_out,
            count_shown,
        },
    }
}

impl AnimationScript {
    /// Script for a UML method name, or `None` for methods without an
    /// animation.
    #[must_use]
    pub fn for_method(method: &str) -> Option<Self> {
        let (method, steps) = match method {
            // Open the box; the letter comes out and stays out until reset.
            "getCharacter" => ("getCharacter", vec![step(500, true, true, false)]),
            // Open, push the letter in, close.
            "setCharacter" => (
                "setCharacter",
                vec![
                    step(500, true, false, false),
                    step(800, true, true, false),
                    step(3000, false, false, false),
                ],
            ),
            // Open with letters out, reveal the count, then the letters go
            // back in while the count panel stays visible.
            "getFrequency" => (
                "getFrequency",
                vec![
                    step(500, true, true, false),
                    step(1200, true, true, true),
                    step(2000, false, false, true),
                ],
            ),
            // Open with the count panel up, deliver the letter, close.
            "setFrequency" => (
                "setFrequency",
                vec![
                    step(500, true, false, true),
                    step(800, true, true, true),
                    step(3000, false, false, true),
                ],
            ),
            _ => return None,
        };
        Some(Self { method, steps })
    }

    /// Methods that have an animation.
    #[must_use]
    pub fn methods() -> &'static [&'static str] {
        &[
            "getCharacter",
            "setCharacter",
            "getFrequency",
            "setFrequency",
        ]
    }
}

/// Drives one script at a time, publishing states through a watch channel.
///
/// `play` replaces any running script; `reset` cancels pending transitions
/// and returns the scene to its inactive state atomically.
pub struct AnimationPlayer {
    tx: watch::Sender<MailboxState>,
    rx: watch::Receiver<MailboxState>,
    scheduler: Option<JoinHandle<()>>,
}

impl AnimationPlayer {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(MailboxState::default());
        Self {
            tx,
            rx,
            scheduler: None,
        }
    }

    /// Subscribe to published states.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<MailboxState> {
        self.rx.clone()
    }

    /// The currently published state.
    #[must_use]
    pub fn current(&self) -> MailboxState {
        *self.rx.borrow()
    }

    /// Start a script, cancelling whatever was running.
    pub fn play(&mut self, script: &AnimationScript) {
        self.stop_scheduler();
        self.tx.send_replace(MailboxState::default());

        let tx = self.tx.clone();
        let steps = script.steps.clone();
        self.scheduler = Some(tokio::spawn(async move {
            let mut elapsed = 0;
            for step in steps {
                sleep(Duration::from_millis(step.delay_ms - elapsed)).await;
                elapsed = step.delay_ms;
                tx.send_replace(step.state);
            }
        }));
    }

    /// Cancel pending transitions and return to the inactive state.
    pub fn reset(&mut self) {
        self.stop_scheduler();
        self.tx.send_replace(MailboxState::default());
    }

    fn stop_scheduler(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.abort();
        }
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationPlayer {
    fn drop(&mut self) {
        self.stop_scheduler();
    }
}

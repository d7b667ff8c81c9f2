//! Height reporting: keeps the embedding parent window informed of this
//! document's rendered height.
//!
//! The reporter is sans-DOM. It decides *whether* a report is due for a given
//! trigger; reading the height and posting the message are the driver's job.
//! Each report carries the full height (not a delta), so reports are
//! idempotent and last-message-wins delivery is acceptable.

use serde::Serialize;

/// Outbound cross-document message payload.
///
/// The embedding page listens for this and resizes the iframe's layout box.
/// Wire shape: `{"iframeHeight":<non-negative integer>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeightMessage {
    /// Full scrollable height of the document root, in CSS pixels.
    #[serde(rename = "iframeHeight")]
    pub iframe_height: u32,
}

/// Triggers that may produce a height report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightTrigger {
    /// Component just mounted (initial report).
    Mounted,
    /// Viewport resize event.
    ViewportResized,
    /// One delivered batch of DOM mutations anywhere under the body.
    MutationBatch,
    /// A previously deferred report is now due.
    FlushDue,
}

/// What the driver should do in response to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightOutcome {
    /// Post this message to the parent window now.
    Report(HeightMessage),
    /// Arm a one-shot timer and feed back [`HeightTrigger::FlushDue`] when it
    /// fires.
    Deferred { delay_ms: u32 },
    /// Nothing to do (a flush is already armed, or a stray flush fired).
    Quiet,
}

/// Decides when height reports go out.
///
/// Default behavior is one report per trigger with no coalescing: every
/// mutation batch produces a message, however small the change. With a
/// debounce window configured, mutation bursts collapse into a single
/// trailing report; mount and resize still report immediately.
#[derive(Debug, Default)]
pub struct HeightReporter {
    debounce_ms: Option<u32>,
    flush_armed: bool,
}

impl HeightReporter {
    pub fn new(debounce_ms: Option<u32>) -> Self {
        Self {
            debounce_ms,
            flush_armed: false,
        }
    }

    /// Handle one trigger. `height` is the host's scrollable height, read in
    /// the same event-loop turn as the trigger.
    pub fn observe(&mut self, trigger: HeightTrigger, height: u32) -> HeightOutcome {
        match trigger {
            HeightTrigger::Mounted | HeightTrigger::ViewportResized => {
                HeightOutcome::Report(HeightMessage {
                    iframe_height: height,
                })
            }
            HeightTrigger::MutationBatch => {
                log::debug!("DOM changed, height now {}", height);
                match self.debounce_ms {
                    None => HeightOutcome::Report(HeightMessage {
                        iframe_height: height,
                    }),
                    Some(delay_ms) => {
                        if self.flush_armed {
                            HeightOutcome::Quiet
                        } else {
                            self.flush_armed = true;
                            HeightOutcome::Deferred { delay_ms }
                        }
                    }
                }
            }
            HeightTrigger::FlushDue => {
                if self.flush_armed {
                    self.flush_armed = false;
                    HeightOutcome::Report(HeightMessage {
                        iframe_height: height,
                    })
                } else {
                    HeightOutcome::Quiet
                }
            }
        }
    }

    /// Drop any pending flush (unmount).
    pub fn reset(&mut self) {
        self.flush_armed = false;
    }
}

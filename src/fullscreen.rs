//! Fullscreen toggle control: a button overlaid on a configured heading that
//! enters and exits fullscreen for the whole document.
//!
//! Like the height reporter, the control is sans-DOM: it decides what should
//! happen (inject, request enter/exit, restyle) and the driver performs the
//! DOM work. Button appearance follows *observed* host state, never request
//! issuance, so exits the button did not initiate (e.g. the escape key)
//! resynchronize the glyph, and a rejected request changes nothing.

/// Button glyphs.
pub mod glyph {
    pub const ENTER: &str = "⛶";
    pub const EXIT: &str = "✕";
}

/// Button hover tooltips.
pub mod tooltip {
    pub const ENTER: &str = "Full screen";
    pub const EXIT: &str = "Exit full screen";
}

/// Visible state of the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Windowed,
    Fullscreen,
}

/// Glyph and tooltip pair shown on the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonAppearance {
    pub glyph: &'static str,
    pub tooltip: &'static str,
}

impl ButtonAppearance {
    /// Appearance for the given host fullscreen state.
    pub fn for_state(fullscreen_active: bool) -> Self {
        if fullscreen_active {
            Self {
                glyph: glyph::EXIT,
                tooltip: tooltip::EXIT,
            }
        } else {
            Self {
                glyph: glyph::ENTER,
                tooltip: tooltip::ENTER,
            }
        }
    }
}

/// Events fed to the control by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenEvent {
    /// The post-mount injection delay elapsed; the driver reports whether the
    /// configured heading exists in the document.
    InjectionDue { heading_present: bool },
    /// The injected button was clicked.
    ButtonClicked,
    /// The host's fullscreen state changed (grant, exit completion, or an
    /// exit outside the button such as the escape key).
    StateChanged { active: bool },
}

/// Actions for the driver to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenAction {
    /// Wrap the heading in a positioning container and overlay the toggle
    /// button with this appearance.
    InjectButton(ButtonAppearance),
    /// Ask the host to take the document element fullscreen.
    RequestEnter,
    /// Ask the host to leave fullscreen.
    RequestExit,
    /// Update the button's glyph and tooltip.
    Restyle(ButtonAppearance),
}

/// Fullscreen toggle state machine.
///
/// Two states, `Windowed` and `Fullscreen`, transitioning only on
/// [`FullscreenEvent::StateChanged`]. A request the host rejects produces no
/// state change and leaves the appearance as it was.
#[derive(Debug, Default)]
pub struct FullscreenControl {
    state: ButtonState,
    injected: bool,
}

impl FullscreenControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Whether a button has been injected this mount.
    pub fn injected(&self) -> bool {
        self.injected
    }

    /// Handle one event. `fullscreen_active` is the host state read in the
    /// same event-loop turn.
    pub fn handle(
        &mut self,
        event: FullscreenEvent,
        fullscreen_active: bool,
    ) -> Option<FullscreenAction> {
        match event {
            FullscreenEvent::InjectionDue {
                heading_present: false,
            } => {
                // Expected on pages without the heading; recoverable, warn only.
                log::warn!("heading element not found, fullscreen button not injected");
                None
            }
            FullscreenEvent::InjectionDue {
                heading_present: true,
            } => {
                // One button per mount, even if the timer somehow fires twice.
                if self.injected {
                    return None;
                }
                self.injected = true;
                self.state = if fullscreen_active {
                    ButtonState::Fullscreen
                } else {
                    ButtonState::Windowed
                };
                Some(FullscreenAction::InjectButton(ButtonAppearance::for_state(
                    fullscreen_active,
                )))
            }
            FullscreenEvent::ButtonClicked => {
                if !self.injected {
                    return None;
                }
                if fullscreen_active {
                    Some(FullscreenAction::RequestExit)
                } else {
                    Some(FullscreenAction::RequestEnter)
                }
            }
            FullscreenEvent::StateChanged { active } => {
                if !self.injected {
                    return None;
                }
                let next = if active {
                    ButtonState::Fullscreen
                } else {
                    ButtonState::Windowed
                };
                if next == self.state {
                    return None;
                }
                self.state = next;
                Some(FullscreenAction::Restyle(ButtonAppearance::for_state(
                    active,
                )))
            }
        }
    }

    /// Forget the injected button (unmount).
    pub fn reset(&mut self) {
        self.state = ButtonState::Windowed;
        self.injected = false;
    }
}

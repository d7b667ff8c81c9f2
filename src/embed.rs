//! Component composition: one mounting lifecycle driving the height reporter
//! and the fullscreen control.
//!
//! The two collaborators have unrelated triggers and failure modes, so they
//! live in their own modules; [`IframeEmbed`] only routes events, reads the
//! ambient host state once per event, and gates everything on mount liveness.

use crate::fullscreen::{ButtonAppearance, FullscreenAction, FullscreenControl, FullscreenEvent};
use crate::height::{HeightMessage, HeightOutcome, HeightReporter, HeightTrigger};

/// Read-only host environment capability.
///
/// Ambient browser state the component consults but never owns. Substituting
/// a fake implementation makes the whole component testable without a DOM.
pub trait HostEnv {
    /// Full scrollable height of the document root, in CSS pixels.
    fn content_height(&self) -> u32;

    /// Whether the host currently has an active fullscreen element.
    fn fullscreen_active(&self) -> bool;
}

/// Component configuration.
///
/// Defaults reproduce the embed this crate grew out of: the host page's title
/// heading, a 500 ms post-render lookup delay, an unrestricted target origin
/// and no report coalescing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Selector for the heading that receives the fullscreen button.
    pub heading_selector: String,
    /// Delay between mount and the heading lookup, in milliseconds. The host
    /// page exposes no render-complete signal, so the lookup is deferred by a
    /// fixed interval chosen to outlast its render cycle.
    pub injection_delay_ms: u32,
    /// Target origin for outbound height messages.
    pub target_origin: String,
    /// Trailing debounce for mutation-driven reports. `None` reports every
    /// batch.
    pub mutation_debounce_ms: Option<u32>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            heading_selector: "h4.text-balance.text-2xl".to_string(),
            injection_delay_ms: 500,
            target_origin: "*".to_string(),
            mutation_debounce_ms: None,
        }
    }
}

impl EmbedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector for the heading that receives the fullscreen button.
    ///
    /// Default: `h4.text-balance.text-2xl`
    pub fn with_heading_selector(mut self, selector: impl Into<String>) -> Self {
        self.heading_selector = selector.into();
        self
    }

    /// Delay between mount and the heading lookup.
    ///
    /// Default: 500 ms
    pub fn with_injection_delay_ms(mut self, delay_ms: u32) -> Self {
        self.injection_delay_ms = delay_ms;
        self
    }

    /// Target origin for outbound height messages. Embedders that know their
    /// parent's origin should pin it here.
    ///
    /// Default: `*`
    pub fn with_target_origin(mut self, origin: impl Into<String>) -> Self {
        self.target_origin = origin.into();
        self
    }

    /// Coalesce mutation bursts into a single trailing report.
    ///
    /// Default: off
    pub fn with_mutation_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.mutation_debounce_ms = Some(debounce_ms);
        self
    }
}

/// Discrete events delivered by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedEvent {
    Mounted,
    ViewportResized,
    /// One delivered batch of DOM mutations under the document body.
    MutationBatch,
    /// A report deferred by the debounce window is now due.
    ReportFlushDue,
    /// The injection timer fired; the driver looked up the heading.
    InjectionDue { heading_present: bool },
    ButtonClicked,
    /// The host's fullscreen state changed, for whatever reason.
    FullscreenChanged { active: bool },
    Unmounted,
}

/// Side effects for the driver to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedAction {
    /// Post the message to the embedding parent window. A no-op when the
    /// document is not embedded.
    PostHeight(HeightMessage),
    /// Arm the one-shot injection timer; feed [`EmbedEvent::InjectionDue`]
    /// when it fires.
    ScheduleInjection { delay_ms: u32 },
    /// Arm the one-shot flush timer; feed [`EmbedEvent::ReportFlushDue`] when
    /// it fires.
    ScheduleReportFlush { delay_ms: u32 },
    /// Wrap the heading and overlay the toggle button.
    InjectButton(ButtonAppearance),
    RequestFullscreenEnter,
    RequestFullscreenExit,
    RestyleButton(ButtonAppearance),
}

/// The embed component: height reporter and fullscreen control behind one
/// mounting lifecycle.
#[derive(Debug)]
pub struct IframeEmbed {
    config: EmbedConfig,
    mounted: bool,
    reporter: HeightReporter,
    fullscreen: FullscreenControl,
}

impl IframeEmbed {
    pub fn new(config: EmbedConfig) -> Self {
        let reporter = HeightReporter::new(config.mutation_debounce_ms);
        Self {
            config,
            mounted: false,
            reporter,
            fullscreen: FullscreenControl::new(),
        }
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    /// Process one event against the host, returning the actions to execute.
    ///
    /// Events delivered after [`EmbedEvent::Unmounted`] produce no actions; a
    /// pending injection or flush timer that outlives the component is
    /// thereby inert even if the driver failed to cancel it.
    pub fn handle<H: HostEnv>(&mut self, event: EmbedEvent, host: &H) -> Vec<EmbedAction> {
        match event {
            EmbedEvent::Mounted => {
                self.mounted = true;
                log::info!("embed sizer mounted");
                let mut actions = Vec::with_capacity(2);
                if let HeightOutcome::Report(msg) = self
                    .reporter
                    .observe(HeightTrigger::Mounted, host.content_height())
                {
                    actions.push(EmbedAction::PostHeight(msg));
                }
                actions.push(EmbedAction::ScheduleInjection {
                    delay_ms: self.config.injection_delay_ms,
                });
                actions
            }
            _ if !self.mounted => Vec::new(),
            EmbedEvent::ViewportResized => self.report(HeightTrigger::ViewportResized, host),
            EmbedEvent::MutationBatch => self.report(HeightTrigger::MutationBatch, host),
            EmbedEvent::ReportFlushDue => self.report(HeightTrigger::FlushDue, host),
            EmbedEvent::InjectionDue { heading_present } => {
                self.control(FullscreenEvent::InjectionDue { heading_present }, host)
            }
            EmbedEvent::ButtonClicked => self.control(FullscreenEvent::ButtonClicked, host),
            EmbedEvent::FullscreenChanged { active } => {
                self.control(FullscreenEvent::StateChanged { active }, host)
            }
            EmbedEvent::Unmounted => {
                self.mounted = false;
                self.reporter.reset();
                self.fullscreen.reset();
                log::info!("embed sizer unmounted");
                Vec::new()
            }
        }
    }

    fn report<H: HostEnv>(&mut self, trigger: HeightTrigger, host: &H) -> Vec<EmbedAction> {
        match self.reporter.observe(trigger, host.content_height()) {
            HeightOutcome::Report(msg) => vec![EmbedAction::PostHeight(msg)],
            HeightOutcome::Deferred { delay_ms } => {
                vec![EmbedAction::ScheduleReportFlush { delay_ms }]
            }
            HeightOutcome::Quiet => Vec::new(),
        }
    }

    fn control<H: HostEnv>(&mut self, event: FullscreenEvent, host: &H) -> Vec<EmbedAction> {
        match self.fullscreen.handle(event, host.fullscreen_active()) {
            Some(FullscreenAction::InjectButton(appearance)) => {
                vec![EmbedAction::InjectButton(appearance)]
            }
            Some(FullscreenAction::RequestEnter) => vec![EmbedAction::RequestFullscreenEnter],
            Some(FullscreenAction::RequestExit) => vec![EmbedAction::RequestFullscreenExit],
            Some(FullscreenAction::Restyle(appearance)) => {
                vec![EmbedAction::RestyleButton(appearance)]
            }
            None => Vec::new(),
        }
    }
}

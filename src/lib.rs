//! iframe-sizer: a sans-DOM embed sizing component
//!
//! This crate keeps an embedding parent page informed of an iframed
//! document's rendered height (so the parent can resize the iframe's layout
//! box and avoid double scrollbars) and overlays a fullscreen toggle button
//! on the host page's title heading.
//!
//! # Features
//!
//! - **Sans-DOM Core**: events in, actions out; the browser substrate is
//!   injected, so the whole component runs under plain `cargo test`
//! - **Height Reporting**: mount, viewport resizes and every DOM mutation
//!   batch each produce a `{"iframeHeight":N}` message for the parent window
//! - **Fullscreen Toggle**: delayed heading lookup, overlay button with
//!   ⛶/✕ glyphs, appearance resynced from observed host state
//! - **Optional Coalescing**: trailing debounce for mutation floods, off by
//!   default
//! - **Browser Driver**: the `web` feature wires the core to a live document
//!   via wasm-bindgen
//!
//! # Quick Start
//!
//! ```rust
//! use iframe_sizer::{EmbedAction, EmbedConfig, EmbedEvent, HostEnv, IframeEmbed};
//!
//! // Any read-only view of the host page works; tests use a fake.
//! struct Host {
//!     height: u32,
//! }
//!
//! impl HostEnv for Host {
//!     fn content_height(&self) -> u32 {
//!         self.height
//!     }
//!     fn fullscreen_active(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let mut embed = IframeEmbed::new(EmbedConfig::default());
//! let host = Host { height: 1200 };
//!
//! // Mounting posts the initial report and schedules button injection.
//! let actions = embed.handle(EmbedEvent::Mounted, &host);
//! assert_eq!(actions.len(), 2);
//! match &actions[0] {
//!     EmbedAction::PostHeight(msg) => assert_eq!(msg.iframe_height, 1200),
//!     other => panic!("unexpected action: {:?}", other),
//! }
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally minimal. It provides:
//! - Height report decisions (triggers → messages)
//! - Fullscreen button state (injection, toggling, resync)
//! - One mounting lifecycle composing the two
//!
//! It does NOT provide:
//! - The parent-side message listener (the embedding page resizes the iframe)
//! - Origin validation of the outbound message (pin `target_origin` if you
//!   know your parent)
//! - Any rendering of its own (the heading it decorates belongs to the host
//!   page)
//!
//! # Use Cases
//!
//! - **Embedded widgets**: calculators and similar iframe content that must
//!   drive its host box height
//! - **Kiosk embeds**: one-click fullscreen on pages you do not control
//! - **Headless testing**: drive the component with a fake host, no browser

pub mod embed;
pub mod fullscreen;
pub mod height;

#[cfg(feature = "web")]
pub mod web;

pub use embed::{EmbedAction, EmbedConfig, EmbedEvent, HostEnv, IframeEmbed};
pub use fullscreen::{
    glyph, tooltip, ButtonAppearance, ButtonState, FullscreenAction, FullscreenControl,
    FullscreenEvent,
};
pub use height::{HeightMessage, HeightOutcome, HeightReporter, HeightTrigger};

//! The enter/exit toggle cycle, including rejection and out-of-band exits.

use iframe_sizer::{
    glyph, tooltip, ButtonAppearance, EmbedAction, EmbedConfig, EmbedEvent, IframeEmbed,
};

use crate::support::FakeHost;

/// Mount and inject, leaving the component with a windowed button.
fn injected(host: &FakeHost) -> IframeEmbed {
    let mut embed = IframeEmbed::new(EmbedConfig::default());
    embed.handle(EmbedEvent::Mounted, host);
    embed.handle(
        EmbedEvent::InjectionDue {
            heading_present: true,
        },
        host,
    );
    embed
}

#[test]
fn test_click_while_windowed_requests_enter_without_restyle() {
    let host = FakeHost::new();
    let mut embed = injected(&host);

    // Appearance only changes once the host confirms the state change.
    let actions = embed.handle(EmbedEvent::ButtonClicked, &host);
    assert_eq!(actions, vec![EmbedAction::RequestFullscreenEnter]);
}

#[test]
fn test_grant_flips_button_to_exit_affordance() {
    let host = FakeHost::new();
    let mut embed = injected(&host);

    embed.handle(EmbedEvent::ButtonClicked, &host);
    host.set_fullscreen(true);
    let actions = embed.handle(EmbedEvent::FullscreenChanged { active: true }, &host);
    assert_eq!(
        actions,
        vec![EmbedAction::RestyleButton(ButtonAppearance {
            glyph: glyph::EXIT,
            tooltip: tooltip::EXIT,
        })]
    );
}

#[test]
fn test_click_while_fullscreen_requests_exit() {
    let host = FakeHost::new();
    let mut embed = injected(&host);

    host.set_fullscreen(true);
    embed.handle(EmbedEvent::FullscreenChanged { active: true }, &host);

    let actions = embed.handle(EmbedEvent::ButtonClicked, &host);
    assert_eq!(actions, vec![EmbedAction::RequestFullscreenExit]);
}

#[test]
fn test_exit_completion_reverts_button() {
    let host = FakeHost::new();
    let mut embed = injected(&host);

    host.set_fullscreen(true);
    embed.handle(EmbedEvent::FullscreenChanged { active: true }, &host);
    embed.handle(EmbedEvent::ButtonClicked, &host);

    host.set_fullscreen(false);
    let actions = embed.handle(EmbedEvent::FullscreenChanged { active: false }, &host);
    assert_eq!(
        actions,
        vec![EmbedAction::RestyleButton(ButtonAppearance {
            glyph: glyph::ENTER,
            tooltip: tooltip::ENTER,
        })]
    );
}

#[test]
fn test_rejected_request_leaves_appearance_untouched() {
    let host = FakeHost::new();
    let mut embed = injected(&host);

    // Click issues the request, the host denies it: no state-change event
    // ever arrives, and nothing restyles.
    let actions = embed.handle(EmbedEvent::ButtonClicked, &host);
    assert_eq!(actions, vec![EmbedAction::RequestFullscreenEnter]);

    // A redundant notification for the unchanged state is also silent.
    let actions = embed.handle(EmbedEvent::FullscreenChanged { active: false }, &host);
    assert!(actions.is_empty());
}

#[test]
fn test_escape_key_exit_resyncs_button() {
    let host = FakeHost::new();
    let mut embed = injected(&host);

    host.set_fullscreen(true);
    embed.handle(EmbedEvent::FullscreenChanged { active: true }, &host);

    // The user leaves fullscreen without touching the button; the observed
    // state change alone reverts the glyph.
    host.set_fullscreen(false);
    let actions = embed.handle(EmbedEvent::FullscreenChanged { active: false }, &host);
    assert_eq!(
        actions,
        vec![EmbedAction::RestyleButton(ButtonAppearance {
            glyph: glyph::ENTER,
            tooltip: tooltip::ENTER,
        })]
    );
}

#[test]
fn test_full_toggle_cycle() {
    let host = FakeHost::new();
    let mut embed = injected(&host);

    assert_eq!(
        embed.handle(EmbedEvent::ButtonClicked, &host),
        vec![EmbedAction::RequestFullscreenEnter]
    );
    host.set_fullscreen(true);
    assert_eq!(
        embed.handle(EmbedEvent::FullscreenChanged { active: true }, &host),
        vec![EmbedAction::RestyleButton(ButtonAppearance {
            glyph: glyph::EXIT,
            tooltip: tooltip::EXIT,
        })]
    );
    assert_eq!(
        embed.handle(EmbedEvent::ButtonClicked, &host),
        vec![EmbedAction::RequestFullscreenExit]
    );
    host.set_fullscreen(false);
    assert_eq!(
        embed.handle(EmbedEvent::FullscreenChanged { active: false }, &host),
        vec![EmbedAction::RestyleButton(ButtonAppearance {
            glyph: glyph::ENTER,
            tooltip: tooltip::ENTER,
        })]
    );
}

//! Report-per-trigger behavior and payload fidelity.

use iframe_sizer::{EmbedAction, EmbedConfig, EmbedEvent, IframeEmbed};

use crate::support::{posted_heights, FakeHost};

#[test]
fn test_mount_posts_initial_height() {
    let host = FakeHost::with_height(1200);
    let mut embed = IframeEmbed::new(EmbedConfig::default());

    let actions = embed.handle(EmbedEvent::Mounted, &host);
    assert_eq!(posted_heights(&actions), vec![1200]);
    assert!(actions.contains(&EmbedAction::ScheduleInjection { delay_ms: 500 }));
}

#[test]
fn test_mount_then_single_mutation_is_two_reports() {
    let host = FakeHost::with_height(300);
    let mut embed = IframeEmbed::new(EmbedConfig::default());

    let mut heights = posted_heights(&embed.handle(EmbedEvent::Mounted, &host));

    host.set_height(550);
    heights.extend(posted_heights(&embed.handle(EmbedEvent::MutationBatch, &host)));

    assert_eq!(heights, vec![300, 550]);
}

#[test]
fn test_one_report_per_mutation_batch() {
    let host = FakeHost::with_height(100);
    let mut embed = IframeEmbed::new(EmbedConfig::default());

    let mut heights = posted_heights(&embed.handle(EmbedEvent::Mounted, &host));

    for height in [150, 220, 410] {
        host.set_height(height);
        heights.extend(posted_heights(&embed.handle(EmbedEvent::MutationBatch, &host)));
    }

    // Batches + the initial mount report, nothing coalesced.
    assert_eq!(heights, vec![100, 150, 220, 410]);
}

#[test]
fn test_resize_reports_current_height() {
    let host = FakeHost::with_height(100);
    let mut embed = IframeEmbed::new(EmbedConfig::default());
    embed.handle(EmbedEvent::Mounted, &host);

    host.set_height(768);
    let actions = embed.handle(EmbedEvent::ViewportResized, &host);
    assert_eq!(posted_heights(&actions), vec![768]);
}

#[test]
fn test_unchanged_height_still_reports() {
    let host = FakeHost::with_height(640);
    let mut embed = IframeEmbed::new(EmbedConfig::default());
    embed.handle(EmbedEvent::Mounted, &host);

    // No dedup: a class toggle that does not move the height still reports.
    let first = embed.handle(EmbedEvent::MutationBatch, &host);
    let second = embed.handle(EmbedEvent::MutationBatch, &host);
    assert_eq!(posted_heights(&first), vec![640]);
    assert_eq!(posted_heights(&second), vec![640]);
}

#[test]
fn test_zero_height_is_reportable() {
    let host = FakeHost::with_height(0);
    let mut embed = IframeEmbed::new(EmbedConfig::default());

    let actions = embed.handle(EmbedEvent::Mounted, &host);
    assert_eq!(posted_heights(&actions), vec![0]);
}

//! Test support: a scriptable fake host environment.

use std::cell::Cell;

use iframe_sizer::{EmbedAction, HostEnv};

/// Fake host with settable ambient state.
#[derive(Debug, Default)]
pub struct FakeHost {
    height: Cell<u32>,
    fullscreen: Cell<bool>,
}

impl FakeHost {
    pub fn with_height(height: u32) -> Self {
        let host = Self::default();
        host.height.set(height);
        host
    }

    pub fn set_height(&self, height: u32) {
        self.height.set(height);
    }
}

impl HostEnv for FakeHost {
    fn content_height(&self) -> u32 {
        self.height.get()
    }

    fn fullscreen_active(&self) -> bool {
        self.fullscreen.get()
    }
}

/// Heights carried by the `PostHeight` actions in `actions`, in order.
pub fn posted_heights(actions: &[EmbedAction]) -> Vec<u32> {
    actions
        .iter()
        .filter_map(|action| match action {
            EmbedAction::PostHeight(msg) => Some(msg.iframe_height),
            _ => None,
        })
        .collect()
}

//! Test support: a scriptable fake host environment.

use std::cell::Cell;

use iframe_sizer::HostEnv;

/// Fake host with settable ambient state.
#[derive(Debug, Default)]
pub struct FakeHost {
    height: Cell<u32>,
    fullscreen: Cell<bool>,
}

impl FakeHost {
    pub fn new() -> Self {
        let host = Self::default();
        host.height.set(600);
        host
    }

    pub fn set_fullscreen(&self, active: bool) {
        self.fullscreen.set(active);
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

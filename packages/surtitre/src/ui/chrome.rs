/// Window-chrome state: which of the main window and the floating trigger
/// are visible. Independent of the translation pipeline.
///
/// Hiding the main window after a minimize is deferred by one frame so the
/// platform's minimize animation can finish before the window disappears.
#[derive(Debug, Default)]
pub struct Chrome {
    trigger_visible: bool,
    main_hidden: bool,
    hide_pending: bool,
}

impl Chrome {
    pub fn trigger_visible(&self) -> bool {
        self.trigger_visible
    }

    pub fn main_hidden(&self) -> bool {
        self.main_hidden
    }

    /// The translate action ran; from the first activation on, the floating
    /// trigger stays available.
    pub fn on_activated(&mut self) {
        self.trigger_visible = true;
    }

    /// The platform reported the root viewport minimized.
    pub fn on_minimized(&mut self) {
        if !self.main_hidden {
            self.hide_pending = true;
            self.trigger_visible = true;
        }
    }

    /// Polled once per frame; true exactly on the frame where the main
    /// window should actually be hidden.
    pub fn take_pending_hide(&mut self) -> bool {
        if self.hide_pending {
            self.hide_pending = false;
            self.main_hidden = true;
            true
        } else {
            false
        }
    }
}

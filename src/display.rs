//! Display probes. The platform side is reached through [`WindowProbe`], so the
//! decisions here stay plain arithmetic.

/// Height difference, in dp, above which the soft keyboard is considered open.
pub const DEFAULT_KEYBOARD_MARGIN_DP: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel
    pub density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Read access to the window a screen is drawn into.
pub trait WindowProbe {
    /// Height of the root content view in pixels
    fn root_view_height(&self) -> i32;

    /// Part of the window not covered by system decorations or the keyboard
    fn visible_display_frame(&self) -> Rect;

    fn display_metrics(&self) -> DisplayMetrics;
}

pub fn convert_dp_to_px(metrics: &DisplayMetrics, dp: f32) -> f32 {
    dp * metrics.density
}

pub fn is_keyboard_open(probe: &impl WindowProbe, margin_dp: f32) -> bool {
    let height_diff = probe.root_view_height() - probe.visible_display_frame().height();
    let margin = convert_dp_to_px(&probe.display_metrics(), margin_dp).round() as i32;
    height_diff > margin
}

pub fn is_keyboard_closed(probe: &impl WindowProbe, margin_dp: f32) -> bool {
    !is_keyboard_open(probe, margin_dp)
}

/// A probe answering from values captured up front.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameSnapshot {
    pub root_height: i32,
    pub visible: Rect,
    pub metrics: DisplayMetrics,
}

impl WindowProbe for FrameSnapshot {
    fn root_view_height(&self) -> i32 {
        self.root_height
    }

    fn visible_display_frame(&self) -> Rect {
        self.visible
    }

    fn display_metrics(&self) -> DisplayMetrics {
        self.metrics
    }
}

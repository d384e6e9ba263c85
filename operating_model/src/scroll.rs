//! Horizontal scroll stepping for the model viewport.

/// Default distance, in CSS pixels, moved by one press of a scroll button.
pub const DEFAULT_SCROLL_STEP: i32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Previous,
    Next,
}

impl ScrollDirection {
    /// Signed change to `scrollLeft` for one step.
    pub fn offset(self, step: i32) -> i32 {
        let step = step.saturating_abs();
        match self {
            ScrollDirection::Previous => -step,
            ScrollDirection::Next => step,
        }
    }

    /// New `scrollLeft` before the browser clamps it to the content edges.
    pub fn apply(self, scroll_left: i32, step: i32) -> i32 {
        scroll_left.saturating_add(self.offset(step))
    }

    pub fn label(self) -> &'static str {
        match self {
            ScrollDirection::Previous => "Scroll left",
            ScrollDirection::Next => "Scroll right",
        }
    }
}

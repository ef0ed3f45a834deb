//! Layout strategies
//!
//! A layout positions a panel's children inside the panel's content space
//! and reports the extent the children need. Layouts are stateless: running
//! one twice over unchanged children yields identical positions.

use crate::widget::Widget;

/// A strategy that positions a container's children
pub trait WidgetLayout {
    /// Position `widgets` and return the total content height
    fn align(&self, widgets: &mut [Box<dyn Widget>]) -> i32;
}

/// Stack visible children top to bottom
///
/// With leading gap `pre`, inter-item gap `spacing`, and trailing gap `post`,
/// child `k` lands at `pre + Σ(h₁..hₖ₋₁) + spacing·(k − 1)` and the content
/// height is `pre + Σh + spacing·(N − 1) + post`. Nothing to lay out means a
/// content height of zero (no leading or trailing gap is charged).
///
/// Only `y` is assigned; horizontal placement is left to the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vertical {
    pub pre: i32,
    pub spacing: i32,
    pub post: i32,
}

impl Vertical {
    pub const fn new(pre: i32, spacing: i32, post: i32) -> Self {
        Self { pre, spacing, post }
    }
}

impl WidgetLayout for Vertical {
    fn align(&self, widgets: &mut [Box<dyn Widget>]) -> i32 {
        let mut y = self.pre;
        let mut placed = 0;

        for widget in widgets.iter_mut().filter(|w| w.is_visible()) {
            if placed > 0 {
                y += self.spacing;
            }
            widget.set_y(y);
            y += widget.bounds().height;
            placed += 1;
        }

        if placed == 0 {
            0
        } else {
            y + self.post
        }
    }
}

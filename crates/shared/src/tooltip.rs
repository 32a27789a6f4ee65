//! Tooltip geometry inside the map container.
//!
//! All values are CSS pixels relative to the container's top-left corner.
//! The tooltip has a fixed rendered box of 320x150.

pub const TOOLTIP_WIDTH: f64 = 320.0;
pub const TOOLTIP_HEIGHT: f64 = 150.0;

// Default anchor: right of and slightly above the marker
pub const OFFSET_RIGHT: f64 = 20.0;
pub const OFFSET_UP: f64 = 10.0;

/// Gap between the marker and a tooltip flipped to its left side.
pub const FLIP_GAP: f64 = 10.0;

/// Space kept below a tooltip pulled up from the bottom edge.
pub const BOTTOM_MARGIN: f64 = 20.0;

/// Tooltips never start higher than this (the header overlays the map).
pub const MIN_TOP: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub side: Side,
}

impl Placement {
    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px;", self.left, self.top)
    }
}

/// Place the tooltip for a marker whose box starts at (`marker_x`, `marker_y`).
pub fn place(marker_x: f64, marker_y: f64, container_w: f64, container_h: f64) -> Placement {
    let mut left = marker_x + OFFSET_RIGHT;
    let mut side = Side::Right;
    if left + TOOLTIP_WIDTH > container_w {
        left = marker_x - TOOLTIP_WIDTH - FLIP_GAP;
        side = Side::Left;
    }

    let mut top = marker_y - OFFSET_UP;
    if top + TOOLTIP_HEIGHT > container_h {
        top = container_h - TOOLTIP_HEIGHT - BOTTOM_MARGIN;
    }
    // Floor applied last: on very short containers it wins over the bottom clamp
    if top < MIN_TOP {
        top = MIN_TOP;
    }

    Placement { left, top, side }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure rendering: `(phase, config, style, anchor, metrics) -> TooltipTree`.
//!
//! [`render`] has no side effects and depends only on its arguments, so the
//! host can call it on every state change and the output can be compared
//! directly in tests.

use kurbo::{Point, Rect, Size, Vec2};
use understory_bubble::Bubble;

use crate::text::{TextLayout, TextMeasurer, layout_text};
use crate::{Color, Font, Shadow, TooltipConfig, TooltipPhase, TooltipStyle, Transition};

/// Everything the host needs to draw one decorated view.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipTree {
    /// Bounds of the anchor, unchanged: the tooltip never affects its layout.
    pub anchor: Rect,
    /// The bubble, present iff the tooltip is shown.
    pub overlay: Option<BubbleOverlay>,
}

/// The floating bubble and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleOverlay {
    /// Final bubble frame, in the anchor's coordinate space.
    pub frame: Rect,
    /// Shift that was applied to the top-aligned frame to lift it.
    pub offset: Vec2,
    /// Bubble outline filling `frame`.
    pub bubble: Bubble,
    /// Bubble fill.
    pub fill: Color,
    /// Drop shadow under the bubble.
    pub shadow: Shadow,
    /// Centered label.
    pub label: Label,
    /// Enter/exit transition for the host to run.
    pub transition: Transition,
}

impl BubbleOverlay {
    /// Region the overlay may paint, shadow included.
    pub fn paint_bounds(&self) -> Rect {
        let blur = self.shadow.blur_radius.max(0.0);
        let shadow = (self.frame + self.shadow.offset).inflate(blur, blur);
        self.frame.union(shadow)
    }
}

/// Laid-out text placed inside the bubble.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Top-left of the text block.
    pub origin: Point,
    /// Lines, positioned relative to `origin`.
    pub layout: TextLayout,
    /// Font.
    pub font: Font,
    /// Text color.
    pub color: Color,
}

/// Render a tooltip attached to an anchor with bounds `anchor`.
///
/// When shown, the label is padded by `padding_horizontal` on both sides,
/// `padding_vertical` on top, and `padding_vertical` plus half the tail size
/// at the bottom. The bubble exactly fills that padded block. The block is
/// centered horizontally on the anchor with its top on the anchor's top edge,
/// then lifted by [`TooltipStyle::lift`].
pub fn render<M: TextMeasurer + ?Sized>(
    phase: TooltipPhase,
    config: &TooltipConfig,
    style: &TooltipStyle,
    anchor: Rect,
    measurer: &M,
) -> TooltipTree {
    let overlay = match phase {
        TooltipPhase::Hidden => None,
        TooltipPhase::Shown => Some(overlay(config, style, anchor, measurer)),
    };
    TooltipTree { anchor, overlay }
}

fn overlay<M: TextMeasurer + ?Sized>(
    config: &TooltipConfig,
    style: &TooltipStyle,
    anchor: Rect,
    measurer: &M,
) -> BubbleOverlay {
    let layout = layout_text(&config.text, &style.font, style.max_text_width, measurer);
    let size = Size::new(
        layout.size.width + 2.0 * style.padding_horizontal,
        layout.size.height + 2.0 * style.padding_vertical + style.tail_allowance(),
    );

    let offset = style.lift();
    let aligned = Point::new(anchor.center().x - size.width / 2.0, anchor.y0);
    let frame = Rect::from_origin_size(aligned + offset, size);

    BubbleOverlay {
        frame,
        offset,
        bubble: style.bubble.geometry(frame),
        fill: config.background_color,
        shadow: style.shadow,
        label: Label {
            origin: frame.origin() + Vec2::new(style.padding_horizontal, style.padding_vertical),
            layout,
            font: style.font,
            color: config.text_color,
        },
        transition: style.transition,
    }
}

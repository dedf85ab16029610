// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and presentation constants for the tooltip bubble.
//!
//! Everything here is plain data. The host owns fonts, shadows, and animation
//! curves; these types only describe what the host should apply.

use kurbo::Vec2;
use understory_bubble::BubbleShape;

use crate::Color;

/// Font weight on the usual 100–900 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Regular (400).
    pub const REGULAR: Self = Self(400);
    /// Medium (500).
    pub const MEDIUM: Self = Self(500);
    /// Semibold (600).
    pub const SEMIBOLD: Self = Self(600);
    /// Bold (700).
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

/// System font request: a point size and a weight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Size in points.
    pub size: f64,
    /// Weight.
    pub weight: FontWeight,
}

impl Font {
    /// Font used for tooltip text: 14pt medium.
    pub const TOOLTIP: Self = Self {
        size: 14.0,
        weight: FontWeight::MEDIUM,
    };
}

impl Default for Font {
    fn default() -> Self {
        Self::TOOLTIP
    }
}

/// Drop shadow drawn under the bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// Shadow color, including its opacity.
    pub color: Color,
    /// Blur radius.
    pub blur_radius: f64,
    /// Offset of the shadow relative to the bubble.
    pub offset: Vec2,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK.with_alpha(0.2),
            blur_radius: 6.0,
            offset: Vec2::new(0.0, 4.0),
        }
    }
}

/// How the bubble enters and leaves: an opacity fade combined with a scale.
///
/// On insertion the bubble goes from transparent at `scale_from` to opaque at
/// full size; removal runs the same transition backwards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Fade opacity between 0 and 1.
    pub fade: bool,
    /// Scale of the bubble at the hidden end of the transition.
    pub scale_from: f64,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            fade: true,
            scale_from: 0.95,
        }
    }
}

/// Timing curve the host should use when animating a phase change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Animation {
    /// Apply the change without animating.
    Immediate,
    /// Spring-like easing.
    Spring {
        /// Approximate settle time in seconds.
        response: f64,
        /// Damping ratio; 1.0 is critically damped.
        damping_fraction: f64,
    },
}

impl Default for Animation {
    fn default() -> Self {
        Self::Spring {
            response: 0.35,
            damping_fraction: 0.7,
        }
    }
}

/// Layout constants for a tooltip.
///
/// The defaults produce a 14pt medium label padded 12 horizontally and 8
/// vertically, in a bubble with 8-unit corners and an 8-unit tail, floating 20
/// units above the anchor's top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipStyle {
    /// Font of the label.
    pub font: Font,
    /// Padding left and right of the text.
    pub padding_horizontal: f64,
    /// Padding above and below the text, before the tail allowance.
    pub padding_vertical: f64,
    /// Corner radius and tail size of the bubble.
    pub bubble: BubbleShape,
    /// Gap between the anchor's top edge and the lifted bubble.
    pub vertical_gap: f64,
    /// Wrap width for the label. `None` sizes the bubble to the unwrapped text.
    pub max_text_width: Option<f64>,
    /// Drop shadow under the bubble.
    pub shadow: Shadow,
    /// Enter/exit transition.
    pub transition: Transition,
    /// Timing of phase changes.
    pub animation: Animation,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            font: Font::TOOLTIP,
            padding_horizontal: 12.0,
            padding_vertical: 8.0,
            bubble: BubbleShape::default(),
            vertical_gap: 20.0,
            max_text_width: None,
            shadow: Shadow::default(),
            transition: Transition::default(),
            animation: Animation::default(),
        }
    }
}

impl TooltipStyle {
    /// Return a copy with a different tail size.
    #[must_use]
    pub const fn with_tail_size(mut self, tail_size: f64) -> Self {
        self.bubble.tail_size = tail_size;
        self
    }

    /// Return a copy with a different vertical gap.
    #[must_use]
    pub const fn with_vertical_gap(mut self, vertical_gap: f64) -> Self {
        self.vertical_gap = vertical_gap;
        self
    }

    /// Return a copy that wraps text at `width`.
    #[must_use]
    pub const fn with_max_text_width(mut self, width: f64) -> Self {
        self.max_text_width = Some(width);
        self
    }

    /// Return a copy with a different animation.
    #[must_use]
    pub const fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// Extra bottom padding so the text sits in the body rather than over the tail.
    ///
    /// Based on the tail size actually drawn, so a negative or NaN tail counts as zero.
    pub fn tail_allowance(&self) -> f64 {
        self.bubble.effective_tail_size() / 2.0
    }

    /// Shift applied to the top-aligned bubble to lift it above the anchor.
    pub fn lift(&self) -> Vec2 {
        Vec2::new(0.0, -(self.vertical_gap + self.tail_allowance()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lift_is_gap_plus_half_tail() {
        let style = TooltipStyle::default();
        assert_eq!(style.lift(), Vec2::new(0.0, -24.0));
    }

    #[test]
    fn lift_follows_tail_and_gap() {
        let style = TooltipStyle::default()
            .with_tail_size(12.0)
            .with_vertical_gap(10.0);
        assert_eq!(style.tail_allowance(), 6.0);
        assert_eq!(style.lift().y, -16.0);
    }

    #[test]
    fn degenerate_tail_sizes_lift_by_gap_only() {
        for tail in [f64::NAN, -8.0] {
            let style = TooltipStyle::default()
                .with_tail_size(tail)
                .with_vertical_gap(20.0);
            assert_eq!(style.tail_allowance(), 0.0, "tail {tail}");
            assert_eq!(style.lift(), Vec2::new(0.0, -20.0), "tail {tail}");
        }
    }

    #[test]
    fn default_shadow_and_motion() {
        let style = TooltipStyle::default();
        assert_eq!(style.shadow.color, Color::from_rgba(0.0, 0.0, 0.0, 0.2));
        assert_eq!(style.shadow.blur_radius, 6.0);
        assert_eq!(style.shadow.offset, Vec2::new(0.0, 4.0));
        assert_eq!(style.transition.scale_from, 0.95);
        assert!(style.transition.fade);
        assert_eq!(
            style.animation,
            Animation::Spring {
                response: 0.35,
                damping_fraction: 0.7
            }
        );
    }

    #[test]
    fn default_font_is_14pt_medium() {
        let font = TooltipStyle::default().font;
        assert_eq!(font.size, 14.0);
        assert_eq!(font.weight, FontWeight::MEDIUM);
    }

    #[test]
    fn font_weights_are_ordered() {
        assert!(FontWeight::REGULAR < FontWeight::MEDIUM);
        assert!(FontWeight::MEDIUM < FontWeight::SEMIBOLD);
        assert!(FontWeight::SEMIBOLD < FontWeight::BOLD);
        assert_eq!(FontWeight::BOLD.0, 700);
        assert_eq!(FontWeight::default(), FontWeight::REGULAR);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip instance: a child, its config, and the visibility phase.

use alloc::string::String;

use kurbo::{Point, Rect, Shape};

use crate::render::{TooltipTree, render};
use crate::tap::{PointerId, TapRecognizer, TapResult};
use crate::text::TextMeasurer;
use crate::{Animation, Color, TooltipConfig, TooltipStyle};

/// Visibility phase of a tooltip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipPhase {
    /// Bubble not rendered. Initial phase.
    #[default]
    Hidden,
    /// Bubble rendered above the anchor.
    Shown,
}

impl TooltipPhase {
    /// The other phase.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// Whether the bubble is rendered in this phase.
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Part of a decorated view under a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TooltipPart {
    /// The child the tooltip is attached to.
    Anchor,
    /// The bubble, including its tail.
    Bubble,
}

/// A phase change, with the animation the host should run for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Toggle {
    /// Phase after the change.
    pub phase: TooltipPhase,
    /// How to animate into `phase`.
    pub animation: Animation,
}

/// A child decorated with a tap-to-toggle tooltip.
///
/// The phase starts [`TooltipPhase::Hidden`] and changes only through a
/// recognized tap ([`Tooltip::on_pointer_up`]) or a host-recognized tap
/// ([`Tooltip::tap`]). Dropping the tooltip, or taking the child back with
/// [`Tooltip::into_child`], discards the phase.
#[derive(Clone, Debug)]
pub struct Tooltip<V> {
    child: V,
    config: TooltipConfig,
    style: TooltipStyle,
    phase: TooltipPhase,
    taps: TapRecognizer<TooltipPart>,
}

/// Attach a tooltip showing `text` to `child`, with default colors and style.
///
/// Use [`Tooltip::background_color`] and [`Tooltip::text_color`] to override
/// the colors.
pub fn attach<V>(child: V, text: impl Into<String>) -> Tooltip<V> {
    Tooltip::new(child, TooltipConfig::new(text))
}

impl<V> Tooltip<V> {
    /// Decorate `child` with a tooltip described by `config`.
    pub fn new(child: V, config: TooltipConfig) -> Self {
        Self {
            child,
            config,
            style: TooltipStyle::default(),
            phase: TooltipPhase::Hidden,
            taps: TapRecognizer::new(),
        }
    }

    /// Use a different bubble fill.
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self
    }

    /// Use a different text color.
    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.config.text_color = color;
        self
    }

    /// Use different layout constants.
    #[must_use]
    pub fn with_style(mut self, style: TooltipStyle) -> Self {
        self.style = style;
        self
    }

    /// Use different tap thresholds; see [`TapRecognizer::with_thresholds`].
    #[must_use]
    pub fn with_tap_thresholds(mut self, slop: Option<f64>, max_duration: Option<u64>) -> Self {
        self.taps = TapRecognizer::with_thresholds(slop, max_duration);
        self
    }

    /// The decorated child.
    pub fn child(&self) -> &V {
        &self.child
    }

    /// Mutable access to the decorated child.
    pub fn child_mut(&mut self) -> &mut V {
        &mut self.child
    }

    /// Unmount: discard the tooltip and return the child.
    pub fn into_child(self) -> V {
        self.child
    }

    /// Content and colors.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Layout constants.
    pub fn style(&self) -> &TooltipStyle {
        &self.style
    }

    /// Current phase.
    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    /// Whether the bubble is currently rendered.
    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    /// Toggle the phase in response to a tap the host recognized itself.
    pub fn tap(&mut self) -> Toggle {
        self.phase = self.phase.toggled();
        #[cfg(feature = "tracing")]
        tracing::debug!(phase = ?self.phase, "tooltip toggled");
        Toggle {
            phase: self.phase,
            animation: self.style.animation,
        }
    }

    /// Which part of the decorated view, if any, lies under `pt`.
    ///
    /// The bubble is drawn over the anchor, so it wins where they overlap.
    pub fn hit_test<M: TextMeasurer + ?Sized>(
        &self,
        pt: Point,
        anchor: Rect,
        measurer: &M,
    ) -> Option<TooltipPart> {
        let tree = self.render(anchor, measurer);
        if tree
            .overlay
            .is_some_and(|overlay| overlay.bubble.contains(pt))
        {
            return Some(TooltipPart::Bubble);
        }
        anchor.contains(pt).then_some(TooltipPart::Anchor)
    }

    /// Record a press on part of the decorated view.
    pub fn on_pointer_down(
        &mut self,
        pointer_id: Option<PointerId>,
        target: TooltipPart,
        position: Point,
        timestamp: u64,
    ) {
        self.taps.on_down(pointer_id, target, position, timestamp);
    }

    /// Track pointer movement. Returns true when the press just turned into a drag.
    pub fn on_pointer_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> bool {
        self.taps.on_move(pointer_id, position).is_some()
    }

    /// Process a release over `target` (`None` when off the view).
    ///
    /// Returns the phase change if the release completed a tap.
    pub fn on_pointer_up(
        &mut self,
        pointer_id: Option<PointerId>,
        target: Option<TooltipPart>,
        position: Point,
        timestamp: u64,
    ) -> Option<Toggle> {
        match self
            .taps
            .on_up(pointer_id, target.as_ref(), position, timestamp)
        {
            TapResult::Tap(_) => Some(self.tap()),
            TapResult::Suppressed(_) => None,
        }
    }

    /// Abandon a pointer's press, e.g. when the host cancels the gesture.
    pub fn cancel_pointer(&mut self, pointer_id: Option<PointerId>) -> bool {
        self.taps.cancel(pointer_id)
    }

    /// Describe what to draw for an anchor with bounds `anchor`.
    pub fn render<M: TextMeasurer + ?Sized>(&self, anchor: Rect, measurer: &M) -> TooltipTree {
        render(self.phase, &self.config, &self.style, anchor, measurer)
    }
}

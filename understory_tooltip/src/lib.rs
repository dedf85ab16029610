// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: a tap-to-toggle speech-bubble tooltip.
//!
//! This crate decorates any child value with a tooltip: tapping the child
//! shows a bubble with a message above it, tapping again hides it. It is
//! renderer-agnostic. It decides *what* to draw and *when* to change, and
//! leaves painting, text shaping, and animation interpolation to the host.
//!
//! The pieces are:
//!
//! - [`Tooltip`]: the instance. Owns the child, the [`TooltipConfig`], the
//!   [`TooltipStyle`], and the [`TooltipPhase`] (initially hidden).
//! - [`attach`]: the entry point, `attach(child, text)`, with builder
//!   overrides for the bubble and text colors.
//! - [`tap`]: pointer-level tap recognition. A press on the decorated view
//!   released on the decorated view without dragging is a tap.
//! - [`render()`]: a pure function from phase, config, style, anchor bounds,
//!   and text metrics to a [`TooltipTree`]. The tree carries the bubble
//!   geometry (an [`understory_bubble::Bubble`]), fill, shadow, laid-out
//!   label, and the enter/exit [`Transition`].
//! - [`TextMeasurer`]: the seam through which the host supplies text metrics.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_tooltip::{Color, FixedAdvanceMeasurer, TooltipPart, TooltipPhase, attach};
//!
//! let anchor = Rect::new(100.0, 200.0, 180.0, 240.0);
//! let metrics = FixedAdvanceMeasurer::default();
//! let mut tip = attach("save-button", "Saves the document").text_color(Color::WHITE);
//!
//! // Nothing is drawn until the anchor is tapped.
//! assert!(tip.render(anchor, &metrics).overlay.is_none());
//!
//! let pt = Point::new(140.0, 220.0);
//! let part = tip.hit_test(pt, anchor, &metrics);
//! assert_eq!(part, Some(TooltipPart::Anchor));
//! tip.on_pointer_down(None, TooltipPart::Anchor, pt, 0);
//! let toggle = tip.on_pointer_up(None, part, pt, 80).expect("a tap");
//! assert_eq!(toggle.phase, TooltipPhase::Shown);
//!
//! // The bubble floats above the anchor, lifted by gap + tail / 2.
//! let overlay = tip.render(anchor, &metrics).overlay.expect("shown");
//! assert_eq!(overlay.offset.y, -24.0);
//! assert_eq!(overlay.frame.y0, anchor.y0 - 24.0);
//! ```
//!
//! ## Layout
//!
//! With the default [`TooltipStyle`], the label is 14pt medium, padded 12
//! units horizontally and 8 vertically, plus half the tail size below so the
//! text sits in the body rather than over the tail. The bubble is exactly the
//! size of the padded label. It is centered on the anchor, top-aligned with
//! it, then lifted by `vertical_gap + tail_size / 2` (20 + 4 by default). A
//! 20% black shadow with a 6-unit blur, offset 4 units down, goes under it.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` float math through `kurbo`.
//! - `tracing`: emits `tracing` events for toggles and suppressed taps.
//! - `serde`: `Serialize`/`Deserialize` for configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod config;
mod render;
mod style;
pub mod tap;
mod text;
mod tooltip;

pub use color::Color;
pub use config::TooltipConfig;
pub use render::{BubbleOverlay, Label, TooltipTree, render};
pub use style::{Animation, Font, FontWeight, Shadow, TooltipStyle, Transition};
pub use text::{FixedAdvanceMeasurer, TextLayout, TextLine, TextMeasurer, layout_text};
pub use tooltip::{Toggle, Tooltip, TooltipPart, TooltipPhase, attach};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal RGBA color value.

/// Straight-alpha RGBA color with components in `0.0..=1.0`.
///
/// Components are not clamped; out-of-range values are handed to the renderer
/// as given.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha (opacity).
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba(0.0, 0.0, 0.0, 0.0);

    /// Near-black used as the default tooltip background.
    pub const TOOLTIP_BACKGROUND: Self = Self::from_rgb(0.15, 0.15, 0.15);

    /// Opaque color from red, green, and blue.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from red, green, blue, and alpha.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced by `a`.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::BLACK.with_alpha(0.2);
        assert_eq!(c, Color::from_rgba(0.0, 0.0, 0.0, 0.2));
    }

    #[test]
    fn tooltip_background_is_opaque_near_black() {
        let c = Color::TOOLTIP_BACKGROUND;
        assert_eq!((c.r, c.g, c.b, c.a), (0.15, 0.15, 0.15, 1.0));
    }

    #[test]
    fn zero_alpha_is_transparent() {
        assert_eq!(Color::BLACK.with_alpha(0.0), Color::TRANSPARENT);
        assert_eq!(Color::TRANSPARENT.a, 0.0);
    }
}

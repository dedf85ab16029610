// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied tooltip content and colors.

use alloc::string::String;

use crate::Color;

/// What a tooltip says and how it is colored.
///
/// Supplied once when the tooltip is attached and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipConfig {
    /// Message shown in the bubble. May contain `\n` line breaks.
    pub text: String,
    /// Fill of the bubble.
    pub background_color: Color,
    /// Color of the message.
    pub text_color: Color,
}

impl TooltipConfig {
    /// Config with the given text and default colors: near-black bubble, white text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            background_color: Color::TOOLTIP_BACKGROUND,
            text_color: Color::WHITE,
        }
    }

    /// Return a copy with a different bubble fill.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Return a copy with a different text color.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_colors() {
        let config = TooltipConfig::new("Hello");
        assert_eq!(config.text, "Hello");
        assert_eq!(config.background_color, Color::from_rgb(0.15, 0.15, 0.15));
        assert_eq!(config.text_color, Color::WHITE);
    }

    #[test]
    fn overrides_replace_only_their_color() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let config = TooltipConfig::new("x").with_background_color(red);
        assert_eq!(config.background_color, red);
        assert_eq!(config.text_color, Color::WHITE);
    }
}

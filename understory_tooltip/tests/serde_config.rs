// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration round trips through JSON with the `serde` feature.

#![cfg(feature = "serde")]

use understory_tooltip::{Color, TooltipConfig, TooltipStyle};

#[test]
fn config_from_json_keeps_colors() {
    let json = r#"{
        "text": "Hello",
        "background_color": { "r": 0.15, "g": 0.15, "b": 0.15, "a": 1.0 },
        "text_color": { "r": 1.0, "g": 1.0, "b": 1.0, "a": 1.0 }
    }"#;
    let config: TooltipConfig = serde_json::from_str(json).expect("valid config");
    assert_eq!(config, TooltipConfig::new("Hello"));
    assert_eq!(config.text_color, Color::WHITE);
}

#[test]
fn default_style_survives_json() {
    let style = TooltipStyle::default();
    let json = serde_json::to_string(&style).expect("serializable");
    let back: TooltipStyle = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, style);
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label layout: line breaking and centering on top of host-provided metrics.
//!
//! This module does not shape text. Hosts implement [`TextMeasurer`] with
//! their own font stack; [`FixedAdvanceMeasurer`] is a rough stand-in for
//! tests and for hosts without shaping.

use alloc::string::String;

use kurbo::{Point, Size};
use smallvec::SmallVec;

use crate::Font;

/// Source of text metrics.
pub trait TextMeasurer {
    /// Advance width of `text` laid out on a single line.
    fn line_width(&self, text: &str, font: &Font) -> f64;

    /// Distance between consecutive lines.
    fn line_height(&self, font: &Font) -> f64;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn line_width(&self, text: &str, font: &Font) -> f64 {
        (**self).line_width(text, font)
    }

    fn line_height(&self, font: &Font) -> f64 {
        (**self).line_height(font)
    }
}

/// Every character advances by the same fraction of the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance per character, in ems.
    pub advance_em: f64,
    /// Line height, in ems.
    pub line_height_em: f64,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_em: 0.5,
            line_height_em: 1.2,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn line_width(&self, text: &str, font: &Font) -> f64 {
        text.chars().count() as f64 * self.advance_em * font.size
    }

    fn line_height(&self, font: &Font) -> f64 {
        self.line_height_em * font.size
    }
}

/// One laid-out line.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// Text of the line, without the break that ended it.
    pub text: String,
    /// Measured advance width.
    pub width: f64,
    /// Top-left of the line relative to the text block. Lines are centered.
    pub origin: Point,
}

/// A label broken into centered lines.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    /// Lines in reading order. Never empty; empty text yields one empty line.
    pub lines: SmallVec<[TextLine; 1]>,
    /// Size of the block: widest line by total line height.
    pub size: Size,
}

/// Break `text` into lines and center them.
///
/// Lines break at every `\n` or `\r\n`; a trailing break adds an empty line.
/// With `max_width`, a paragraph wider than the limit is wrapped greedily at
/// whitespace, and the whitespace runs it breaks at are collapsed to single
/// spaces. Paragraphs that fit are kept exactly as written, so both modes
/// measure them the same. A single word wider than `max_width` keeps a line
/// of its own rather than being split.
pub fn layout_text<M: TextMeasurer + ?Sized>(
    text: &str,
    font: &Font,
    max_width: Option<f64>,
    measurer: &M,
) -> TextLayout {
    let mut raw: SmallVec<[(String, f64); 1]> = SmallVec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        let width = measurer.line_width(paragraph, font);
        match max_width {
            Some(limit) if width > limit => {
                wrap_paragraph(paragraph, font, limit, measurer, &mut raw);
            }
            _ => raw.push((String::from(paragraph), width)),
        }
    }

    let line_height = measurer.line_height(font).max(0.0);
    let block_width = raw.iter().fold(0.0_f64, |acc, (_, w)| acc.max(*w));
    let lines: SmallVec<[TextLine; 1]> = raw
        .into_iter()
        .enumerate()
        .map(|(i, (text, width))| TextLine {
            origin: Point::new((block_width - width) / 2.0, i as f64 * line_height),
            text,
            width,
        })
        .collect();
    let size = Size::new(block_width, lines.len() as f64 * line_height);
    TextLayout { lines, size }
}

fn wrap_paragraph<M: TextMeasurer + ?Sized>(
    paragraph: &str,
    font: &Font,
    limit: f64,
    measurer: &M,
    out: &mut SmallVec<[(String, f64); 1]>,
) {
    let mut current = String::new();
    let mut current_width = 0.0;
    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            current_width = measurer.line_width(&current, font);
            continue;
        }
        let mut candidate = current.clone();
        candidate.push(' ');
        candidate.push_str(word);
        let candidate_width = measurer.line_width(&candidate, font);
        if candidate_width <= limit {
            current = candidate;
            current_width = candidate_width;
        } else {
            out.push((core::mem::take(&mut current), current_width));
            current.push_str(word);
            current_width = measurer.line_width(&current, font);
        }
    }
    out.push((current, current_width));
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition for a single decorated view.
//!
//! A tap is a press that starts on the view and is released on the view
//! without the pointer travelling far. The view may be made of several parts
//! (for a tooltip: the anchor and the bubble floating above it); a press on
//! one part released on another still counts, since both belong to the same
//! view.
//!
//! ## Usage
//!
//! ```
//! use understory_tooltip::tap::{TapRecognizer, TapResult};
//! use kurbo::Point;
//!
//! let mut taps: TapRecognizer<&str> = TapRecognizer::new();
//!
//! taps.on_down(None, "anchor", Point::new(10.0, 10.0), 1000);
//! let result = taps.on_up(None, Some(&"anchor"), Point::new(12.0, 11.0), 1080);
//! assert_eq!(result, TapResult::Tap("anchor"));
//!
//! // Dragging past the slop distance is not a tap.
//! taps.on_down(None, "anchor", Point::new(10.0, 10.0), 2000);
//! assert_eq!(taps.on_move(None, Point::new(40.0, 10.0)), Some("anchor"));
//! let result = taps.on_up(None, Some(&"anchor"), Point::new(10.0, 10.0), 2100);
//! assert_eq!(result, TapResult::Suppressed(Some("anchor")));
//! ```
//!
//! ## Tap rules
//!
//! 1. **No active press**: no tap.
//! 2. **Released off the view** (`None` target): no tap.
//! 3. **Slop exceeded**: if any `on_move` or the release position is farther
//!    than `slop` from the press position, no tap.
//! 4. **Held too long**: if `max_duration` is configured and exceeded, no tap.
//! 5. Otherwise the tap is reported on the part that was pressed.
//!
//! Each pointer is tracked independently.

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;
use kurbo::Point;

/// Pointer identifier for tracking concurrent presses.
pub type PointerId = NonZeroU64;

/// Pointer used when the caller does not distinguish pointers.
const DEFAULT_POINTER: PointerId = NonZeroU64::MIN;

/// Default slop distance, in local units.
pub const DEFAULT_SLOP: f64 = 10.0;

/// Tap gesture state machine.
#[derive(Clone, Debug)]
pub struct TapRecognizer<K> {
    /// Active presses per pointer
    presses: BTreeMap<PointerId, Press<K>>,
    /// Distance the pointer may travel from the press position, or None for unlimited
    pub slop: Option<f64>,
    /// Longest press that still counts as a tap (milliseconds), or None for unlimited
    pub max_duration: Option<u64>,
}

/// State for an active pointer press.
#[derive(Clone, Debug)]
pub struct Press<K> {
    /// Part of the view that was pressed
    pub target: K,
    /// Pointer position at press time
    pub down_position: Point,
    /// Timestamp when press occurred
    pub down_time: u64,
    /// True once the pointer has moved beyond the slop distance
    pub slop_exceeded: bool,
}

/// Result of a pointer release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapResult<K> {
    /// A tap on the part that was pressed.
    Tap(K),
    /// Not a tap. Contains the pressed part if the pointer had an active press.
    Suppressed(Option<K>),
}

impl<K: Clone> TapRecognizer<K> {
    /// Create a recognizer with a [`DEFAULT_SLOP`] distance and no duration limit.
    pub fn new() -> Self {
        Self::with_thresholds(Some(DEFAULT_SLOP), None)
    }

    /// Create a recognizer with custom thresholds.
    ///
    /// # Arguments
    /// * `slop` - Distance the pointer may travel and still tap, or None for unlimited
    /// * `max_duration` - Longest press in milliseconds that still taps, or None for unlimited
    pub fn with_thresholds(slop: Option<f64>, max_duration: Option<u64>) -> Self {
        Self {
            presses: BTreeMap::new(),
            slop,
            max_duration,
        }
    }

    /// Record a press on `target`.
    ///
    /// A second press from the same pointer replaces the first.
    pub fn on_down(
        &mut self,
        pointer_id: Option<PointerId>,
        target: K,
        position: Point,
        timestamp: u64,
    ) {
        let press = Press {
            target,
            down_position: position,
            down_time: timestamp,
            slop_exceeded: false,
        };
        self.presses
            .insert(pointer_id.unwrap_or(DEFAULT_POINTER), press);
    }

    /// Track pointer movement during a press.
    ///
    /// Returns `Some(target)` the first time the pointer leaves the slop
    /// distance, `None` otherwise.
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<K> {
        let press = self
            .presses
            .get_mut(&pointer_id.unwrap_or(DEFAULT_POINTER))?;
        if press.slop_exceeded {
            return None;
        }
        let slop = self.slop?;
        if press.down_position.distance(position) > slop {
            press.slop_exceeded = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(slop, "press left the slop distance");
            return Some(press.target.clone());
        }
        None
    }

    /// Process a release and decide whether it completes a tap.
    ///
    /// # Arguments
    /// * `pointer_id` - Pointer identifier, defaults to the primary pointer if None
    /// * `current_target` - Part of the view under the release, or None if off the view
    /// * `position` - Pointer position at release time
    /// * `timestamp` - Event timestamp in milliseconds
    pub fn on_up(
        &mut self,
        pointer_id: Option<PointerId>,
        current_target: Option<&K>,
        position: Point,
        timestamp: u64,
    ) -> TapResult<K> {
        let Some(press) = self.presses.remove(&pointer_id.unwrap_or(DEFAULT_POINTER)) else {
            return TapResult::Suppressed(None);
        };

        if current_target.is_none() {
            #[cfg(feature = "tracing")]
            tracing::trace!("tap suppressed: released off the view");
            return TapResult::Suppressed(Some(press.target));
        }

        let moved_too_far = press.slop_exceeded
            || self
                .slop
                .is_some_and(|slop| press.down_position.distance(position) > slop);
        if moved_too_far {
            #[cfg(feature = "tracing")]
            tracing::trace!("tap suppressed: moved beyond slop");
            return TapResult::Suppressed(Some(press.target));
        }

        let held = timestamp.saturating_sub(press.down_time);
        if self.max_duration.is_some_and(|max| held > max) {
            #[cfg(feature = "tracing")]
            tracing::trace!(held, "tap suppressed: held too long");
            return TapResult::Suppressed(Some(press.target));
        }

        TapResult::Tap(press.target)
    }

    /// Forget the press of one pointer. Returns true if there was one.
    pub fn cancel(&mut self, pointer_id: Option<PointerId>) -> bool {
        self.presses
            .remove(&pointer_id.unwrap_or(DEFAULT_POINTER))
            .is_some()
    }

    /// Whether the pointer currently has an active press.
    pub fn is_pressed(&self, pointer_id: Option<PointerId>) -> bool {
        self.presses
            .contains_key(&pointer_id.unwrap_or(DEFAULT_POINTER))
    }

    /// Forget all presses.
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    /// Active press of a pointer, if any.
    pub fn get_press(&self, pointer_id: PointerId) -> Option<&Press<K>> {
        self.presses.get(&pointer_id)
    }
}

impl<K: Clone> Default for TapRecognizer<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: u64) -> Option<PointerId> {
        NonZeroU64::new(n)
    }

    #[test]
    fn press_and_release_in_place_taps() {
        let mut taps = TapRecognizer::new();
        taps.on_down(None, 1_u32, Point::new(0.0, 0.0), 0);
        assert_eq!(
            taps.on_up(None, Some(&1), Point::new(1.0, 1.0), 50),
            TapResult::Tap(1)
        );
        assert!(!taps.is_pressed(None));
    }

    #[test]
    fn release_on_other_part_still_taps() {
        let mut taps = TapRecognizer::new();
        taps.on_down(None, 1_u32, Point::new(0.0, 0.0), 0);
        assert_eq!(
            taps.on_up(None, Some(&2), Point::new(3.0, 0.0), 50),
            TapResult::Tap(1)
        );
    }

    #[test]
    fn release_off_view_is_suppressed() {
        let mut taps = TapRecognizer::new();
        taps.on_down(None, 1_u32, Point::new(0.0, 0.0), 0);
        assert_eq!(
            taps.on_up(None, None, Point::new(1.0, 0.0), 50),
            TapResult::Suppressed(Some(1))
        );
    }

    #[test]
    fn no_active_press_is_suppressed() {
        let mut taps: TapRecognizer<u32> = TapRecognizer::new();
        assert_eq!(
            taps.on_up(None, Some(&1), Point::ZERO, 0),
            TapResult::Suppressed(None)
        );
    }

    #[test]
    fn release_beyond_slop_is_suppressed() {
        let mut taps = TapRecognizer::new();
        taps.on_down(None, 1_u32, Point::new(0.0, 0.0), 0);
        assert_eq!(
            taps.on_up(None, Some(&1), Point::new(11.0, 0.0), 50),
            TapResult::Suppressed(Some(1))
        );
    }

    #[test]
    fn release_exactly_at_slop_taps() {
        let mut taps = TapRecognizer::new();
        taps.on_down(None, 1_u32, Point::new(0.0, 0.0), 0);
        assert_eq!(
            taps.on_up(None, Some(&1), Point::new(10.0, 0.0), 50),
            TapResult::Tap(1)
        );
    }

    #[test]
    fn wandering_out_and_back_is_suppressed() {
        let mut taps = TapRecognizer::new();
        taps.on_down(None, 1_u32, Point::new(0.0, 0.0), 0);
        assert_eq!(taps.on_move(None, Point::new(5.0, 0.0)), None);
        assert_eq!(taps.on_move(None, Point::new(30.0, 0.0)), Some(1));
        // Only reported once.
        assert_eq!(taps.on_move(None, Point::new(40.0, 0.0)), None);
        assert_eq!(
            taps.on_up(None, Some(&1), Point::new(0.0, 0.0), 50),
            TapResult::Suppressed(Some(1))
        );
    }

    #[test]
    fn unlimited_slop_ignores_movement() {
        let mut taps = TapRecognizer::with_thresholds(None, None);
        taps.on_down(None, 1_u32, Point::new(0.0, 0.0), 0);
        assert_eq!(taps.on_move(None, Point::new(500.0, 0.0)), None);
        assert_eq!(
            taps.on_up(None, Some(&1), Point::new(500.0, 0.0), 50),
            TapResult::Tap(1)
        );
    }

    #[test]
    fn long_press_is_suppressed_when_limited() {
        let mut taps = TapRecognizer::with_thresholds(Some(DEFAULT_SLOP), Some(500));
        taps.on_down(None, 1_u32, Point::ZERO, 1000);
        assert_eq!(
            taps.on_up(None, Some(&1), Point::ZERO, 1500),
            TapResult::Tap(1)
        );
        taps.on_down(None, 1_u32, Point::ZERO, 2000);
        assert_eq!(
            taps.on_up(None, Some(&1), Point::ZERO, 2501),
            TapResult::Suppressed(Some(1))
        );
    }

    #[test]
    fn pointers_are_independent() {
        let mut taps = TapRecognizer::new();
        taps.on_down(pid(1), 1_u32, Point::new(0.0, 0.0), 0);
        taps.on_down(pid(2), 2_u32, Point::new(100.0, 0.0), 10);

        assert_eq!(taps.on_move(pid(2), Point::new(150.0, 0.0)), Some(2));
        assert_eq!(
            taps.on_up(pid(1), Some(&1), Point::new(0.0, 0.0), 20),
            TapResult::Tap(1)
        );
        assert_eq!(
            taps.on_up(pid(2), Some(&2), Point::new(100.0, 0.0), 30),
            TapResult::Suppressed(Some(2))
        );
    }

    #[test]
    fn cancel_and_clear_forget_presses() {
        let mut taps = TapRecognizer::new();
        taps.on_down(pid(1), 1_u32, Point::ZERO, 0);
        taps.on_down(pid(2), 2_u32, Point::ZERO, 0);
        assert!(taps.cancel(pid(1)));
        assert!(!taps.cancel(pid(1)));
        assert!(taps.get_press(NonZeroU64::MIN.saturating_add(1)).is_some());
        taps.clear();
        assert!(!taps.is_pressed(pid(2)));
        assert_eq!(
            taps.on_up(pid(2), Some(&2), Point::ZERO, 10),
            TapResult::Suppressed(None)
        );
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-to-toggle tooltip driven by raw pointer events.
//!
//! This example shows how to combine:
//! - `understory_tooltip` for hit testing, tap recognition, and rendering,
//! - `understory_bubble` for the bubble outline a renderer would fill.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example tooltip_tap`

use kurbo::{PathEl, Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_bubble::DEFAULT_TOLERANCE;
use understory_tooltip::{Color, FixedAdvanceMeasurer, Tooltip, TooltipTree, attach};

/// A stand-in for a host widget.
#[derive(Debug)]
struct Button {
    label: &'static str,
    bounds: Rect,
}

/// Pointer event as a host would deliver it.
#[derive(Clone, Copy, Debug)]
enum Pointer {
    Down(Point, u64),
    Move(Point),
    Up(Point, u64),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let metrics = FixedAdvanceMeasurer::default();
    let button = Button {
        label: "Save",
        bounds: Rect::new(120.0, 200.0, 200.0, 236.0),
    };
    let mut tip = attach(button, "Saves the current document")
        .background_color(Color::from_rgb(0.1, 0.2, 0.35));

    let script = [
        // Tap the button: shows the bubble.
        Pointer::Down(Point::new(160.0, 220.0), 0),
        Pointer::Up(Point::new(161.0, 221.0), 90),
        // Drag across the button: not a tap.
        Pointer::Down(Point::new(130.0, 220.0), 500),
        Pointer::Move(Point::new(190.0, 220.0)),
        Pointer::Up(Point::new(190.0, 220.0), 700),
        // Tap the bubble itself: hides it.
        Pointer::Down(Point::new(160.0, 180.0), 1000),
        Pointer::Up(Point::new(160.0, 180.0), 1060),
    ];

    describe(&tip.render(tip.child().bounds, &metrics));
    for event in script {
        dispatch(&mut tip, event, &metrics);
    }
}

fn dispatch(tip: &mut Tooltip<Button>, event: Pointer, metrics: &FixedAdvanceMeasurer) {
    let anchor = tip.child().bounds;
    match event {
        Pointer::Down(pt, time) => {
            if let Some(part) = tip.hit_test(pt, anchor, metrics) {
                println!("down on {part:?} at {pt:?}");
                tip.on_pointer_down(None, part, pt, time);
            }
        }
        Pointer::Move(pt) => {
            if tip.on_pointer_move(None, pt) {
                println!("press on {:?} became a drag", tip.child().label);
            }
        }
        Pointer::Up(pt, time) => {
            let part = tip.hit_test(pt, anchor, metrics);
            match tip.on_pointer_up(None, part, pt, time) {
                Some(toggle) => {
                    println!("tap -> {:?} ({:?})", toggle.phase, toggle.animation);
                    describe(&tip.render(anchor, metrics));
                }
                None => println!("release at {pt:?}: no tap"),
            }
        }
    }
}

fn describe(tree: &TooltipTree) {
    let Some(overlay) = &tree.overlay else {
        println!("  anchor {:?}, no bubble", tree.anchor);
        return;
    };
    println!("  anchor {:?}", tree.anchor);
    println!(
        "  bubble {:?} (lifted by {:?}), fill {:?}",
        overlay.frame, overlay.offset, overlay.fill
    );
    println!("  tail apex {:?}", overlay.bubble.tail_apex());
    for line in &overlay.label.layout.lines {
        println!(
            "  text {:?} at {:?}",
            line.text,
            overlay.label.origin + line.origin.to_vec2()
        );
    }
    let path = kurbo::Shape::to_path(&overlay.bubble, DEFAULT_TOLERANCE);
    let subpaths = path
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::ClosePath))
        .count();
    println!(
        "  outline: {} elements in {subpaths} subpaths",
        path.elements().len()
    );
}

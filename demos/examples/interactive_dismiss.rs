// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted walkthrough of an interactive keyboard dismissal.
//!
//! A fake host plays the role of the platform: it delivers the keyboard
//! notifications, forwards a drag gesture, and lets the controller drive a
//! printing delegate plus the layout guide.
//!
//! Run:
//! - `cargo run -p gangway_demos --example interactive_dismiss`

use gangway_animation::AnimationSpec;
use gangway_controller::{
    AccessoryController, AccessoryDelegate, Behaviours, HostEnv, OwnershipMode, PointerPhase,
    RecognizerId,
};
use gangway_notify::{Notification, Payload, Value, keys, names};
use kurbo::{Point, Rect, Size};

const WINDOW: Rect = Rect::new(0.0, 0.0, 390.0, 844.0);

/// Host with one focusable composer (element 1) above an inverted timeline.
struct DemoHost {
    focused: Option<u32>,
}

impl HostEnv<u32> for DemoHost {
    fn window_bounds(&self) -> Option<Rect> {
        Some(WINDOW)
    }

    fn accessory_size(&self) -> Size {
        Size::new(390.0, 56.0)
    }

    fn is_focused(&self, element: u32) -> bool {
        self.focused == Some(element)
    }

    fn current_focus(&self) -> Option<u32> {
        self.focused
    }

    fn interactive_dismiss_enabled(&self) -> bool {
        true
    }

    fn stop_scrolling(&mut self) {
        println!("host: scroll settled");
    }

    fn reload_input_views(&mut self) -> Vec<Notification<'static>> {
        Vec::new()
    }

    fn owner_bounds(&self) -> Option<Rect> {
        Some(WINDOW)
    }

    fn bottom_safe_inset(&self) -> f64 {
        34.0
    }
}

struct PrintingBar;

impl AccessoryDelegate<u32> for PrintingBar {
    fn update_accessory_view(
        &mut self,
        frame: Rect,
        adjust_content_offset: bool,
        animation: Option<&AnimationSpec>,
    ) {
        match animation {
            Some(a) => println!(
                "bar: move to y={:.1} over {:.3}s ({:?}) adjust={adjust_content_offset}",
                frame.min_y(),
                a.duration,
                a.curve
            ),
            None => println!(
                "bar: jump to y={:.1} adjust={adjust_content_offset}",
                frame.min_y()
            ),
        }
    }
}

fn keyboard_note(name: &'static str, end: Rect) -> Notification<'static> {
    Notification {
        name,
        payload: Payload::new()
            .with(
                keys::FRAME_BEGIN,
                Value::Rect(Rect::new(0.0, 844.0, 390.0, 1104.0)),
            )
            .with(keys::FRAME_END, Value::Rect(end))
            .with(keys::ANIMATION_CURVE, Value::Number(7.0))
            .with(keys::ANIMATION_DURATION, Value::Number(0.25)),
    }
}

fn main() {
    let mut controller = AccessoryController::new(
        DemoHost { focused: Some(1) },
        PrintingBar,
        1,
        OwnershipMode::Strict,
        Behaviours::ADJUST_CONTENT_OFFSET,
        RecognizerId(1),
    );

    // The composer gains focus and a 260-point keyboard slides in.
    let docked = Rect::new(0.0, 584.0, 390.0, 844.0);
    controller.handle_notification(&keyboard_note(names::WILL_SHOW, docked));
    controller.handle_notification(&keyboard_note(names::DID_SHOW, docked));
    println!(
        "status: {:?}, guide height: {:.1}",
        controller.status(),
        controller.guide().length()
    );

    // The user grabs the timeline and drags the keyboard downward.
    assert!(controller.should_begin());
    for y in [600.0, 660.0, 720.0] {
        controller.on_pointer(PointerPhase::Changed, Point::new(195.0, y));
    }

    // Release: the platform snaps the keyboard off-screen, and the snap
    // animation arrives pre-scaled by how far the drag already travelled.
    controller.handle_notification(&keyboard_note(
        names::WILL_CHANGE_FRAME,
        Rect::new(0.0, 844.0, 390.0, 1104.0),
    ));

    // By hide completion the composer has already resigned focus, which is
    // exactly what makes the did-hide relevant to this controller.
    controller.host_mut().focused = None;
    controller.handle_notification(&keyboard_note(
        names::DID_HIDE,
        Rect::new(0.0, 844.0, 390.0, 1104.0),
    ));

    println!(
        "status: {:?}, guide height: {:.1}",
        controller.status(),
        controller.guide().length()
    );
}

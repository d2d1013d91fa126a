// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `swipecell` crate.
//!
//! These exercise the full widget loop the way a host toolkit drives it:
//! pan displacements in, view snapshots out, plus the document-level
//! outside-touch path built from the ancestry walk and the touch registry.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Vec2;
use swipecell::ancestry::within_any;
use swipecell::{Action, OpenState, Side, SwipeCell, TouchRegistry};

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0_u32));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

fn swipe(cell: &mut SwipeCell, dx: f64, dy: f64) {
    cell.on_pan_start(Vec2::ZERO);
    cell.on_pan(Vec2::new(dx, dy));
    cell.on_pan_end(Vec2::new(dx, dy));
}

#[test]
fn reference_thresholds_from_an_80px_left_region() {
    let mut cell = SwipeCell::new().with_left(vec![Action::new("Archive")]);
    cell.set_measured_widths(80.0, 0.0);

    // 50 > 40: opens left and snaps to the full width.
    swipe(&mut cell, 50.0, 0.0);
    assert_eq!(cell.state(), OpenState::OpenedLeft);
    assert_eq!(cell.content_offset(), 80.0);

    cell.close();

    // 30 < 40: snaps back to rest.
    swipe(&mut cell, 30.0, 0.0);
    assert_eq!(cell.state(), OpenState::Closed);
    assert_eq!(cell.content_offset(), 0.0);
}

#[test]
fn full_gesture_drives_the_view_snapshot() {
    let mut cell = SwipeCell::new()
        .with_right(vec![
            Action::new("Delete").with_class("danger"),
            Action::new("More"),
        ])
        .with_attr("data-testid", "row");
    cell.set_measured_widths(0.0, 128.0);

    // Mid-drag: content and cover track the finger.
    cell.on_pan_start(Vec2::ZERO);
    cell.on_pan(Vec2::new(-48.0, -3.0));
    let view = cell.view();
    assert!(view.interactive);
    assert_eq!(view.content_offset, -48.0);
    assert!(view.cover.as_ref().is_some_and(|c| c.visible));
    assert!(view.left.is_none());
    assert_eq!(view.right.as_ref().unwrap().buttons.len(), 2);

    // Release past half the region width: open, offset snaps to -128.
    cell.on_pan_end(Vec2::new(-70.0, -3.0));
    assert_eq!(cell.state(), OpenState::OpenedRight);
    let view = cell.view();
    assert_eq!(view.content_offset, -128.0);
    assert!(view.cover.as_ref().is_some_and(|c| c.visible));

    // Closing hides the cover again.
    cell.close();
    let view = cell.view();
    assert_eq!(view.content_offset, 0.0);
    assert!(view.cover.as_ref().is_some_and(|c| !c.visible));
}

#[test]
fn vertical_scrolling_passes_through_a_whole_session() {
    let mut cell = SwipeCell::new().with_left(vec![Action::new("Pin")]);
    cell.set_measured_widths(64.0, 0.0);

    cell.on_pan_start(Vec2::ZERO);
    for (dx, dy) in [(2.0, 10.0), (4.0, 30.0), (5.0, 80.0)] {
        cell.on_pan(Vec2::new(dx, dy));
        assert!(!cell.is_swiping());
        assert_eq!(cell.content_offset(), 0.0);
    }
    cell.on_pan_end(Vec2::new(5.0, 80.0));
    assert_eq!(cell.state(), OpenState::Closed);
}

#[test]
fn auto_close_snaps_closed_after_any_press() {
    let (presses, on_press) = counter();
    let (closes, on_close) = counter();
    let mut cell = SwipeCell::new()
        .with_auto_close(true)
        .with_left(vec![Action::new("Archive").with_on_press(on_press)])
        .with_on_close(on_close);
    cell.set_measured_widths(90.0, 0.0);

    swipe(&mut cell, 60.0, 2.0);
    assert_eq!(cell.state(), OpenState::OpenedLeft);

    assert!(cell.press(Side::Left, 0));
    assert_eq!(presses.get(), 1);
    assert_eq!(closes.get(), 1);
    assert_eq!(cell.state(), OpenState::Closed);
}

#[test]
fn document_touch_closes_every_open_cell_except_the_touched_region() {
    // Host node tree, one node id space for the whole page:
    //
    //   body(0)
    //   ├── row_a(1) ── left_a(2) ── btn_a(3)
    //   └── row_b(10) ── right_b(11) ── btn_b(12)
    let parent = |node: u32| match node {
        1 | 10 => Some(0_u32),
        2 => Some(1),
        3 => Some(2),
        11 => Some(10),
        12 => Some(11),
        _ => None,
    };

    let (closes_a, on_close_a) = counter();
    let (closes_b, on_close_b) = counter();

    let mut cell_a = SwipeCell::new()
        .with_left(vec![Action::new("Archive")])
        .with_on_close(on_close_a);
    cell_a.set_measured_widths(80.0, 0.0);

    let mut cell_b = SwipeCell::new()
        .with_right(vec![Action::new("Delete")])
        .with_on_close(on_close_b);
    cell_b.set_measured_widths(0.0, 100.0);

    // Region containers per cell id, as the host knows them.
    let regions = |id: u32| -> &'static [u32] {
        match id {
            0 => &[2],
            _ => &[11],
        }
    };

    let registry = TouchRegistry::new();
    let _guard_a = registry.register(0_u32);
    let _guard_b = registry.register(1_u32);

    swipe(&mut cell_a, 60.0, 0.0);
    swipe(&mut cell_b, -70.0, 0.0);
    assert!(cell_a.is_open() && cell_b.is_open());

    // A touch lands on cell A's button: A stays open, B closes.
    let target = 3_u32;
    for id in registry.ids() {
        let within = within_any(&parent, target, regions(id));
        let cell = if id == 0 { &mut cell_a } else { &mut cell_b };
        cell.handle_outside_touch(within);
    }
    assert_eq!(cell_a.state(), OpenState::OpenedLeft);
    assert_eq!(cell_b.state(), OpenState::Closed);
    assert_eq!(closes_a.get(), 0);
    assert_eq!(closes_b.get(), 1);

    // A touch on unrelated content closes the rest, exactly once.
    let target = 0_u32;
    for id in registry.ids() {
        let within = within_any(&parent, target, regions(id));
        let cell = if id == 0 { &mut cell_a } else { &mut cell_b };
        cell.handle_outside_touch(within);
    }
    assert_eq!(cell_a.state(), OpenState::Closed);
    assert_eq!(closes_a.get(), 1);
    assert_eq!(closes_b.get(), 1, "closed cells are unaffected");
}

#[test]
fn unmounting_releases_the_registration_on_every_exit_path() {
    fn mount(registry: &TouchRegistry<u32>, bail_early: bool) {
        let _guard = registry.register(1);
        assert_eq!(registry.len(), 1);
        if bail_early {
            return;
        }
        assert_eq!(registry.len(), 1);
    }

    let registry = TouchRegistry::new();
    mount(&registry, true);
    assert!(registry.is_empty());
    mount(&registry, false);
    assert!(registry.is_empty());
}

#[test]
fn reopening_after_outside_touch_requires_a_new_transition() {
    let (opens, on_open) = counter();
    let mut cell = SwipeCell::new()
        .with_left(vec![Action::new("Pin")])
        .with_on_open(on_open);
    cell.set_measured_widths(80.0, 0.0);

    swipe(&mut cell, 60.0, 0.0);
    assert_eq!(opens.get(), 1);

    assert!(cell.handle_outside_touch(false));
    swipe(&mut cell, 60.0, 0.0);
    assert_eq!(opens.get(), 2);
}

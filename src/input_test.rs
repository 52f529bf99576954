use super::*;

// =============================================================
// PointerSample
// =============================================================

#[test]
fn sample_prefers_first_touch() {
    let touches = [Point::new(220.0, 110.0), Point::new(1.0, 1.0)];
    let sample = PointerSample::from_parts(Some(Point::new(5.0, 5.0)), &touches);
    assert_eq!(sample.page, Some(Point::new(220.0, 110.0)));
}

#[test]
fn sample_falls_back_to_mouse() {
    let sample = PointerSample::from_parts(Some(Point::new(5.0, 6.0)), &[]);
    assert_eq!(sample, PointerSample::at(5.0, 6.0));
}

#[test]
fn sample_without_position() {
    assert_eq!(PointerSample::from_parts(None, &[]), PointerSample::none());
    assert_eq!(PointerSample::default().page, None);
}

// =============================================================
// PickState
// =============================================================

#[test]
fn pick_state_default_is_idle() {
    assert_eq!(PickState::default(), PickState::Idle);
    assert!(!PickState::Idle.is_picking());
    assert!(PickState::Picking { dial: Mode::Minute }.is_picking());
}

// =============================================================
// Wiring tables
// =============================================================

#[test]
fn each_dial_starts_a_pick_for_its_own_mode() {
    for (target, _, handler) in MOUNT_BINDINGS {
        match target {
            Target::HourDial => assert_eq!(*handler, Handler::StartPick(Mode::Hour)),
            Target::MinuteDial => assert_eq!(*handler, Handler::StartPick(Mode::Minute)),
            _ => assert!(!matches!(handler, Handler::StartPick(_))),
        }
    }
}

#[test]
fn mount_bindings_never_touch_move_or_release() {
    assert!(
        MOUNT_BINDINGS
            .iter()
            .all(|(_, _, h)| !matches!(h, Handler::Pick | Handler::EndPick))
    );
}

#[test]
fn session_bindings_cover_mouse_and_touch() {
    let events: Vec<&str> = SESSION_BINDINGS.iter().map(|(e, _)| *e).collect();
    for event in [MOUSEMOVE, TOUCHMOVE, MOUSEUP, TOUCHEND] {
        assert!(events.contains(&event), "missing {event}");
    }
}

#[test]
fn start_pick_handlers_compare_by_dial() {
    let hour = Handler::StartPick(Mode::Hour);
    let copy = hour;
    assert_eq!(copy, hour);
    assert_ne!(hour, Handler::StartPick(Mode::Minute));
    assert_ne!(hour, Handler::Pick);
}

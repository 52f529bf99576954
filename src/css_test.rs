use super::*;

#[test]
fn class_names_follow_prefix() {
    let css = ClassNames::with_prefix("mh");
    assert_eq!(css.clock, "mh-clock");
    assert_eq!(css.clock_picking, "mh-clock--picking");
    assert_eq!(css.hand_small, "mh-clock__hand--small");
    assert_eq!(css.mark_attr, "data-mh-mark");
    assert_eq!(css.mode_attr, "data-mh-mode");
}

#[test]
fn class_names_are_distinct() {
    let css = ClassNames::with_prefix("x");
    let all = [
        &css.clock,
        &css.clock_picking,
        &css.time,
        &css.hour,
        &css.minute,
        &css.dials,
        &css.dial,
        &css.dial_hour,
        &css.dial_minute,
        &css.mark,
        &css.mark_inner,
        &css.hand,
        &css.hand_small,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

use weightlist_core::{BlendList, GetMethod, ListError, Value, ValueKind};
use weightlist_test_fixtures::StaticSource;

fn two_slot_float_list() -> BlendList {
    let mut list = BlendList::new(ValueKind::Float);
    list.assign(0, &StaticSource::handle("ControllerA", Value::Float(100.0)))
        .unwrap();
    list.assign(1, &StaticSource::handle("ControllerB", Value::Float(-100.0)))
        .unwrap();
    list
}

#[test]
fn active_cursor_clamps_both_ways() {
    let mut list = two_slot_float_list();
    list.list_mut().set_active(99);
    assert_eq!(list.list().active(), 1);
    list.list_mut().set_active(-99);
    assert_eq!(list.list().active(), 0);
}

#[test]
fn index_cursor_clamps_independently() {
    let mut list = two_slot_float_list();
    list.list_mut().set_active(1);
    list.list_mut().set_index_mode_index(99);
    assert_eq!(list.list().index_mode_index(), 1);
    list.list_mut().set_index_mode_index(-5);
    assert_eq!(list.list().index_mode_index(), 0);
    // moving the index cursor leaves the active cursor alone
    assert_eq!(list.list().active(), 1);
}

#[test]
fn cursors_survive_mode_toggles() {
    let mut list = two_slot_float_list();
    list.list_mut().set_active(1);
    list.list_mut().set_index_mode_index(0);

    list.set_index_mode(true);
    list.set_index_mode(false);
    list.set_index_mode(true);

    assert_eq!(list.list().active(), 1);
    assert_eq!(list.list().index_mode_index(), 0);
}

#[test]
fn set_index_by_name_matches_substring_case_insensitively() {
    let mut list = two_slot_float_list();
    list.list_mut().set_name(0, "left arm");
    list.list_mut().set_name(1, "ArmContour");

    assert!(list.list_mut().set_index_by_name("CONT"));
    assert_eq!(list.list().index_mode_index(), 1);

    // first match in list order wins
    assert!(list.list_mut().set_index_by_name("ARM"));
    assert_eq!(list.list().index_mode_index(), 0);
}

#[test]
fn set_index_by_name_rejects_empty_and_missing() {
    let mut list = two_slot_float_list();
    list.list_mut().set_index_mode_index(1);

    assert!(!list.list_mut().set_index_by_name(""));
    assert_eq!(list.list().index_mode_index(), 1);

    assert!(!list.list_mut().set_index_by_name("aaa"));
    assert_eq!(list.list().index_mode_index(), 1);
}

#[test]
fn name_falls_back_to_source_name() {
    let mut list = two_slot_float_list();
    assert_eq!(list.list().name(0), "ControllerA");
    list.list_mut().set_name(0, "override");
    assert_eq!(list.list().name(0), "override");
    // by-name lookup sees the fallback names too
    assert!(list.list_mut().set_index_by_name("controllerb"));
    assert_eq!(list.list().index_mode_index(), 1);
}

#[test]
fn invalid_slot_reads_neutral_defaults() {
    let list = two_slot_float_list();
    assert_eq!(list.list().weight(7), 0.0);
    assert_eq!(list.list().name(7), "");
    assert_eq!(list.list().tag(7), "");
}

#[test]
fn mismatched_assignment_is_rejected_and_list_unchanged() {
    let mut list = two_slot_float_list();
    let wrong = StaticSource::handle("vec", Value::Vec3([1.0, 2.0, 3.0]));
    let err = list.assign(2, &wrong).unwrap_err();
    assert_eq!(
        err,
        ListError::TypeMismatch {
            expected: ValueKind::Float,
            actual: ValueKind::Vec3,
        }
    );
    assert_eq!(list.len(), 2);
    // replacing a populated slot is rejected the same way
    assert!(list.assign(0, &wrong).is_err());
    assert_eq!(list.get_value(0.0, GetMethod::Absolute), Value::Float(0.0));
}

#[test]
fn assign_extends_and_replaces() {
    let mut list = BlendList::new(ValueKind::Float);
    list.assign(0, &StaticSource::handle("a", Value::Float(1.0)))
        .unwrap();
    // far past the end clamps to an append
    list.assign(10, &StaticSource::handle("b", Value::Float(2.0)))
        .unwrap();
    assert_eq!(list.len(), 2);

    list.assign(0, &StaticSource::handle("a2", Value::Float(5.0)))
        .unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get_value(0.0, GetMethod::Absolute), Value::Float(7.0));
}

#[test]
fn remove_shifts_cursors_with_their_occupant() {
    let mut list = BlendList::new(ValueKind::Float);
    for (i, v) in [10.0, 20.0, 30.0].into_iter().enumerate() {
        list.assign(i, &StaticSource::handle(format!("s{i}"), Value::Float(v)))
            .unwrap();
    }
    list.list_mut().set_active(2);
    list.list_mut().set_index_mode_index(1);

    list.list_mut().remove(0).unwrap();
    // both cursors still point at the values they tracked
    assert_eq!(list.list().active(), 1);
    assert_eq!(list.list().index_mode_index(), 0);

    // removing the tracked slot leaves the cursor on the successor
    list.list_mut().remove(0).unwrap();
    assert_eq!(list.list().index_mode_index(), 0);
    assert_eq!(list.list().active(), 0);
}

#[test]
fn insert_shifts_cursors_with_their_occupant() {
    let mut list = two_slot_float_list();
    list.list_mut().set_active(1);
    list.list_mut().set_index_mode_index(0);

    list.list_mut().insert(0).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.list().active(), 2);
    assert_eq!(list.list().index_mode_index(), 1);

    // the inserted slot is empty and contributes nothing
    assert_eq!(list.get_value(0.0, GetMethod::Absolute), Value::Float(0.0));
}

#[test]
fn structural_edits_reject_out_of_range_slots() {
    let mut list = two_slot_float_list();
    assert!(matches!(
        list.list_mut().remove(5),
        Err(ListError::InvalidSlot { slot: 5, len: 2 })
    ));
    assert!(list.list_mut().insert(5).is_err());
    assert_eq!(list.len(), 2);
}

#[test]
fn cleared_slot_behaves_as_empty() {
    let mut list = two_slot_float_list();
    list.list_mut().clear(0);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get_value(0.0, GetMethod::Absolute), Value::Float(-100.0));
}

#[test]
fn dropped_source_behaves_as_empty() {
    let mut list = BlendList::new(ValueKind::Float);
    let kept = StaticSource::handle("kept", Value::Float(3.0));
    list.assign(0, &kept).unwrap();
    {
        let dropped = StaticSource::handle("dropped", Value::Float(1000.0));
        list.assign(1, &dropped).unwrap();
        assert_eq!(list.get_value(0.0, GetMethod::Absolute), Value::Float(1003.0));
    }
    // the host dropped its handle; the slot stays but reads as empty
    assert_eq!(list.len(), 2);
    assert_eq!(list.get_value(0.0, GetMethod::Absolute), Value::Float(3.0));
}

#[test]
fn slot_tags_are_opaque_metadata() {
    let mut list = two_slot_float_list();
    list.list_mut().set_tag(1, "ik-chain");
    assert_eq!(list.list().tag(1), "ik-chain");
    assert_eq!(list.list().tag(0), "");
}

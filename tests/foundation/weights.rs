//! Integration tests for Weight and RoomId

use proptest::prelude::*;
use zuul_foundation::{MAX_CARRY_WEIGHT, RoomId, Weight};

#[test]
fn max_carry_weight_is_five_kilos() {
    assert_eq!(MAX_CARRY_WEIGHT, Weight::grams(5000));
}

#[test]
fn weights_order_by_grams() {
    assert!(Weight::grams(100) < Weight::grams(101));
    assert!(Weight::ZERO <= Weight::grams(0));
}

#[test]
fn room_ids_compare_by_index() {
    assert_eq!(RoomId::new(3), RoomId::new(3));
    assert_ne!(RoomId::new(3), RoomId::new(4));
    assert_eq!(RoomId::new(3).to_string(), "Room(3)");
}

proptest! {
    #[test]
    fn checked_add_agrees_with_u32(a in any::<u32>(), b in any::<u32>()) {
        let expected = a.checked_add(b).map(Weight::grams);
        prop_assert_eq!(Weight::grams(a).checked_add(Weight::grams(b)), expected);
    }
}

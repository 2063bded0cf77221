use pixoo_protocol::payload::{decode, encode, narrow, narrow_channel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn narrowing_is_mod_256(value in any::<i32>()) {
        prop_assert_eq!(i64::from(narrow_channel(value)), i64::from(value).rem_euclid(256));
    }

    #[test]
    fn decode_inverts_encode(values in prop::collection::vec(any::<i32>(), 0..192)) {
        let decoded = decode(&encode(&values)).unwrap();
        prop_assert_eq!(decoded, narrow(&values));
    }

    #[test]
    fn encoded_length_is_padded(values in prop::collection::vec(0i32..=255, 0..192)) {
        let encoded = encode(&values);
        prop_assert_eq!(encoded.len(), values.len().div_ceil(3) * 4);
        prop_assert!(!encoded.contains('\n'));
    }
}

#[test]
fn boundary_values_wrap() {
    let values = [0, 1, 255, 256, -1];
    let decoded = decode(&encode(&values)).unwrap();
    assert_eq!(decoded, vec![0, 1, 255, 0, 255]);
}

use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"framecast");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u8(b'f');
    b.write_bytes(b"ramecast");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_differs_by_seed() {
    let mut a = Fnv1a64::new(1);
    a.write_bytes(b"topic");
    let mut b = Fnv1a64::new(2);
    b.write_bytes(b"topic");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn mix64_scrambles_and_is_deterministic() {
    assert_eq!(mix64(42), mix64(42));
    assert_ne!(mix64(1), mix64(2));
    assert_ne!(mix64(1), 1);
}

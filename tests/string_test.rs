mod common;
use common::*;

#[test]
fn test_round_trip() {
    let mut r = runtime();
    r.inject("bye", 1025).unwrap();
    assert_eq!(r.extract(1025).unwrap(), "bye");
}

#[test]
fn test_shorter_overwrite() {
    let mut r = runtime();
    r.inject("interpret", 1025).unwrap();
    r.inject("dup", 1025).unwrap();
    assert_eq!(r.extract(1025).unwrap(), "dup");
    assert_eq!(r.memory().get(1028).unwrap(), 0);
}

#[test]
fn test_one_char_per_cell() {
    let mut r = runtime();
    r.inject("A1", 10).unwrap();
    assert_eq!(&r.memory().as_slice()[10..13], &[65, 49, 0]);
}

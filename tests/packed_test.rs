mod common;
use common::*;
use nga::mach::{packed, Opcode::*};

#[test]
fn test_bundle_runs_in_byte_order() {
    let mut r = runtime();
    r.data_mut().push(5).unwrap();
    load(&mut r, 100, &[bundle(&[Dup, Add]), bundle(&[Halt])]);
    r.execute(100).unwrap();
    assert_eq!(r.data().as_slice(), &[10]);
}

#[test]
fn test_each_opcode_sees_the_previous() {
    let mut r = runtime();
    r.data_mut().push(5).unwrap();
    load(&mut r, 100, &[bundle(&[Dup, Add, Drop]), bundle(&[Halt])]);
    r.execute(100).unwrap();
    assert!(r.data().is_empty());
}

#[test]
fn test_fused_idiom() {
    // dup,eq,and,zero-return on a zero drops it and returns
    let mut r = runtime();
    r.data_mut().push(0).unwrap();
    load(&mut r, 100, &[bundle(&[Dup, Dup, Eq, And]), bundle(&[ZeroReturn, Halt])]);
    r.execute(100).unwrap();
    assert!(r.data().is_empty());
}

#[test]
fn test_validation() {
    assert!(packed::validate(bundle(&[Lit, Lit, Lit, Lit])));
    assert!(packed::validate(bundle(&[IoInteract])));
    assert!(!packed::validate(0x1E));
    assert!(!packed::validate(0x1E00_0000));
    assert!(!packed::validate(-1));
}

#[test]
fn test_unpacked_out_of_range_halts() {
    let mut r = runtime();
    r.data_mut().push(1).unwrap();
    load(&mut r, 100, &[-1, bundle(&[Drop])]);
    r.execute(100).unwrap();
    assert_eq!(r.data().as_slice(), &[1]);
    assert_eq!(r.ip(), MEMORY as i32);
}

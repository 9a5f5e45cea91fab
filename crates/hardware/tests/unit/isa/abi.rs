//! # ABI Register Name Tests

use mipsim_core::isa::abi::{REG_NAMES, Reg};
use rstest::rstest;

#[rstest]
#[case("zero", 0)]
#[case("$at", 1)]
#[case("$v0", 2)]
#[case("$v1", 3)]
#[case("$a0", 4)]
#[case("$a3", 7)]
#[case("$t0", 8)]
#[case("$t7", 15)]
#[case("$s0", 16)]
#[case("$s7", 23)]
#[case("$t8", 24)]
#[case("$t9", 25)]
#[case("$k0", 26)]
#[case("$k1", 27)]
#[case("$gp", 28)]
#[case("$sp", 29)]
#[case("$fp", 30)]
#[case("$s8", 30)]
#[case("$ra", 31)]
#[case("$31", 31)]
#[case("$0", 0)]
#[case("$SP", 29)]
fn test_lookup(#[case] name: &str, #[case] index: usize) {
    assert_eq!(Reg::lookup(name).map(Reg::index), Some(index));
}

#[rstest]
#[case("$32")]
#[case("$t10")]
#[case("$")]
#[case("")]
#[case("$x1")]
fn test_lookup_rejects(#[case] name: &str) {
    assert_eq!(Reg::lookup(name), None);
}

#[test]
fn test_names_round_trip() {
    for (idx, name) in REG_NAMES.iter().enumerate() {
        let reg = Reg::new(idx).unwrap();
        assert_eq!(reg.name(), *name);
        assert_eq!(Reg::lookup(&reg.to_string()), Some(reg));
    }
    assert_eq!(Reg::new(32), None);
}

//! # Assertion Tests

use mipsim_core::sim::Snapshot;
use mipsim_core::sim::assertion::{self, Assertion, MemBlock, Status, Tally, Verdict};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn snapshot() -> Snapshot {
    let mut registers = [0; 32];
    registers[8] = 35;
    registers[12] = 0xFFFF_FFFB;
    Snapshot {
        pc: 0,
        registers,
        memory: vec![10, 0x1234, 0, 0],
    }
}

#[rstest]
#[case("#assert(sim.inspect_mem(rf)[8] == 35)", true, 35)]
#[case("#assert(sim.inspect_mem(rf)[8] == 0x23)", true, 35)]
#[case("#assert(sim.inspect_mem(rf)[8] == 36)", false, 35)]
#[case("#assert(sim.inspect_mem(rf)[12] == -5)", true, 0xFFFF_FFFB)]
#[case("#assert(sim.inspect_mem(d_mem)[0] == 10)", true, 10)]
#[case("#assert(sim.inspect_mem(d_mem)[1] == 0x1234 & 0xff00)", false, 0x1234)]
#[case("#assert(sim.inspect_mem(d_mem)[1] == 0x1200 | 0x34)", true, 0x1234)]
#[case("#assert(sim.inspect_mem(d_mem)[99] == 0)", true, 0)]
#[case("#assert(sim.inspect_mem(d_mem)[-1] == 0)", true, 0)]
#[case("#assert(sim.inspect_mem(rf)[32] == 1)", false, 0)]
fn test_check(#[case] text: &str, #[case] passed: bool, #[case] actual: u32) {
    let outcome = Assertion::parse(text).unwrap().check(&snapshot());
    assert_eq!(outcome.passed, passed, "{text}");
    assert_eq!(outcome.actual, actual, "{text}");
}

#[test]
fn test_parse_fields() {
    let a = Assertion::parse("  #assert(sim.inspect_mem(d_mem)[0x10] == -0x2 ^ 1)").unwrap();
    assert_eq!(a.block, MemBlock::Memory);
    assert_eq!(a.index, 16);
    assert_eq!(a.expected, -1);
}

#[test]
fn test_collect_only_assert_comments() {
    let source = "# plain comment
        #assert(sim.inspect_mem(rf)[8] == 1)
        addi $t0, $zero, 1 #assert(sim.inspect_mem(rf)[8] == 2)
          #assert(sim.inspect_mem(bogus)[8] == 1)
        #asserted nothing";
    let found = assertion::collect_assertions(source);
    assert_eq!(found.len(), 2);
    assert!(found[0].is_ok());
    assert!(found[1].is_err());
}

#[test]
fn test_evaluate_reports_and_tallies() {
    let source = "#assert(sim.inspect_mem(rf)[8] == 35)
                  #assert(sim.inspect_mem(rf)[8] == 1)
                  #assert(sim.inspect_mem(rf)[8] = 1)";
    let assertions = assertion::collect_assertions(source);
    let (verdicts, tally) = assertion::evaluate(&assertions, &snapshot());

    assert_eq!(
        tally,
        Tally {
            passed: 1,
            valid: 2,
            total: 3,
        }
    );
    assert_eq!(tally.invalid(), 1);
    assert_eq!(tally.percentage(), Some(50.0));
    assert!(!tally.all_passed());

    let statuses: Vec<Status> = verdicts.iter().map(|v| v.status).collect();
    assert_eq!(statuses, vec![Status::Pass, Status::Fail, Status::Invalid]);
    assert_eq!(
        verdicts[0].to_string(),
        "OK        0x23  assert(sim.inspect_mem(rf)[8] == 35)"
    );
    assert_eq!(
        verdicts[1].to_string(),
        "X         0x23  assert(sim.inspect_mem(rf)[8] == 1)"
    );
    assert_eq!(
        verdicts[2].to_string(),
        "!!  BAD ASSERT  assert(sim.inspect_mem(rf)[8] = 1)"
    );
}

#[test]
fn test_no_valid_assertions_has_no_percentage() {
    let tally = Tally::default();
    assert_eq!(tally.percentage(), None);
    assert!(!tally.all_passed());
    let verdict = Verdict {
        status: Status::Fail,
        actual: Some(0xDEAD_BEEF),
        text: "x".into(),
    };
    assert_eq!(verdict.to_string(), "X   0xdeadbeef  x");
}

#[rstest]
#[case::two_blanks_before_and("#assert(sim.inspect_mem(rf)[8] == 0xff  & 0x0f)")]
#[case::wider_than_a_word("#assert(sim.inspect_mem(rf)[8] == 0x1ffffffff)")]
#[case::below_signed_word("#assert(sim.inspect_mem(rf)[8] == -0x80000001)")]
#[case::plus_sign("#assert(sim.inspect_mem(rf)[+8] == 1)")]
#[case::trailing_text("#assert(sim.inspect_mem(rf)[8] == 1) extra")]
fn test_rejected(#[case] text: &str) {
    assert!(Assertion::parse(text).is_err(), "{text}");
}

#[test]
fn test_word_edges_are_accepted() {
    let top = Assertion::parse("#assert(sim.inspect_mem(rf)[12] == 0xFFFFFFFB)").unwrap();
    assert!(top.check(&snapshot()).passed);
    let low = Assertion::parse("#assert(sim.inspect_mem(rf)[12] == -0x80000000)").unwrap();
    assert_eq!(low.expected, -0x8000_0000);
}

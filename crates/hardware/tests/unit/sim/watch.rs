//! # Idle Detection Tests

use mipsim_core::sim::{IdleDetector, StopReason};
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

#[test]
fn test_revisiting_a_pc_without_writes_is_idle() {
    let mut detector = IdleDetector::new();
    assert!(!detector.observe(4, false));
    assert!(!detector.observe(8, false));
    assert!(detector.observe(4, false));
}

#[test]
fn test_changing_write_clears_history() {
    let mut detector = IdleDetector::new();
    assert!(!detector.observe(4, false));
    assert!(!detector.observe(8, true));
    assert!(!detector.observe(4, false));
    assert!(detector.observe(4, false));
}

#[test]
fn test_seen_pc_is_idle_even_on_a_changing_step() {
    let mut detector = IdleDetector::new();
    assert!(!detector.observe(4, false));
    assert!(detector.observe(4, true));
}

#[test]
fn test_clear_forgets() {
    let mut detector = IdleDetector::new();
    assert!(!detector.observe(4, false));
    detector.clear();
    assert!(!detector.observe(4, false));
}

#[test]
fn test_rewriting_the_same_value_does_not_reset_idle_detection() {
    let mut ctx = TestContext::new(
        "addi $t0, $zero, 5
         loop: addi $t0, $zero, 5
         sw $t0, 0($zero)
         beq $zero, $zero, loop",
    );
    let summary = ctx.run_until_idle();
    assert_eq!(summary.stop, StopReason::Idle);
    assert_eq!(summary.cycles, 7);
    assert_eq!(ctx.mem(0), 5);
}

#[test]
fn test_cycle_budget_stops_a_busy_loop() {
    let mut ctx = TestContext::new(
        "loop: addi $t0, $t0, 1
         beq $zero, $zero, loop",
    );
    let summary = ctx.sim.run_until_idle(50).unwrap();
    assert_eq!(summary.stop, StopReason::CycleBudget);
    assert_eq!(summary.cycles, 50);
    assert_eq!(ctx.reg("t0"), 25);
}

#[test]
fn test_step_never_stops_on_its_own() {
    let mut ctx = TestContext::new("halt: beq $zero, $zero, halt");
    let summary = ctx.sim.run(1_000).unwrap();
    assert_eq!(summary.stop, StopReason::CycleBudget);
    assert_eq!(summary.cycles, 1_000);
    assert_eq!(ctx.cpu().stats.cycles, 1_000);
}

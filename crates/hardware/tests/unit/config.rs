//! # Configuration Tests

use mipsim_core::config::Config;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.general.max_cycles, 100_000);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.size_words, 1024);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = Config::from_json(r#"{ "memory": { "size_words": 8 } }"#).unwrap();
    assert_eq!(config.memory.size_words, 8);
    assert_eq!(config.general, Config::default().general);
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_unknown_fields_are_rejected() {
    assert!(Config::from_json(r#"{ "general": { "start_pc": 0, "pipeline": true } }"#).is_err());
    assert!(Config::from_json(r#"{ "cache": {} }"#).is_err());
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(Config::from_json("{ general: }").is_err());
    assert!(Config::from_json(r#"{ "memory": { "size_words": -1 } }"#).is_err());
}

#[test]
fn test_memory_size_bounds_accesses() {
    let config = Config::from_json(r#"{ "memory": { "size_words": 2 } }"#).unwrap();
    let mut ctx = TestContext::with_config(
        "addi $t0, $zero, 3\nsw $t0, 4($zero)\nsw $t0, 8($zero)",
        &config,
    );
    ctx.run(2);
    assert_eq!(ctx.sim.inspect_memory(), &[0, 3]);
    assert!(ctx.sim.step().is_err());
}

#[test]
fn test_tracing_does_not_change_results() {
    let source = "addi $t0, $zero, 3\nsw $t0, 0($zero)\nlw $t1, 0($zero)";
    let traced = Config::from_json(r#"{ "general": { "trace_instructions": true } }"#).unwrap();
    let mut plain = TestContext::new(source);
    let mut noisy = TestContext::with_config(source, &traced);
    plain.run(3);
    noisy.run(3);
    assert_eq!(plain.snapshot(), noisy.snapshot());
}

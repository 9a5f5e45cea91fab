//! Shared helpers for the test suite.

/// `TestContext` harness.
pub mod harness;

/// Fixture program sources.
pub mod fixtures {
    /// Counting loop storing 1..=10 to memory word 0.
    pub const COUNTING_LOOP: &str = include_str!("../fixtures/counting_loop_info.s");
    /// Hex listing assembled from [`COUNTING_LOOP`].
    pub const COUNTING_LOOP_LISTING: &str = include_str!("../fixtures/counting_loop.txt");
    /// Immediate, comparison and `lui` checks.
    pub const ALU_IMMEDIATES: &str = include_str!("../fixtures/alu_immediates_info.s");
    /// Loads and stores with negative offsets.
    pub const MEMORY: &str = include_str!("../fixtures/memory_info.s");
}

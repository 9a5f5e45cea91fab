//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Cycles:** Total cycles and retired instructions.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch).
//! 3. **Branches:** Taken and not-taken counts.
//! 4. **Writes:** Architectural register and memory writes, including discarded `$zero` writes.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::instruction::InstClass;

/// Simulation statistics structure.
///
/// Updated once per successfully executed instruction. A step that fails
/// leaves the counters untouched, like the rest of the architectural state.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed (one per executed instruction).
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of ALU instructions retired (`and`, `slt`, `addi`, `lui`).
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch instructions retired.
    pub inst_branch: u64,

    /// Branches whose condition held.
    pub branches_taken: u64,

    /// Register writes committed.
    pub reg_writes: u64,
    /// Register writes discarded because they targeted `$zero`.
    pub zero_writes_discarded: u64,
    /// Memory writes committed.
    pub mem_writes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            branches_taken: 0,
            reg_writes: 0,
            zero_writes_discarded: 0,
            mem_writes: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`, `"writes"`.
/// Pass an empty slice to `report_sections` to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch", "writes"];

impl SimStats {
    /// Records one retired instruction of the given class.
    pub fn retire(&mut self, class: InstClass) {
        self.cycles += 1;
        self.instructions_retired += 1;
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Branch => self.inst_branch += 1,
        }
    }

    /// Renders only the requested statistics sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Section names from [`STATS_SECTIONS`], or empty for all.
    pub fn report_sections(&self, sections: &[&str]) -> String {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let mut out = String::new();

        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "MIPS SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_freq                 {khz:.2} kHz");
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
            ] {
                let _ = writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count));
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("branch") {
            let not_taken = self.inst_branch - self.branches_taken;
            let _ = writeln!(out, "BRANCHES");
            let _ = writeln!(out, "  br.taken               {}", self.branches_taken);
            let _ = writeln!(out, "  br.not_taken           {not_taken}");
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("writes") {
            let _ = writeln!(out, "ARCHITECTURAL WRITES");
            let _ = writeln!(out, "  wr.reg                 {}", self.reg_writes);
            let _ = writeln!(out, "  wr.zero_discarded      {}", self.zero_writes_discarded);
            let _ = writeln!(out, "  wr.mem                 {}", self.mem_writes);
        }
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        print!("{}", self.report_sections(&[]));
    }
}

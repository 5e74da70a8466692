//! Process metrics sampled around a timed section.
//!
//! [`ProcessProbe`] is the seam between the harness and the platform:
//! wall clock, cumulative process CPU time, and resident memory. Anything
//! a platform cannot report reads as zero.

use std::time::Instant;

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

const MIB: f64 = 1024.0 * 1024.0;

/// Shortest wall time used as a CPU% denominator.
const MIN_WALL_SECS: f64 = 1e-12;

pub trait ProcessProbe {
    /// Monotonic timestamp.
    fn wall_clock_now(&self) -> Instant {
        Instant::now()
    }

    /// Cumulative user + system CPU seconds used by this process.
    fn process_cpu_time(&mut self) -> f64;

    /// Current resident set size in MiB.
    fn resident_memory_mib(&mut self) -> f64;

    /// Logical cores, used to normalize CPU%.
    fn logical_cores(&self) -> usize;

    /// Readings taken outermost-first, so the clock is read last.
    fn start_snapshot(&mut self) -> Snapshot {
        Snapshot {
            mem_mib: self.resident_memory_mib(),
            cpu_secs: self.process_cpu_time(),
            at: self.wall_clock_now(),
        }
    }

    /// Mirror of [`start_snapshot`](Self::start_snapshot): clock first.
    fn end_snapshot(&mut self) -> Snapshot {
        Snapshot {
            at: self.wall_clock_now(),
            cpu_secs: self.process_cpu_time(),
            mem_mib: self.resident_memory_mib(),
        }
    }
}

/// Probe backed by the operating system.
pub struct SystemProbe {
    sys: System,
    pid: Option<Pid>,
    cores: usize,
}

impl SystemProbe {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!("resident memory unavailable: {}", e);
                None
            }
        };
        SystemProbe {
            sys: System::new(),
            pid,
            cores: num_cpus::get(),
        }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for SystemProbe {
    #[cfg(unix)]
    fn process_cpu_time(&mut self) -> f64 {
        // SAFETY: rusage is plain old data, all-zero is a valid value.
        let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
        // SAFETY: RUSAGE_SELF with a pointer to a struct we own.
        let ret = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
        if ret != 0 {
            return 0.0;
        }
        let secs = |tv: libc::timeval| tv.tv_sec as f64 + tv.tv_usec as f64 / 1e6;
        secs(usage.ru_utime) + secs(usage.ru_stime)
    }

    #[cfg(not(unix))]
    fn process_cpu_time(&mut self) -> f64 {
        0.0
    }

    fn resident_memory_mib(&mut self) -> f64 {
        let Some(pid) = self.pid else {
            return 0.0;
        };
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            false,
            ProcessRefreshKind::new().with_memory(),
        );
        self.sys
            .process(pid)
            .map(|p| p.memory() as f64 / MIB)
            .unwrap_or(0.0)
    }

    fn logical_cores(&self) -> usize {
        self.cores
    }
}

/// Probe for platforms without process accounting: only the wall clock is real.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProbe;

impl ProcessProbe for NullProbe {
    fn process_cpu_time(&mut self) -> f64 {
        0.0
    }

    fn resident_memory_mib(&mut self) -> f64 {
        0.0
    }

    fn logical_cores(&self) -> usize {
        1
    }
}

/// One reading of the three primitives.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub at: Instant,
    pub cpu_secs: f64,
    pub mem_mib: f64,
}

/// Derived metrics for a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialMetrics {
    pub time_ms: f64,
    pub cpu_pct: f64,
    pub peak_mib: f64,
}

impl TrialMetrics {
    /// CPU% is normalized by `cores`, so one busy thread reads about
    /// `100 / cores`. Peak memory is the larger of the two snapshots, not
    /// a sampled peak.
    pub fn from_snapshots(before: &Snapshot, after: &Snapshot, cores: usize) -> Self {
        let wall = after.at.saturating_duration_since(before.at).as_secs_f64();
        let cpu = (after.cpu_secs - before.cpu_secs).max(0.0);
        TrialMetrics {
            time_ms: wall * 1000.0,
            cpu_pct: cpu_pct(cpu, wall, cores),
            peak_mib: before.mem_mib.max(after.mem_mib),
        }
    }
}

/// `100 * cpu / (wall * max(cores, 1))`
pub fn cpu_pct(cpu_secs: f64, wall_secs: f64, cores: usize) -> f64 {
    100.0 * cpu_secs / (wall_secs.max(MIN_WALL_SECS) * cores.max(1) as f64)
}

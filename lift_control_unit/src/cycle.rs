//! Fixed-period scan loop: read inputs → controller scan → actuate → integrate.
//!
//! Absolute-deadline pacing keeps the scan rate drift-free. A scan that
//! finishes past its deadline counts as an overrun and the schedule
//! resynchronises instead of bursting to catch up.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use lift_common::config::SimConfig;
use lift_common::types::Inputs;
use lift_hal::{LiftPlant, LimitSwitches};
use tracing::{info, warn};

use crate::console::{self, ConsoleCommand};
use crate::controller::LiftController;

// ─── Scan Statistics ────────────────────────────────────────────────

/// O(1) per-scan timing statistics.
///
/// Updated every scan with no allocation.
#[derive(Debug, Clone)]
pub struct ScanStats {
    /// Total scans executed.
    pub scan_count: u64,
    /// Last scan body duration [ns].
    pub last_scan_ns: u64,
    /// Minimum scan body duration [ns].
    pub min_scan_ns: u64,
    /// Maximum scan body duration [ns].
    pub max_scan_ns: u64,
    /// Running sum for average computation.
    pub sum_scan_ns: u64,
    /// Number of deadline overruns.
    pub overruns: u64,
}

impl ScanStats {
    /// New zeroed stats instance.
    pub const fn new() -> Self {
        Self {
            scan_count: 0,
            last_scan_ns: 0,
            min_scan_ns: u64::MAX,
            max_scan_ns: 0,
            sum_scan_ns: 0,
            overruns: 0,
        }
    }

    /// Record one scan body duration. O(1), no allocation.
    #[inline]
    pub fn record(&mut self, duration_ns: u64) {
        self.scan_count += 1;
        self.last_scan_ns = duration_ns;
        if duration_ns < self.min_scan_ns {
            self.min_scan_ns = duration_ns;
        }
        if duration_ns > self.max_scan_ns {
            self.max_scan_ns = duration_ns;
        }
        self.sum_scan_ns += duration_ns;
    }

    /// Average scan time [ns] (0 if no scans).
    #[inline]
    pub fn avg_scan_ns(&self) -> u64 {
        if self.scan_count == 0 {
            0
        } else {
            self.sum_scan_ns / self.scan_count
        }
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Scan Runner ────────────────────────────────────────────────────

/// Scan-loop driver owning the controller, the plant, and the operator
/// input latches.
///
/// All cadence counters are owned here — no process-wide state.
pub struct ScanRunner {
    config: SimConfig,
    controller: LiftController,
    plant: LiftPlant,
    inputs: Inputs,
    stats: ScanStats,
}

impl ScanRunner {
    /// New runner with the plant at rest on the bottom limit.
    pub fn new(config: SimConfig) -> Self {
        Self {
            controller: LiftController::new(config.tuning),
            config,
            plant: LiftPlant::new(),
            inputs: Inputs::default(),
            stats: ScanStats::new(),
        }
    }

    /// Timing statistics so far.
    #[inline]
    pub const fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// The controller instance.
    #[inline]
    pub const fn controller(&self) -> &LiftController {
        &self.controller
    }

    /// The plant instance.
    #[inline]
    pub const fn plant(&self) -> &LiftPlant {
        &self.plant
    }

    /// The operator input latches (host/test hook).
    #[inline]
    pub fn inputs_mut(&mut self) -> &mut Inputs {
        &mut self.inputs
    }

    /// Run one complete scan cycle: sense limits, run the controller,
    /// enforce the brake contract, integrate the plant.
    pub fn scan_once(&mut self) {
        let dt = self.config.scan.dt();

        // Limit switches are sensed from the plant itself, before the scan.
        let limits = LimitSwitches::sense(self.plant.position());
        self.inputs.top_limit = limits.top;
        self.inputs.bottom_limit = limits.bottom;

        let outputs = self.controller.update(dt, &self.inputs, &mut self.plant);

        // Defense in depth: a commanded brake always zeroes the set-point,
        // independent of what the controller wrote.
        if outputs.brake_engaged {
            self.plant.set_target_vel(0.0);
        }

        self.plant.step(dt);
    }

    /// Drive the loop until `running` clears or the operator quits.
    ///
    /// Each cycle: default the reset pulse, drain pending console
    /// commands, run one scan, report status on its cadence, then sleep
    /// to the next absolute deadline.
    pub fn run(&mut self, commands: &Receiver<ConsoleCommand>, running: &Arc<AtomicBool>) {
        let period = Duration::from_micros(u64::from(self.config.scan.scan_time_us));
        let mut next_deadline = Instant::now() + period;
        let mut status_tick: u32 = 0;

        while running.load(Ordering::SeqCst) {
            // Reset is a pulse: default false each cycle.
            self.inputs.reset_fault = false;

            for cmd in commands.try_iter() {
                if cmd == ConsoleCommand::Quit {
                    info!("operator quit");
                    running.store(false, Ordering::SeqCst);
                }
                console::apply(cmd, &mut self.inputs);
            }
            if !running.load(Ordering::SeqCst) {
                break;
            }

            let started = Instant::now();
            self.scan_once();
            self.stats.record(started.elapsed().as_nanos() as u64);

            if status_tick % self.config.scan.status_interval == 0 {
                self.log_status();
            }
            status_tick = status_tick.wrapping_add(1);

            let now = Instant::now();
            if now < next_deadline {
                std::thread::sleep(next_deadline - now);
                next_deadline += period;
            } else {
                // Missed the deadline — resynchronise instead of bursting.
                self.stats.overruns += 1;
                warn!(scan = self.stats.scan_count, "scan overrun");
                next_deadline = now + period;
            }
        }

        info!(
            scans = self.stats.scan_count,
            overruns = self.stats.overruns,
            avg_ns = self.stats.avg_scan_ns(),
            "scan loop stopped"
        );
    }

    fn log_status(&self) {
        info!(
            "pos={:.3} vel={:.3} state={} fault={} top={} bottom={} load={:.1} estop={}",
            self.plant.position(),
            self.plant.velocity(),
            self.controller.state().as_str(),
            self.controller.fault().as_str(),
            self.inputs.top_limit,
            self.inputs.bottom_limit,
            self.inputs.load_kg,
            self.inputs.estop,
        );
    }
}

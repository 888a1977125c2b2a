//! Wall-clock time per phase of a run (lowering, rendering, cross-check).

use std::{
    collections::HashMap,
    io::{self, Write},
    sync::RwLock,
    time::{Duration, Instant},
};

use once_cell::sync::Lazy;

static PHASES: Lazy<RwLock<HashMap<&'static str, Duration>>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Runs `f` and adds its elapsed time to `phase`.
pub fn profile<T: FnOnce() -> X, X>(phase: &'static str, f: T) -> X {
    let start = Instant::now();
    let res = f();
    let time = start.elapsed();
    let mut phases = PHASES.write().unwrap_or_else(|e| e.into_inner());
    *phases.entry(phase).or_default() += time;
    res
}

/// Accumulated time per phase, slowest first.
pub fn profile_totals() -> Vec<(&'static str, Duration)> {
    let phases = PHASES.read().unwrap_or_else(|e| e.into_inner());
    let mut pairs: Vec<_> = phases.iter().map(|(k, v)| (*k, *v)).collect();
    pairs.sort_by(|(_, a), (_, b)| b.cmp(a));
    pairs
}

/// Writes one line per phase with its share of the total.
pub fn profile_log(out: &mut impl Write) -> io::Result<()> {
    let totals = profile_totals();
    let sum: Duration = totals.iter().map(|(_, t)| *t).sum();
    writeln!(out, "phase times:")?;
    for (phase, t) in totals {
        let share = if sum.is_zero() {
            0.0
        } else {
            100.0 * t.as_secs_f64() / sum.as_secs_f64()
        };
        writeln!(out, "    {:24} {:>12?} {:5.1}%", phase, t, share)?;
    }
    Ok(())
}

//! boltzmann — the Boltzmann wealth-exchange model on the rust_abm toolkit.
//!
//! Every agent starts with one unit of wealth.  Each step it wanders to a
//! random Moore neighbor and, if it has anything left, hands one unit to a
//! random cellmate.  Total wealth is conserved while its distribution drifts
//! from equal towards exponential.
//!
//! Three runs share the agent type:
//!
//! | Run        | Grid              | Schedule        |
//! |------------|-------------------|-----------------|
//! | `line`     | 1-D ring, multi   | random          |
//! | `plane`    | 2-D torus, multi  | random          |
//! | `plane-st` | 2-D torus, multi  | staged, random  |
//! | `cube`     | 3-D torus, multi  | random          |
//!
//! Set `RUST_LOG=debug` (or `trace`) for per-step scheduler output.

mod money;

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::{Result, ensure};
use tracing::{info, trace};

use abm_core::Step;
use abm_model::{Model, ModelBuilder, ModelConfig, ModelObserver};
use abm_schedule::{SchedulePolicy, Scheduler, StageOrder, StepReport};
use abm_space::{Coord, Grid};

use money::{Economy, MoneyAgent};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const STEPS:          u64 = 100;
const LOG_EVERY:      u64 = 25;
const INITIAL_WEALTH: u32 = 1;

const LINE_CELLS:     u32   = 10;
const LINE_AGENTS:    usize = 100;
const PLANE_SIDE:     u32   = 8;
const PLANE_AGENTS:   usize = 64;
const CUBE_SIDE:      u32   = 4;
const CUBE_AGENTS:    usize = 64;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the Gini coefficient every `every` steps.
struct GiniLog {
    label: &'static str,
    every: u64,
}

impl<const N: usize> ModelObserver<Economy<N>> for GiniLog {
    fn on_step_end(&mut self, report: &StepReport, world: &Economy<N>) {
        if report.step.0 % self.every == 0 {
            info!(run = self.label, step = %report.step, gini = gini(&wealths(world)), "progress");
        }
    }

    fn on_run_end(&mut self, final_step: Step, world: &Economy<N>) {
        info!(run = self.label, step = %final_step, agents = world.agent_count(), "done");
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn wealths<const N: usize>(world: &Economy<N>) -> Vec<u32> {
    world.population.iter().map(|(_, agent)| agent.borrow().wealth()).collect()
}

/// Gini coefficient of `values`; 0 for perfect equality.
fn gini(values: &[u32]) -> f64 {
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    if values.is_empty() || total == 0 {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len() as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &w)| (i as f64 + 1.0) * f64::from(w))
        .sum();
    (2.0 * weighted) / (n * total as f64) - (n + 1.0) / n
}

struct Outcome {
    label:   &'static str,
    wealths: Vec<u32>,
    steps:   Step,
    seed:    u64,
    secs:    f64,
}

/// Build an economy on `grid`, scatter `agents` at random cells and run it.
fn run_economy<const N: usize>(
    label:  &'static str,
    grid:   Grid<N>,
    agents: usize,
    policy: SchedulePolicy,
) -> Result<Outcome> {
    let staged = matches!(policy, SchedulePolicy::Staged { .. });
    let config = ModelConfig::seeded(SEED).schedule(policy);
    let mut model: Model<N, MoneyAgent<N>> = ModelBuilder::new(grid).config(config).build()?;

    let world = model.world_mut();
    let extents = world.grid.extents();
    for _ in 0..agents {
        let axes: [i32; N] = std::array::from_fn(|axis| world.rng.gen_range(0..extents[axis] as i32));
        world.spawn(|id| MoneyAgent::new(id, INITIAL_WEALTH, staged), Coord::from_axes(axes))?;
    }
    info!(run = label, agents, extents = ?extents, scheduler = model.schedule().name(), "starting");

    let t0 = Instant::now();
    model.run_observed(STEPS, &mut GiniLog { label, every: LOG_EVERY })?;
    let secs = t0.elapsed().as_secs_f64();

    let world = model.world();
    for (id, agent) in world.population.iter() {
        let agent = agent.borrow();
        let at = world.grid.location_of(id).ok();
        trace!(run = label, agent = %id, steps = agent.steps(), wealth = agent.wealth(), at = ?at, "final state");
    }

    Ok(Outcome {
        label,
        wealths: wealths(model.world()),
        steps:   model.step_count(),
        seed:    model.world().rng.seed(),
        secs,
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    println!("=== boltzmann — rust_abm wealth exchange ===");
    println!("Steps: {STEPS}  |  Seed: {SEED}  |  Initial wealth: {INITIAL_WEALTH}");
    println!();

    // 1. One-dimensional ring.
    let line = run_economy(
        "line",
        Grid::multi([LINE_CELLS], [true])?,
        LINE_AGENTS,
        SchedulePolicy::Random { seed: None },
    )?;

    // 2. Two-dimensional torus.
    let plane = run_economy(
        "plane",
        Grid::multi([PLANE_SIDE, PLANE_SIDE], [true, true])?,
        PLANE_AGENTS,
        SchedulePolicy::Random { seed: None },
    )?;

    // 3. Same torus, every agent deciding from the same pre-step state.
    let staged = run_economy(
        "plane-st",
        Grid::multi([PLANE_SIDE, PLANE_SIDE], [true, true])?,
        PLANE_AGENTS,
        SchedulePolicy::Staged { order: StageOrder::Random, seed: None },
    )?;

    // 4. Three-dimensional torus, 26 Moore neighbors per cell.
    let cube = run_economy(
        "cube",
        Grid::multi([CUBE_SIDE; 3], [true; 3])?,
        CUBE_AGENTS,
        SchedulePolicy::Random { seed: None },
    )?;

    // 5. Summary table.
    println!();
    println!("{:<10} {:>7} {:>7} {:>7} {:>7} {:>9}", "Run", "Agents", "Steps", "Max", "Gini", "Secs");
    println!("{}", "-".repeat(52));
    for o in [&line, &plane, &staged, &cube] {
        println!(
            "{:<10} {:>7} {:>7} {:>7} {:>7.3} {:>9.4}",
            o.label,
            o.wealths.len(),
            o.steps.0,
            o.wealths.iter().max().copied().unwrap_or(0),
            gini(&o.wealths),
            o.secs,
        );
    }
    println!();

    // 6. Wealth histogram for the 1-D run.
    let mut histogram: BTreeMap<u32, usize> = BTreeMap::new();
    for &w in &line.wealths {
        *histogram.entry(w).or_default() += 1;
    }
    println!("Wealth distribution ({}, world seed {}):", line.label, line.seed);
    for (wealth, count) in histogram {
        println!("  {wealth:>3} | {}", "#".repeat(count));
    }

    let total: u32 = line.wealths.iter().sum();
    ensure!(
        total as usize == LINE_AGENTS * INITIAL_WEALTH as usize,
        "wealth not conserved: {total} units held by {LINE_AGENTS} agents"
    );
    Ok(())
}

use std::env;
use std::time::Instant;

use greedy_gnomes::utils::{random_grid, RandomGridConfig};
use greedy_gnomes::{check_exhaustive_fits, DynamicProgramming, Exhaustive, GnomesSolver, Grid};
use rand::{rngs::StdRng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("gnome_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Greedy Gnomes Probe: exhaustive search vs dynamic programming");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Random square grids of growing size are solved by both algorithms.");
    eprintln!("  • Correctness: both solvers agree on gold (up to {} steps)", options.verify_limit);
    eprintln!("  • Performance: wall-clock time and RSS delta per run");
    eprintln!("  • Seed: {}", options.seed);
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Exhaustive search...");
    eprintln!("      Exponential in rows + columns; small grids only.");
    measurements.extend(run_solver(
        &Exhaustive,
        &DynamicProgramming,
        EXHAUSTIVE_SIZES,
        &options,
        &mut sys,
    ));
    eprintln!();

    eprintln!("[2/2] Dynamic programming...");
    eprintln!("      Quadratic in the grid side.");
    measurements.extend(run_solver(
        &DynamicProgramming,
        &Exhaustive,
        DYN_PROG_SIZES,
        &options,
        &mut sys,
    ));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("gnome_probe output error: {err}");
        std::process::exit(1);
    }
}

const EXHAUSTIVE_SIZES: &[usize] = &[2, 3, 4, 5, 6, 7, 8, 9, 10];
const DYN_PROG_SIZES: &[usize] = &[4, 8, 16, 32, 64, 128, 256];

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    seed: u64,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 19usize;
        let mut seed = 42u64;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::parse(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::parse(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_verify_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_verify_limit(&value)?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = parse_seed(value)?;
            } else if arg == "--seed" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --seed".to_string())?
                    .into();
                seed = parse_seed(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            seed,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin gnome_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest rows + columns - 1 checked against exhaustive search (default: 19)
  --seed <N>                    Seed for the random grids (default: 42)
  -h, --help                    Print this help message

Examples:
  cargo run --bin gnome_probe
  cargo run --release --bin gnome_probe -- --format table --verify-limit 15
"
        );
    }
}

fn parse_verify_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| "seed must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    solver: &'static str,
    size_desc: String,
    gold: u64,
    steps: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_solver(
    solver: &dyn GnomesSolver,
    reference: &dyn GnomesSolver,
    sizes: &[usize],
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    let total = sizes.len();
    let config = RandomGridConfig::default();

    sizes
        .iter()
        .enumerate()
        .filter_map(|(idx, &side)| {
            eprint!("      [{}/{}] Testing {side}x{side}... ", idx + 1, total);
            // Same seed per size, so both solvers see identical grids.
            let mut rng = StdRng::seed_from_u64(options.seed ^ side as u64);
            let grid = match random_grid(&mut rng, side, side, &config) {
                Ok(grid) => grid,
                Err(err) => {
                    eprintln!("skipped: {err}");
                    return None;
                }
            };

            let before = rss_kib(sys);
            let start = Instant::now();
            let path = solver.solve(&grid);
            let wall_s = start.elapsed().as_secs_f64();
            let after = rss_kib(sys);

            let (status, detail) = verify(reference, &grid, path.total_gold(), options);
            let m = Measurement {
                solver: solver.name(),
                size_desc: format!("{side}x{side}"),
                gold: path.total_gold(),
                steps: path.step_count(),
                wall_s,
                rss_delta_kib: after.saturating_sub(before),
                verification_status: status,
                verification_detail: detail,
            };
            eprintln!(
                "{} gold={}, steps={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                m.gold,
                m.steps,
                m.wall_s,
                m.verification_status.label()
            );
            Some(m)
        })
        .collect()
}

/// Compare `gold` against `reference` when the grid is small enough.
fn verify(
    reference: &dyn GnomesSolver,
    grid: &Grid,
    gold: u64,
    options: &Options,
) -> (VerificationStatus, Option<String>) {
    if grid.max_steps() > options.verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    if let Err(err) = check_exhaustive_fits(grid) {
        return (VerificationStatus::NotChecked, Some(err.to_string()));
    }
    let expected = reference.solve(grid).total_gold();
    if expected == gold {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("{} found {expected}, got {gold}", reference.name())),
        )
    }
}

fn print_summary(measurements: &[Measurement]) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let failed: Vec<&Measurement> = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .collect();
    for m in &failed {
        eprintln!(
            "  ✗ {} ({}): {}",
            m.solver,
            m.size_desc,
            m.verification_detail.as_deref().unwrap_or("")
        );
    }

    eprintln!("  size      exhaustive_s  dyn_prog_s  speedup");
    for row in head_to_head(measurements) {
        let speedup = if row.dyn_prog_s > 0.0 {
            format!("{:.1}x", row.exhaustive_s / row.dyn_prog_s)
        } else {
            "-".to_string()
        };
        eprintln!(
            "  {:<8}  {:>12.4}  {:>10.4}  {:>7}",
            row.size_desc, row.exhaustive_s, row.dyn_prog_s, speedup
        );
    }

    if failed.is_empty() {
        eprintln!("✓ All verified runs agree across solvers.");
    } else {
        eprintln!("✗ {} run(s) disagree across solvers.", failed.len());
    }
    eprintln!();
}

struct HeadToHead<'a> {
    size_desc: &'a str,
    exhaustive_s: f64,
    dyn_prog_s: f64,
}

/// Timings of both solvers on every size they were both run on, in the
/// order the exhaustive runs appear.
fn head_to_head(measurements: &[Measurement]) -> Vec<HeadToHead<'_>> {
    let dyn_prog = DynamicProgramming.name();
    measurements
        .iter()
        .filter(|m| m.solver == Exhaustive.name())
        .filter_map(|ex| {
            measurements
                .iter()
                .find(|m| m.solver == dyn_prog && m.size_desc == ex.size_desc)
                .map(|dp| HeadToHead {
                    size_desc: &ex.size_desc,
                    exhaustive_s: ex.wall_s,
                    dyn_prog_s: dp.wall_s,
                })
        })
        .collect()
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("solver,size,gold,steps,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.3},{},{},\"{}\"",
            m.solver,
            m.size_desc,
            m.gold,
            m.steps,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "solver".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.solver.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>10}  {:>8}  {:>12}  {:>14}  {:>12}  {}",
        "solver", "size", "gold", "steps", "wall_s", "rss_delta_kib", "status", "detail",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<10}  {:-<8}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>10}  {:>8}  {:>12.3}  {:>14}  {:>12}  {}",
            m.solver,
            m.size_desc,
            m.gold,
            m.steps,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"solver\":\"{}\",\"size\":\"{}\",\"gold\":{},\"steps\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.solver,
            m.size_desc,
            m.gold,
            m.steps,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

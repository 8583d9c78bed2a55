use std::time::{Duration, Instant, SystemTime};

use apex_core::ArrayHeap;
use bench_common::{get_current_workspace, WorkloadReport, TEMP_RESULTS_PATH};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{distributions::Standard, prelude::Distribution, thread_rng, Rng};
use strum_macros::AsRefStr;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Clean,
    Bench(BenchArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, AsRefStr, Default)]
pub enum KeyType {
    #[default]
    U32,
    I32,
    U64,
    I64,
    U128,
    I128,
}

#[derive(ValueEnum, Clone, Copy, Debug, AsRefStr, Default)]
pub enum Workload {
    /// Push every entry, then drain the heap.
    #[default]
    Push,
    /// Interleave pushes with pops so the heap churns at half size.
    PushPop,
    /// Heapify all entries in one shot, then drain the heap.
    Heapify,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    #[arg(long, help = "Numeric key type.")]
    pub key_type: Option<KeyType>,

    #[arg(
        long,
        help = "Number of entries pushed through the heap.",
        default_value_t = 65536
    )]
    pub size: usize,

    #[arg(long, help = "Workload shape to run.")]
    pub workload: Option<Workload>,
}

// Values carry the insertion position so that the payload costs the same
// for every key type under test.
fn run_workload<K>(workload: Workload, size: usize) -> (Duration, Duration, usize)
where
    K: Ord + Copy,
    Standard: Distribution<K>,
{
    let keys: Vec<K> = thread_rng().sample_iter(Standard).take(size).collect();

    match workload {
        Workload::Push => {
            let start = Instant::now();
            let mut heap = ArrayHeap::with_capacity(size);
            for (position, &key) in keys.iter().enumerate() {
                heap.push(key, position);
            }
            let fill = start.elapsed();
            let peak_len = heap.len();

            let start = Instant::now();
            while heap.pop().is_some() {}
            (fill, start.elapsed(), peak_len)
        }
        Workload::PushPop => {
            let mut heap = ArrayHeap::with_capacity(size);
            let mut peak_len = 0;

            let start = Instant::now();
            for (position, &key) in keys.iter().enumerate() {
                heap.push(key, position);
                peak_len = peak_len.max(heap.len());

                if position % 2 == 1 {
                    let _ = heap.pop();
                }
            }
            let fill = start.elapsed();

            let start = Instant::now();
            while heap.pop().is_some() {}
            (fill, start.elapsed(), peak_len)
        }
        Workload::Heapify => {
            let start = Instant::now();
            let mut heap: ArrayHeap<K, usize> = keys.iter().copied().zip(0usize..).collect();
            let fill = start.elapsed();
            let peak_len = heap.len();

            let start = Instant::now();
            while heap.pop().is_some() {}
            (fill, start.elapsed(), peak_len)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Get the current path to current workspace so that we have consistent absolute paths
    let current_workspace = get_current_workspace();
    let temp_results_path = current_workspace.join(TEMP_RESULTS_PATH);

    let cli = Cli::parse();
    match &cli.command {
        Commands::Clean => {
            if temp_results_path.exists() {
                std::fs::remove_dir_all(temp_results_path)?;
            }
        }
        Commands::Bench(args) => {
            if !temp_results_path.exists() {
                std::fs::create_dir(temp_results_path.clone())?;
            }

            let key_type = args.key_type.unwrap_or_default();
            let workload = args.workload.unwrap_or_default();

            let (fill, drain, peak_len) = match key_type {
                KeyType::U32 => run_workload::<u32>(workload, args.size),
                KeyType::I32 => run_workload::<i32>(workload, args.size),
                KeyType::U64 => run_workload::<u64>(workload, args.size),
                KeyType::I64 => run_workload::<i64>(workload, args.size),
                KeyType::U128 => run_workload::<u128>(workload, args.size),
                KeyType::I128 => run_workload::<i128>(workload, args.size),
            };

            let report = WorkloadReport {
                key_type: key_type.as_ref().to_string(),
                workload: workload.as_ref().to_string(),
                size: args.size,
                fill_ns: fill.as_nanos(),
                drain_ns: drain.as_nanos(),
                peak_len,
            };

            let time = humantime::format_rfc3339_seconds(SystemTime::now()).to_string();
            let report_path = temp_results_path.join(format!("bench_{}.json", time));
            std::fs::write(report_path.clone(), serde_json::to_string(&report)?)?;

            println!(
                "{} / {} over {} entries: fill {}, drain {}",
                workload.as_ref(),
                key_type.as_ref(),
                args.size,
                humantime::format_duration(fill),
                humantime::format_duration(drain),
            );
            println!("Report written to {}", report_path.display());
        }
    }

    Ok(())
}

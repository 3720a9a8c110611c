// main.rs
//
// Batch driver: solves the fill-plane offset across a list of inclination
// angles with both volume models and prints the result tables.

use clap::Parser;
use log::info;

use barrelfill::{
    run_sweep, Cylinder, Real, SampleSet, SolverOptions, SweepAxis,
};

#[derive(Parser, Debug)]
#[command(name = "barrelfill", about = "Inclined-barrel fill-level solver")]
struct Args {
    /// Barrel radius (cm)
    #[arg(long, default_value_t = 37.5)]
    radius: Real,

    /// Barrel height (cm)
    #[arg(long, default_value_t = 100.0)]
    height: Real,

    /// Target liquid volume (cm^3)
    #[arg(long, default_value_t = 58315.81)]
    target_volume: Real,

    /// Inclination angles to sweep, in degrees
    #[arg(long, value_delimiter = ',',
          default_value = "89.9,80,70,60,50,40,30,20,10,0.1")]
    angles: Vec<Real>,

    /// Monte Carlo sample count
    #[arg(long, default_value_t = 1_000_000)]
    samples: usize,

    /// Monte Carlo seed
    #[arg(long, default_value_t = 123)]
    seed: u64,

    /// Absolute volume tolerance for the Monte Carlo bisection (cm^3)
    #[arg(long, default_value_t = 50.0)]
    volume_tol: Real,

    /// Skip the Monte Carlo sweep
    #[arg(long)]
    exact_only: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let barrel = Cylinder::new(args.radius, args.height)?;
    let options = SolverOptions {
        volume_tol: args.volume_tol,
        ..SolverOptions::default()
    };
    let axis = SweepAxis::Angle {
        cylinder: barrel,
        target_volume: args.target_volume,
        angles_deg: args.angles.clone(),
    };

    // 1) Exact model, Brent inversion.
    info!("solving exact sweep over {} angles", args.angles.len());
    let exact = run_sweep(&axis, None, &options)?;

    println!(" Alpha (deg) |        b (cm) |      Volume (cm^3)");
    println!("---------------------------------------------------");
    for rec in &exact {
        println!(
            "{:11.1} | {:13.6} | {:18.6}",
            rec.angle_deg, rec.offset, rec.v_check
        );
    }

    if args.exact_only {
        return Ok(());
    }

    // 2) Monte Carlo model, bisection, with wetted-surface estimates.
    info!("generating {} Monte Carlo samples (seed {})", args.samples, args.seed);
    let samples = SampleSet::generate(barrel, args.samples, args.seed)?;
    info!("sampling complete");
    let mc = run_sweep(&axis, Some(&samples), &options)?;

    println!();
    println!(" Alpha (deg) |        b (cm) |   MC Volume (cm^3) |  Surface Area (cm^2)");
    println!("--------------------------------------------------------------------------");
    for rec in &mc {
        println!(
            "{:11.1} | {:13.6} | {:18.2} | {:19.2}",
            rec.angle_deg,
            rec.offset,
            rec.v_check,
            rec.surface_area.unwrap_or(0.0)
        );
    }

    Ok(())
}

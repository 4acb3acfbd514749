//! Wind a CSV list of cables onto a CSV list of reels, in order, and write
//! a per-placement CSV report.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use coilwind_core::loader::{CableRow, ReelRow};
use coilwind_core::report::{self, PlacementReport};
use coilwind_core::track_selector::Objective;
use coilwind_core::{allocate, CableTable};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Wind cables onto reels in concentric radial layers", long_about = None)]
struct Args {
    /// CSV file listing the reels, in the order they should be filled
    #[arg(long)]
    reels: PathBuf,
    /// CSV file listing the cables to wind
    #[arg(long)]
    cables: PathBuf,
    /// Write the per-placement report to `OUTPUT.csv`
    #[arg(short, long)]
    output: PathBuf,
    /// Tie-break applied by the track selector among equally wide layers
    #[arg(long, value_enum, default_value = "width-only")]
    objective: ObjectiveArg,
}

/// CLI-facing mirror of [`Objective`]; `clap::ValueEnum` needs a type it
/// owns to derive `--help`'s possible-value listing from.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ObjectiveArg {
    WidthOnly,
    WidthThenLength,
    WidthThenBalance,
}

impl From<ObjectiveArg> for Objective {
    fn from(arg: ObjectiveArg) -> Self {
        match arg {
            ObjectiveArg::WidthOnly => Objective::WidthOnly,
            ObjectiveArg::WidthThenLength => Objective::WidthThenLength,
            ObjectiveArg::WidthThenBalance => Objective::WidthThenBalance,
        }
    }
}

/// One row of the per-placement CSV report: reel- and layer-level fields
/// are repeated on every placement row so the report stays flat.
#[derive(Debug, serde::Serialize)]
struct Row {
    reel_id: String,
    reel_inner_diameter_m: f64,
    reel_outer_diameter_m: f64,
    reel_flange_width_m: f64,
    reel_max_mass_ton: f64,
    reel_current_mass_ton: f64,
    reel_ring_volume_m3: f64,
    reel_volume_cap_m3: f64,
    reel_used_volume_m3: f64,
    reel_occupancy: f64,
    layer_index: usize,
    layer_base_diameter_m: f64,
    layer_thickness_m: f64,
    layer_used_width_m: f64,
    layer_pct_used: f64,
    cable_id: String,
    cable_diameter_m: f64,
    allocated_length_m: f64,
    mid_radius_m: f64,
    tracks: u32,
    step_m: f64,
    side: &'static str,
    mass_contribution_ton: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut reel_rows_reader = csv::Reader::from_path(&args.reels)
        .with_context(|| format!("failed to open `{}`", args.reels.display()))?;
    let reel_rows: Vec<ReelRow> = reel_rows_reader
        .deserialize()
        .collect::<Result<_, _>>()
        .with_context(|| format!("failed to parse `{}`", args.reels.display()))?;

    let mut cable_rows_reader = csv::Reader::from_path(&args.cables)
        .with_context(|| format!("failed to open `{}`", args.cables.display()))?;
    let cable_rows: Vec<CableRow> = cable_rows_reader
        .deserialize()
        .collect::<Result<_, _>>()
        .with_context(|| format!("failed to parse `{}`", args.cables.display()))?;

    let reels =
        coilwind_core::loader::load_reels(reel_rows).context("invalid reel in reels CSV")?;
    let mut cables = CableTable::new();
    coilwind_core::loader::load_cables(&mut cables, cable_rows)
        .context("invalid cable in cables CSV")?;

    let spinner = ProgressBar::new_spinner().with_style(
        ProgressStyle::default_spinner().tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(format!(
        "Winding {} cable(s) onto {} reel(s)...",
        cables.len(),
        reels.len()
    ));

    let output = allocate(reels, &cables, args.objective.into());
    spinner.finish_and_clear();

    let output_path = args.output.with_extension("csv");
    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("failed to create `{}`", output_path.display()))?;
    let mut wtr = std::io::BufWriter::new(file);
    wtr.write_all(
        format!(
            "# {} {}\n# {}\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            std::env::args().collect::<Vec<_>>().join(" ")
        )
        .as_bytes(),
    )
    .context("failed to write csv header")?;
    let mut wtr = csv::Writer::from_writer(wtr);

    let mut total_allocated_m = 0.0;
    for reel in &output.reels_used {
        let reel_report = report::report_for(reel, &cables);
        for (layer_index, layer) in reel_report.layers.iter().enumerate() {
            for placement in &layer.placements {
                total_allocated_m += placement.allocated_length_m;
                wtr.serialize(placement_row(&reel_report, layer_index, layer, placement))
                    .context("failed to write row to csv report")?;
            }
        }
    }
    wtr.flush().context("failed to flush csv report")?;
    eprintln!("Created `{}`", output_path.display());

    println!(
        "{} reel(s) used, {:.3} m of cable allocated, {} cable(s) left with residual length",
        output.reels_used.len(),
        total_allocated_m,
        output.cables_unallocated.len(),
    );
    for &id in &output.cables_unallocated {
        let cable = &cables[id];
        let residual_m = output.residual_m.get(&id).copied().unwrap_or(0.0);
        println!(
            "  {}: {:.3} m of {:.3} m still unallocated",
            cable.code(),
            residual_m,
            cable.required_length().get::<uom::si::length::meter>(),
        );
    }

    if !output.cables_unallocated.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn placement_row(
    reel_report: &report::ReelReport,
    layer_index: usize,
    layer: &report::LayerReport,
    placement: &PlacementReport,
) -> Row {
    Row {
        reel_id: reel_report.reel_id.clone(),
        reel_inner_diameter_m: reel_report.inner_diameter_m,
        reel_outer_diameter_m: reel_report.outer_diameter_m,
        reel_flange_width_m: reel_report.flange_width_m,
        reel_max_mass_ton: reel_report.max_mass_ton,
        reel_current_mass_ton: reel_report.current_mass_ton,
        reel_ring_volume_m3: reel_report.ring_volume_m3,
        reel_volume_cap_m3: reel_report.volume_cap_m3,
        reel_used_volume_m3: reel_report.used_volume_m3,
        reel_occupancy: reel_report.occupancy,
        layer_index,
        layer_base_diameter_m: layer.base_diameter_m,
        layer_thickness_m: layer.thickness_m,
        layer_used_width_m: layer.used_width_m,
        layer_pct_used: layer.pct_used,
        cable_id: placement.cable_id.clone(),
        cable_diameter_m: placement.diameter_m,
        allocated_length_m: placement.allocated_length_m,
        mid_radius_m: placement.mid_radius_m,
        tracks: placement.tracks,
        step_m: placement.step_m,
        side: placement.side,
        mass_contribution_ton: placement.mass_contribution_ton,
    }
}

//! hourly — drives one output stream file through two days of hourly records.
//!
//! ```text
//! RUST_LOG=debug cargo run -p hourly -- [ASCII|BINARY] [OUT_DIR]
//! ```
//!
//! The aggregated values are synthetic (a diurnal cycle); the point is to
//! exercise configuration, the per-timestep write, and the fatal path for an
//! unrecognized `OUT_FORMAT`.

use std::f64::consts::PI;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use log::{error, info};

use hydro_core::{Dmy, ModelSizing, OutVarMeta, OutputMetadata, VarId};
use hydro_output::{
    ByteOrder, FileFormat, OutputFileTarget, OutputStream, StreamEntry, StreamFileConfig, StreamVarConfig,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const N_LAYERS:   usize = 3;
const SNOW_BANDS: usize = 2;
const DT_SECS:    f64   = 3_600.0;
const SIM_HOURS:  u32   = 48;

// ── Configuration ─────────────────────────────────────────────────────────────

fn metadata() -> Result<OutputMetadata> {
    Ok(OutputMetadata::new(vec![
        OutVarMeta::new("OUT_PREC", "mm", 1)
            .with_description("precipitation", "incoming precipitation"),
        OutVarMeta::new("OUT_EVAP", "mm", 1)
            .with_description("evaporation", "total net evaporation"),
        OutVarMeta::new("OUT_SOIL_MOIST", "mm", N_LAYERS)
            .with_description("soil moisture", "soil total moisture content per layer"),
        OutVarMeta::new("OUT_SWE_BAND", "mm", SNOW_BANDS)
            .with_description("snow water equivalent", "snow water equivalent per elevation band"),
    ])?)
}

fn stream_config(format: &str) -> StreamFileConfig {
    StreamFileConfig {
        format:     format.to_string(),
        byte_order: ByteOrder::Native,
        vars:       vec![
            StreamVarConfig::new("OUT_PREC", "OUT_TYPE_FLOAT", "%.4f"),
            StreamVarConfig::new("OUT_EVAP", "OUT_TYPE_FLOAT", "%.4f"),
            StreamVarConfig::new("OUT_SOIL_MOIST", "OUT_TYPE_DOUBLE", "%.2f"),
            StreamVarConfig::new("OUT_SWE_BAND", "OUT_TYPE_USINT", "%d"),
        ],
    }
}

// ── Synthetic aggregation stage ──────────────────────────────────────────────

fn aggregate(metadata: &OutputMetadata, hour: u32) -> OutputStream {
    let phase = 2.0 * PI * f64::from(hour % 24) / 24.0;
    let mut stream = OutputStream::default();
    for (id, meta) in metadata.iter() {
        let values: Vec<f64> = (0..meta.nelem)
            .map(|e| synthetic_value(id, e, phase))
            .collect();
        stream.push(StreamEntry::from_values(id, &values));
    }
    stream
}

fn synthetic_value(id: VarId, element: usize, phase: f64) -> f64 {
    let e = element as f64;
    match id.0 {
        0 => (phase.sin() * 2.0).max(0.0),
        1 => 0.1 + 0.05 * phase.cos(),
        2 => 120.0 + 40.0 * e + 5.0 * phase.sin(),
        _ => 300.0 * (e + 1.0) - 2.0 * phase.cos(),
    }
}

fn dmy_for_hour(hour: u32) -> Dmy {
    Dmy::new(2000, 1, 1 + (hour / 24) as u8, (hour % 24) * 3_600)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let format_arg = args.next().unwrap_or_else(|| "ASCII".to_string());
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(std::env::temp_dir);

    // An unrecognized format is fatal: it has been logged by the parser and
    // no file is created.
    let format: FileFormat = match format_arg.parse() {
        Ok(f) => f,
        Err(e) => {
            error!("aborting: {e}");
            process::exit(1);
        }
    };

    let metadata = metadata()?;
    let sizing = ModelSizing::new(N_LAYERS, SNOW_BANDS)?;

    let ext = match format {
        FileFormat::Ascii => "txt",
        FileFormat::Binary => "bin",
    };
    let path = out_dir.join(format!("fluxes_2000-01-01.{ext}"));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;

    let mut target = OutputFileTarget::from_config(
        &stream_config(&format_arg),
        &metadata,
        &sizing,
        BufWriter::new(file),
    )?;

    let mut total_bytes = 0;
    for hour in 0..SIM_HOURS {
        let stream = aggregate(&metadata, hour);
        let stats = target
            .write_data(&stream, &dmy_for_hour(hour), DT_SECS)
            .with_context(|| format!("writing record for hour {hour}"))?;
        total_bytes += stats.bytes;
    }
    target.finish()?;

    info!(
        "wrote {} {format} records ({total_bytes} bytes) to {}",
        target.records_written(),
        path.display()
    );
    Ok(())
}

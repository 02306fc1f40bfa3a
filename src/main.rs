use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;
use vector_common::{vecmath, Point};

// Define modules used by main
mod config;
mod render;
mod sketch;

use config::SketchConfig;
use render::ImageSurface;
use sketch::VectorField;

/// Command-line arguments for the sketcher
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the sketch config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the configured output base filename
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();
    info!("Starting vector sketcher...");

    // --- Load Configuration ---
    let mut config = SketchConfig::load(&args.config)?;
    if let Some(output) = args.output {
        config.output.base_filename = output;
    }
    debug!("Sketch configuration: {:#?}", config);

    // --- Generate the Field ---
    info!(
        "Generating {} vectors (seed {})...",
        config.field.vector_count, config.field.seed
    );
    let start_time = Instant::now();
    let field = VectorField::generate(&config);
    info!(
        "Field ready: mean displacement {} | max length {:.2} | anchor spread {:.2} | coherence {:.3}",
        field.mean_vector(),
        field.max_length(),
        field.origin_spread(),
        field.coherence()
    );
    let centre = (config.field.max_x / 2.0, config.field.max_y / 2.0);
    let centroid = vecmath::average(field.origins.iter());
    debug!(
        "Anchor centroid {} sits at bearing {:.3} rad from the field centre",
        centroid,
        vecmath::relative_angle(&centre, &centroid)
    );

    // --- Render ---
    let mut surface = ImageSurface::new(
        config.canvas.width_px,
        config.canvas.height_px,
        config.field.max_x,
        config.field.max_y,
    );
    for (vector, origin) in field.vectors.iter().zip(field.origins.iter()) {
        vector.draw(&mut surface, origin);
    }

    let image_filename = format!("{}.png", config.output.base_filename);
    surface.save(&image_filename)?;
    info!(
        "Sketch saved to {} in {:.3} s",
        image_filename,
        start_time.elapsed().as_secs_f64()
    );

    // --- Save Vector Stats ---
    if config.output.save_csv {
        let filename = format!("{}_vectors.csv", config.output.base_filename);
        let mut writer = csv::Writer::from_path(&filename)?;
        writer.write_record(["x", "y", "length", "direction_rad"])?;
        for v in &field.vectors {
            writer.write_record(&[
                format!("{:.4}", v.x()),
                format!("{:.4}", v.y()),
                format!("{:.4}", v.length()),
                format!("{:.4}", v.direction()),
            ])?;
        }
        writer.flush()?;
        info!("Vector stats saved to {}", filename);
    } else {
        info!("Skipping CSV stats as per config (save_csv is false).");
    }

    Ok(())
}

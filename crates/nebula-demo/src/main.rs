//! Demo binary that generates a climate map and classifies it into biomes.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p nebula-demo` for the default 256x256 map.
//! Run with `cargo run -p nebula-demo -- --width 512 --seed 7` to override size and seed.

mod presets;

use std::path::PathBuf;

use clap::Parser;
use glam::DVec4;
use nebula_climate::{
    BiomeCatalog, BiomeCoverage, ClimateAxis, ClimateSample, Grid, MAX_BLEND, SliceParams,
    classify_map, climate_slice, dominant_map, generate_climate_map,
};
use nebula_config::{CliArgs, Config, default_config_dir};
use presets::BiomeStyle;
use tracing::{error, info, warn};

type DemoResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Generates the climate map and logs per-axis ranges plus the latitude gradient.
fn demonstrate_climate_map(config: &Config) -> DemoResult<Grid<ClimateSample>> {
    info!(
        "Starting climate map demonstration ({}x{})",
        config.map.width, config.map.height
    );

    let started = std::time::Instant::now();
    let climate = generate_climate_map(config.map.width, config.map.height, &config.climate)?;
    info!("Generated {} climate samples in {:?}", climate.len(), started.elapsed());

    for axis in ClimateAxis::ALL {
        let (min, max, sum) = climate.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), sample| {
                let v = sample.get(axis);
                (min.min(v), max.max(v), sum + v)
            },
        );
        info!(
            "  {:<16} min {:.3}  mean {:.3}  max {:.3}",
            axis.name(),
            min,
            sum / climate.len() as f64,
            max
        );
    }

    let row_mean = |y: usize| {
        climate.row(y).iter().map(|s| s.temperature).sum::<f64>() / climate.width() as f64
    };
    info!(
        "Mean temperature: pole row {:.3}, equator row {:.3} (latitude influence {:.2})",
        row_mean(0),
        row_mean(climate.height() / 2),
        config.climate.latitude_influence
    );

    Ok(climate)
}

/// Classifies every cell and logs coverage, blend statistics, and blended payload values.
fn demonstrate_classification(
    catalog: &BiomeCatalog<BiomeStyle>,
    climate: &Grid<ClimateSample>,
) {
    info!("Starting biome classification demonstration");

    let started = std::time::Instant::now();
    let blends = classify_map(catalog, climate);
    info!("Classified {} cells in {:?}", blends.len(), started.elapsed());

    let mut count_histogram = [0usize; MAX_BLEND + 1];
    let mut amplitude_sum = 0.0;
    let mut color_sum = DVec4::ZERO;
    for blend in blends.iter() {
        count_histogram[blend.count()] += 1;
        amplitude_sum += blend.blend_scalar(|b| b.payload.geology.amplitude);
        color_sum += blend.blend_vector(|b| b.payload.debug_color);
    }
    for (count, cells) in count_histogram.iter().enumerate().skip(1) {
        info!("  {count} biome(s) blended: {cells} cells");
    }
    if count_histogram[0] > 0 {
        warn!("{} cells resolved to no biome", count_histogram[0]);
    }
    let cells = blends.len() as f64;
    info!(
        "Mean blended amplitude {:.1}, mean debug color {:.2?}",
        amplitude_sum / cells,
        (color_sum / cells).to_array()
    );

    let center = blends[(blends.width() / 2, blends.height() / 2)];
    for entry in center.iter() {
        info!(
            "  center cell: {:<10} weight {:.3}  distance {:.5}  talus {:.0}  warp {:.2}",
            entry.biome.name,
            entry.weight,
            entry.distance,
            entry.biome.payload.geology.talus_angle,
            entry.biome.payload.geology.domain_warp_strength
        );
    }
    info!(
        "  center cell blended erosion strength {:.3}",
        center.blend_scalar(|b| b.payload.geology.erosion_strength)
    );

    let coverage = BiomeCoverage::from_dominant(&dominant_map(catalog, climate), catalog.len());
    let mut ranked: Vec<(usize, &str)> = catalog
        .biomes()
        .map(|(index, biome)| (index, biome.name.as_str()))
        .collect();
    ranked.sort_by(|a, b| coverage.counts[b.0].cmp(&coverage.counts[a.0]));
    for (index, name) in ranked {
        info!(
            "  {:<10} {:>6.2}%",
            name,
            coverage.fraction(index) * 100.0
        );
    }

    info!("Biome classification demonstration completed successfully");
}

/// Prints a temperature/moisture slice of the catalog as ASCII, one letter per biome.
fn demonstrate_climate_slice(catalog: &BiomeCatalog<BiomeStyle>) -> DemoResult<()> {
    info!("Starting climate slice demonstration (x: temperature, y: moisture)");

    let params = SliceParams {
        fixed: ClimateSample::new(0.5, 0.5, 0.6, 0.5, 0.0),
        resolution: 32,
        ..SliceParams::default()
    };
    let slice = climate_slice(catalog, &params)?;

    let glyph = |cell: &Option<usize>| {
        cell.and_then(|index| catalog.get(index))
            .and_then(|biome| biome.name.chars().next())
            .map_or('.', |c| c.to_ascii_uppercase())
    };
    // Wettest row first.
    for y in (0..slice.height()).rev() {
        let line: String = slice.row(y).iter().map(glyph).collect();
        info!("  {line}");
    }

    let coverage = BiomeCoverage::from_dominant(&slice, catalog.len());
    let present = coverage.counts.iter().filter(|&&n| n > 0).count();
    info!("{present} biomes visible in slice");
    Ok(())
}

fn run(config: &Config) -> DemoResult<()> {
    config.classifier.validate()?;
    let mut catalog = presets::default_catalog()?;
    config.classifier.apply_to(&mut catalog);
    catalog.validate()?;
    info!(
        "Loaded {} biomes (blend radius {}, weirdness weight {})",
        catalog.len(),
        catalog.blend_radius,
        catalog.axis_weights.weirdness
    );

    let climate = demonstrate_climate_map(config)?;
    demonstrate_classification(&catalog, &climate);
    demonstrate_climate_slice(&catalog)?;
    Ok(())
}

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        default_config_dir().unwrap_or_else(|e| {
            eprintln!("{e}, using current directory");
            PathBuf::from(".")
        })
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    nebula_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(&config) {
        error!("Climate preview failed: {e}");
        std::process::exit(1);
    }
}

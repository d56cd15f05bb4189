use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use skyindex_catalog::{load_catalog, CatalogConfig, PixelRange, Star, StarDao};
use skyindex_core::angle::AngleUnits;
use skyindex_core::Vector3;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "skyindex-query")]
#[command(about = "Load an ADC star catalog and query it by sky area")]
struct Cli {
    /// JSON catalog configuration; the flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// ReadMe holding the byte-by-byte description
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Fixed-width data file (.gz and .bz2 are decompressed)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Zero-based description block for the data file
    #[arg(long)]
    block: Option<usize>,

    /// Column holding the magnitude (unit "mag")
    #[arg(long)]
    magnitude_column: Option<String>,

    /// Sky resolution of the index in arcminutes
    #[arg(long)]
    resolution_arcmin: Option<f64>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print index statistics
    Info,
    /// Stars within a radius of a position, nearest first
    Cone {
        /// Right ascension in degrees
        ra: f64,
        /// Declination in degrees
        #[arg(allow_negative_numbers = true)]
        dec: f64,
        /// Search radius in degrees
        #[arg(long, default_value = "1.0")]
        radius: f64,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Stars whose pixel id lies in FIRST..=LAST
    Pixels {
        first: u64,
        last: u64,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// One output row; `distance_deg` is set for cone results only.
#[derive(serde::Serialize)]
struct StarRow {
    ra_deg: f64,
    dec_deg: f64,
    mag: Option<f64>,
    pixel: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_deg: Option<f64>,
}

impl StarRow {
    fn new(star: &Star, distance_deg: Option<f64>) -> Self {
        Self {
            ra_deg: star.ra().to_degrees(),
            dec_deg: star.dec().to_degrees(),
            mag: star.magnitude().value(),
            pixel: star.pixel_id(),
            distance_deg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = build_config(&cli)?;
    let dao = load_catalog(&config).with_context(|| {
        format!(
            "loading {} with {}",
            config.data.display(),
            config.metadata.display()
        )
    })?;

    match cli.command {
        Commands::Info => print_info(&dao),
        Commands::Cone {
            ra,
            dec,
            radius,
            limit,
            format,
        } => {
            if !(-90.0..=90.0).contains(&dec) {
                anyhow::bail!("declination {} is outside [-90, 90]", dec);
            }
            let center = Vector3::from_ra_dec(ra.degrees(), dec.degrees());
            let start = Instant::now();
            let mut matches = dao.stars_in_cone(&center, radius.degrees());
            info!(
                "Cone query matched {} stars in {:.2} ms",
                matches.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );
            if let Some(limit) = limit {
                matches.truncate(limit);
            }
            let rows: Vec<StarRow> = matches
                .iter()
                .map(|m| StarRow::new(m.star, Some(m.distance.to_degrees())))
                .collect();
            print_rows(&rows, format)?;
        }
        Commands::Pixels {
            first,
            last,
            format,
        } => {
            let rows: Vec<StarRow> = dao
                .stars_by_area([PixelRange::new(first, last)])
                .into_iter()
                .map(|star| StarRow::new(star, None))
                .collect();
            print_rows(&rows, format)?;
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::from_json_file(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(metadata) = &cli.metadata {
        config.metadata = metadata.clone();
    }
    if let Some(data) = &cli.data {
        config.data = data.clone();
    }
    if let Some(block) = cli.block {
        config.block = block;
    }
    if let Some(column) = &cli.magnitude_column {
        config.magnitude_column = Some(column.clone());
    }
    if let Some(arcmin) = cli.resolution_arcmin {
        config.resolution = arcmin.arc_minutes();
    }
    Ok(config)
}

fn print_info(dao: &StarDao) {
    let pix = dao.pixelization();
    println!("Stars:           {}", dao.len());
    println!("Occupied pixels: {} of {}", dao.pixel_count(), pix.npix());
    println!("HEALPix order:   {} (nside {}, NESTED)", pix.order(), pix.nside());
    println!(
        "Pixel size:      {:.2} arcmin",
        pix.pixel_size().to_arc_minutes()
    );
}

fn print_rows(rows: &[StarRow], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => print_csv(rows),
    }
    Ok(())
}

fn print_table(rows: &[StarRow]) {
    for (i, row) in rows.iter().enumerate() {
        let mag = row
            .mag
            .map(|m| format!("{:6.2}", m))
            .unwrap_or_else(|| format!("{:>6}", "-"));
        let dist = row
            .distance_deg
            .map(|d| format!(" Dist={:.4}°", d))
            .unwrap_or_default();
        println!(
            "{:4}: RA={:11.6}° Dec={:+10.6}° Mag={} Pixel={}{}",
            i + 1,
            row.ra_deg,
            row.dec_deg,
            mag,
            row.pixel,
            dist
        );
    }

    if rows.is_empty() {
        println!("No stars found.");
    } else {
        println!("\nTotal results: {}", rows.len());
    }
}

fn print_csv(rows: &[StarRow]) {
    println!("ra_deg,dec_deg,mag,pixel,distance_deg");
    for row in rows {
        println!(
            "{},{},{},{},{}",
            row.ra_deg,
            row.dec_deg,
            row.mag.map(|m| m.to_string()).unwrap_or_default(),
            row.pixel,
            row.distance_deg.map(|d| d.to_string()).unwrap_or_default()
        );
    }
}

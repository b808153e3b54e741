use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use wc_catalog::cobot_rating;
use wc_core::{WcError, as_kg, ensure_finite, kg, round_display};
use wc_impact::{ImpactInput, analyze_hardware_change, apply_impact};
use wc_project::{CellFile, ProjectError, load_cell, load_hardware, save_cell};
use wc_rules::{
    Dimension, ValidationContext, display_max_carry_weight, max_carry_weight,
    raw_material_bounds, raw_weight_bounds, validate_product,
};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Engine(#[from] WcError),

    #[error("'{0}' is not a product id")]
    InvalidProductId(String),

    #[error("no product with id {0} in the cell file")]
    UnknownProduct(Uuid),

    #[error("failed to render output: {0}")]
    Render(String),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "wc-cli")]
#[command(about = "Work-cell product configuration checks", long_about = None)]
struct Cli {
    /// Print machine-readable output as JSON instead of YAML
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every product of a cell file against its hardware
    Validate {
        /// Path to the cell file (.json or YAML)
        cell_path: PathBuf,
    },
    /// Show the raw-material bounds for one product
    Bounds {
        /// Path to the cell file (.json or YAML)
        cell_path: PathBuf,
        /// Product id (uuid)
        product_id: String,
    },
    /// Show the net carry weight left for the workpiece
    Capacity {
        /// Path to the cell file (.json or YAML)
        cell_path: PathBuf,
    },
    /// Preview what a new hardware configuration does to the products
    Impact {
        /// Path to the cell file (.json or YAML)
        cell_path: PathBuf,
        /// Path to the proposed hardware configuration
        hardware_path: PathBuf,
        /// Accept the change and write the updated cell file here
        #[arg(long)]
        apply: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Validate { cell_path } => cmd_validate(&cell_path, json),
        Commands::Bounds {
            cell_path,
            product_id,
        } => cmd_bounds(&cell_path, &product_id),
        Commands::Capacity { cell_path } => cmd_capacity(&cell_path),
        Commands::Impact {
            cell_path,
            hardware_path,
            apply,
        } => cmd_impact(&cell_path, &hardware_path, apply.as_deref(), json),
    }
}

fn render<T: Serialize>(value: &T, json: bool) -> CliResult<String> {
    if json {
        serde_json::to_string_pretty(value).map_err(|e| CliError::Render(e.to_string()))
    } else {
        serde_yaml::to_string(value).map_err(|e| CliError::Render(e.to_string()))
    }
}

/// Tool weight comes from robot telemetry and may be garbage.
fn tool_weight(cell: &CellFile) -> CliResult<f64> {
    Ok(ensure_finite(cell.tool_weight, "tool weight")?)
}

fn context(cell: &CellFile) -> CliResult<ValidationContext<'_>> {
    Ok(ValidationContext::new(
        &cell.hardware,
        cobot_rating(cell.cobot),
        tool_weight(cell)?,
    ))
}

fn cmd_validate(cell_path: &Path, json: bool) -> CliResult<()> {
    let cell = load_cell(cell_path)?;
    let ctx = context(&cell)?;
    tracing::info!(products = cell.products.len(), path = %cell_path.display(), "validating cell");

    let mut failing = 0;
    for product in &cell.products {
        let errors = validate_product(product, &ctx);
        if errors.is_empty() {
            println!("✓ {} ({})", product.name, product.id);
            continue;
        }
        failing += 1;
        println!("✗ {} ({}): {} field(s)", product.name, product.id, errors.len());
        for (field, problems) in errors.iter() {
            for problem in problems {
                println!("    {}: {}", field.label(), problem);
            }
        }
        println!("{}", render(&errors, json)?);
    }

    println!(
        "{} of {} product(s) valid",
        cell.products.len() - failing,
        cell.products.len()
    );
    Ok(())
}

fn cmd_bounds(cell_path: &Path, product_id: &str) -> CliResult<()> {
    let cell = load_cell(cell_path)?;
    let id = Uuid::parse_str(product_id)
        .map_err(|_| CliError::InvalidProductId(product_id.to_string()))?;
    let product = cell
        .products
        .iter()
        .find(|p| p.id == id)
        .ok_or(CliError::UnknownProduct(id))?;

    let round = product.config.round_product;
    println!(
        "{} ({})",
        product.name,
        if round { "round" } else { "rectangular" }
    );
    for dim in Dimension::ALL {
        if let Some(bounds) = raw_material_bounds(dim, round, &cell.hardware) {
            println!(
                "  {:<9} {} .. {} mm",
                format!("{dim:?}"),
                round_display(bounds.min),
                round_display(bounds.max)
            );
        }
    }
    let weight = raw_weight_bounds(&context(&cell)?);
    println!(
        "  {:<9} {} .. {} kg",
        "Weight",
        round_display(weight.min),
        round_display(weight.max)
    );
    Ok(())
}

fn cmd_capacity(cell_path: &Path) -> CliResult<()> {
    let cell = load_cell(cell_path)?;
    let rating = cobot_rating(cell.cobot);
    let tool_kg = tool_weight(&cell)?;
    let tool = kg(tool_kg);

    println!("Cobot: {}", cell.cobot.display_name());
    println!("  Rated max carry: {} kg", round_display(rating.carry_weight_max));
    println!("  Tool weight:     {} kg", round_display(tool_kg));
    let raw = as_kg(max_carry_weight(&cell.hardware, rating, tool));
    let shown = as_kg(display_max_carry_weight(&cell.hardware, rating, tool));
    println!("  Net carry:       {} kg", round_display(shown));
    if raw < 0.0 {
        tracing::warn!(net = raw, "cobot is overloaded before picking any part");
    }
    Ok(())
}

fn cmd_impact(
    cell_path: &Path,
    hardware_path: &Path,
    apply: Option<&Path>,
    json: bool,
) -> CliResult<()> {
    let cell = load_cell(cell_path)?;
    let next = load_hardware(hardware_path)?;

    let report = analyze_hardware_change(&ImpactInput {
        prev_hardware: &cell.hardware,
        next_hardware: &next,
        cobot: cobot_rating(cell.cobot),
        tool_weight: tool_weight(&cell)?,
        products: &cell.products,
    });

    println!("Activate:   {}", report.activate.len());
    for impact in &report.activate {
        println!("  + {} ({})", impact.name, impact.product_id);
    }
    println!("Invalidate: {}", report.invalidate.len());
    for impact in &report.invalidate {
        println!("  - {} ({}): {} field(s)", impact.name, impact.product_id, impact.errors.len());
        println!("{}", render(&impact.errors, json)?);
    }
    println!("Unaffected: {}", report.unaffected.len());

    if report.requires_confirmation() {
        println!("This change alters product states and needs confirmation.");
    }

    if let Some(out) = apply {
        let updated = CellFile {
            hardware: next,
            products: apply_impact(&cell.products, &report),
            ..cell
        };
        save_cell(out, &updated)?;
        println!("✓ Updated cell written to {}", out.display());
    }
    Ok(())
}

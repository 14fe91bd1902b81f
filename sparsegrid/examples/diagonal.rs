//! Builds a matrix with a filled diagonal and anti-diagonal, prints it as a
//! grid, then lists every live cell.
//!
//! Run with: cargo run --example diagonal -- --math-order-dimensions

use clap::{ArgAction, Parser};
use log::info;

use sparsegrid::{parse_coordinate, version, Coordinate, MatrixConfig, SparseMatrix};

#[derive(Parser, Debug)]
#[command(about = "Sparse matrix demo: diagonal and anti-diagonal of a square grid")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Print coordinates in math order (column x row) instead of row x column
    #[arg(long = "math-order-dimensions", visible_alias = "math_oder_dimensions")]
    math_order: bool,

    /// Number of rows and columns in the grid
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Print the value at a coordinate (ROWxCOL or ROW,COL); may be repeated
    #[arg(long = "probe", value_name = "COORD", value_parser = parse_coordinate::<2>)]
    probes: Vec<Coordinate<2>>,

    /// Print the version of the matrix library
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    version: bool,

    /// About this program
    #[arg(short = '?', long, action = ArgAction::Help)]
    help: Option<bool>,
}

fn build_diagonal(size: usize) -> SparseMatrix<i64, 2> {
    let density = if size == 0 { 0.0 } else { 2.0 / size as f64 };
    let capacity = MatrixConfig::<i64>::estimated_capacity(size, 2, density);
    let mut matrix = SparseMatrix::with_config(MatrixConfig::new(0).with_capacity(capacity));

    for i in 0..size {
        matrix.at_mut(i).at(i).set(i as i64);
    }
    for i in 0..size {
        let column = size - 1 - i;
        matrix.at_mut(i).at(column).set(column as i64);
    }
    matrix
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.version {
        println!("Version matrix: {}", version());
        return Ok(());
    }

    let matrix = build_diagonal(cli.size);
    info!("built {}x{} matrix with {} live cells", cli.size, cli.size, matrix.size());

    for row in 0..cli.size {
        let line: Vec<String> = (0..cli.size)
            .map(|column| matrix.at(row).at(column).get().to_string())
            .collect();
        println!("{}", line.join(" "));
    }

    println!("{}", matrix.size());

    for cell in &matrix {
        let coordinate = if cli.math_order {
            cell.coordinate.reversed()
        } else {
            cell.coordinate
        };
        println!("{coordinate} {}", cell.value);
    }

    for probe in &cli.probes {
        println!("{probe} = {}", matrix[*probe]);
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use nalgebra::{Matrix3, Vector3};

use nc_twinning::config::DEFAULT_THRESHOLD;
use nc_twinning::geometry::{angle_between_planes, lattice_vectors_ab};
use nc_twinning::numerics::{apply_threshold, rotation_matrix, rotation_matrix_degrees};
use nc_twinning::twinning::{NormalSense, TwinSystem};

#[derive(Parser)]
#[command(name = "nc-twinning")]
#[command(about = "Orientation relationships and trace geometry of non-conventional twins")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Orientation relationship rL of a non-conventional twin in the reference frame
    Or {
        /// Twin plane K1 in the crystal frame, e.g. "1,1,0"
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        k1: Vector3<f64>,

        /// Shear direction eta1 in the crystal frame, e.g. "1,-1,0"
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        eta1: Vector3<f64>,

        /// Transformation matrix rPm, nine row-major values
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        rpm: Matrix3<f64>,

        /// Lattice parameter of a
        #[arg(short, long, default_value_t = 1.0)]
        a: f64,

        /// The K1 normal points away from the twin
        #[arg(long)]
        negative_normal: bool,

        /// Threshold applied to the printed matrix
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Print s, rm, rl, rS and rL as JSON
        #[arg(long)]
        json: bool,
    },
    /// Angle in degrees between the traces of two planes on the reference [x,y] plane
    Angle {
        /// Transformation matrix rPm, nine row-major values
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        rpm: Matrix3<f64>,

        /// First plane in the crystal frame
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        k1: Vector3<f64>,

        /// Second plane in the crystal frame
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        k2: Vector3<f64>,
    },
    /// Rotation matrix about an axis
    Rotation {
        /// Rotation axis (need not be normalized)
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        axis: Vector3<f64>,

        /// Rotation angle (radians unless --degrees)
        #[arg(long, allow_hyphen_values = true)]
        theta: f64,

        /// Interpret theta in degrees
        #[arg(long)]
        degrees: bool,
    },
    /// In-plane components of the lattice vectors a and b in the reference frame
    LatticeVectors {
        /// Transformation matrix rPm, nine row-major values
        #[arg(long, value_parser = parse_matrix, allow_hyphen_values = true)]
        rpm: Matrix3<f64>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    debug!("nc-twinning v{}", nc_twinning::VERSION);

    match cli.command {
        Commands::Or {
            k1,
            eta1,
            rpm,
            a,
            negative_normal,
            threshold,
            json,
        } => {
            let sense = if negative_normal {
                NormalSense::Negative
            } else {
                NormalSense::Positive
            };
            info!("Computing OR for K1 = {k1:?}, eta1 = {eta1:?}, a = {a}");
            let twin = TwinSystem::nc_twin()
                .analyze(&k1, &eta1, &rpm, a, sense)
                .context("orientation relationship could not be computed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&twin)?);
            } else {
                println!("s = {:.9}", twin.shear);
                print_matrix(&apply_threshold(twin.orientation, threshold));
            }
        }
        Commands::Angle { rpm, k1, k2 } => {
            let phi = angle_between_planes(&rpm, &k1, &k2)
                .context("angle between plane traces could not be computed")?;
            println!("{phi:.6}");
        }
        Commands::Rotation {
            axis,
            theta,
            degrees,
        } => {
            let r = if degrees {
                rotation_matrix_degrees(&axis, theta)
            } else {
                rotation_matrix(&axis, theta)
            }
            .context("rotation matrix could not be built")?;
            print_matrix(&r);
        }
        Commands::LatticeVectors { rpm, json } => {
            let arrows = lattice_vectors_ab(&rpm);
            if json {
                println!("{}", serde_json::to_string_pretty(&arrows)?);
            } else {
                println!("a = [{:.6}, {:.6}]", arrows.a.x, arrows.a.y);
                println!("b = [{:.6}, {:.6}]", arrows.b.x, arrows.b.y);
                let gamma = arrows
                    .gamma_degrees()
                    .context("lattice vectors are degenerate")?;
                println!("gamma = {gamma:.6}");
            }
        }
    }

    Ok(())
}

fn print_matrix(m: &Matrix3<f64>) {
    for row in m.row_iter() {
        println!("[{:>12.9} {:>12.9} {:>12.9}]", row[0], row[1], row[2]);
    }
}

fn parse_values<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|e| format!("'{part}' is not a number: {e}"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected {N} values, got {}", v.len()))
}

fn parse_vector(s: &str) -> Result<Vector3<f64>, String> {
    parse_values::<3>(s).map(Vector3::from)
}

fn parse_matrix(s: &str) -> Result<Matrix3<f64>, String> {
    parse_values::<9>(s).map(|v| Matrix3::from_row_slice(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("1,-1,0").unwrap(), Vector3::new(1.0, -1.0, 0.0));
        assert_eq!(parse_vector(" 0.5 2 3 ").unwrap(), Vector3::new(0.5, 2.0, 3.0));
        assert!(parse_vector("1,2").is_err());
        assert!(parse_vector("1,x,2").is_err());
    }

    #[test]
    fn test_parse_matrix_is_row_major() {
        let m = parse_matrix("1,2,3,4,5,6,7,8,9").unwrap();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert!(parse_matrix("1,0,0,0,1,0,0,0").is_err());
    }

    #[test]
    fn test_cli_parses_or_command() {
        let cli = Cli::try_parse_from([
            "nc-twinning",
            "or",
            "--k1",
            "1,1,0",
            "--eta1",
            "1,-1,0",
            "--rpm",
            "1,0,0,0,1.2,0,0,0,1",
            "--negative-normal",
        ])
        .unwrap();
        match cli.command {
            Commands::Or {
                k1,
                rpm,
                a,
                negative_normal,
                ..
            } => {
                assert_eq!(k1, Vector3::new(1.0, 1.0, 0.0));
                assert_eq!(rpm[(1, 1)], 1.2);
                assert_eq!(a, 1.0);
                assert!(negative_normal);
            }
            _ => panic!("expected the or subcommand"),
        }
    }

    #[test]
    fn test_cli_accepts_negative_vectors() {
        let cli = Cli::try_parse_from([
            "nc-twinning",
            "angle",
            "--rpm",
            "1,0,0,0,1,0,0,0,1",
            "--k1",
            "-1,1,0",
            "--k2",
            "1,0,0",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Angle { .. }));
    }
}

use clap::Parser;
use lie_rotation::common::deg_to_rad;
use lie_rotation::{init_logger, init_logger_with_level};
use lie_rotation::so3::{ExpMapMethod, Rotation};
use nalgebra::{Matrix3, Vector3};
use tracing::{Level, debug, error, info, warn};

#[derive(Parser)]
#[command(name = "rotate_point")]
#[command(about = "Build an SO(3) rotation from an axis-angle vector and apply it to a point")]
struct Args {
    /// Axis-angle vector (three components, radians unless --degrees)
    #[arg(
        short,
        long,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = [0.0, 0.0, std::f64::consts::FRAC_PI_2]
    )]
    axis_angle: Vec<f64>,

    /// Interpret the axis-angle components as degrees
    #[arg(short, long)]
    degrees: bool,

    /// Point to rotate
    #[arg(
        short,
        long,
        num_args = 3,
        allow_negative_numbers = true,
        default_values_t = [1.0, 0.0, 0.0]
    )]
    point: Vec<f64>,

    /// Use a truncated power series with this many terms instead of the closed form
    #[arg(long)]
    series_terms: Option<u32>,

    /// Compose the rotation with itself this many times and report the drift
    #[arg(long, default_value = "0")]
    compose_steps: usize,

    /// Log at DEBUG level, which includes the rotation matrix
    #[arg(short, long)]
    verbose: bool,
}

fn orthonormality_error(matrix: &Matrix3<f64>) -> f64 {
    (matrix.transpose() * matrix - Matrix3::identity()).norm()
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        init_logger_with_level(Level::DEBUG);
    } else {
        init_logger();
    }

    let components: Vec<f64> = if args.degrees {
        args.axis_angle.iter().map(|v| deg_to_rad(*v)).collect()
    } else {
        args.axis_angle.clone()
    };

    let rotation = match Rotation::from_slice(&components) {
        Ok(rotation) => rotation,
        Err(e) => {
            error!("Cannot build rotation from {:?}: {}", args.axis_angle, e);
            std::process::exit(1);
        }
    };

    let rotation = match args.series_terms {
        Some(num_terms) => {
            let aaxis = rotation.to_axis_angle();
            let mut series =
                Rotation::from_axis_angle_with(&aaxis, ExpMapMethod::TruncatedSeries(num_terms));
            if !series.is_valid(1e-9) {
                warn!(
                    "Truncated series with {} terms is off SO(3) by {:.3e}, reprojecting",
                    num_terms,
                    orthonormality_error(series.matrix())
                );
                series.reproject(true);
            }
            series
        }
        None => rotation,
    };

    debug!("{}", rotation);

    let aaxis = rotation.to_axis_angle();
    info!(
        "Axis-angle: [{:.6}, {:.6}, {:.6}] (angle {:.6} rad)",
        aaxis.x,
        aaxis.y,
        aaxis.z,
        aaxis.norm()
    );

    let point = Vector3::from_column_slice(&args.point);
    let rotated = rotation * point;
    info!(
        "Rotated point: [{:.6}, {:.6}, {:.6}] -> [{:.6}, {:.6}, {:.6}]",
        point.x, point.y, point.z, rotated.x, rotated.y, rotated.z
    );

    if args.compose_steps > 0 {
        let mut accumulated = Rotation::identity();
        for _ in 0..args.compose_steps {
            accumulated *= &rotation;
        }
        info!(
            "After {} compositions: |CᵀC - I| = {:.3e}, det(C) = {:.15}",
            args.compose_steps,
            orthonormality_error(accumulated.matrix()),
            accumulated.matrix().determinant()
        );
    }
}

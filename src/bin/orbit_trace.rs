//! Orbit Trace Tool
//!
//! Steps a heading around an axis with a `Rotator`, records every step in a
//! `Recorder` and exports the trajectory as a table.
//!
//! Usage:
//!   cargo run --bin orbit_trace -- --axis 0,0,1 --heading 1,0,0 --step 10 --steps 36 trace.dat

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use serde::Serialize;

use cartesian::{deg2rad, Recorder, Rotator, Space};

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Orbit Trace Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rotates a heading step by step about an axis and exports the trajectory",
    long_about = None
)]
struct Args {
    /// Rotation axis as x,y,z (need not be normalized)
    #[arg(long, value_parser = parse_space, default_value = "0,0,1", allow_hyphen_values = true)]
    axis: Space,

    /// Starting heading as x,y,z
    #[arg(long, value_parser = parse_space, default_value = "1,0,0", allow_hyphen_values = true)]
    heading: Space,

    /// Rotation per step in degrees
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    step: f64,

    /// Number of steps to take
    #[arg(long, default_value_t = 36)]
    steps: usize,

    /// Recorder capacity
    #[arg(long, default_value_t = cartesian::constants::DEFAULT_RECORDER_CAPACITY)]
    capacity: usize,

    /// Also export the zero rows left over from the recorder pre-fill
    #[arg(long, action = ArgAction::SetTrue)]
    keep_zero: bool,

    /// Print the summary as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Output table
    #[arg(default_value = "orbit_trace.dat")]
    output: PathBuf,
}

/// Summary of a finished trace
#[derive(Debug, Serialize)]
struct Summary {
    axis: Space,
    start: Space,
    end: Space,
    steps: usize,
    step_degrees: f64,
    rows_written: usize,
    output: PathBuf,
}

/// Parses an `x,y,z` triple; all three components must be valid numbers
fn parse_space(text: &str) -> std::result::Result<Space, String> {
    let components = text
        .split(',')
        .map(|field| {
            field
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid component '{}': {}", field.trim(), e))
        })
        .collect::<std::result::Result<Vec<f64>, String>>()?;

    match components.as_slice() {
        [x, y, z] => Ok(Space::new(*x, *y, *z)),
        _ => Err(format!(
            "expected 3 comma-separated components, got {}",
            components.len()
        )),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let axis = args.axis;
    let start = args.heading;
    let radians = deg2rad(args.step);

    let mut rotator = Rotator::new(axis);
    let mut recorder = Recorder::new(args.capacity);

    let mut heading = start;
    recorder.push(heading);
    for _ in 0..args.steps {
        heading = rotator.rotate(&heading, radians)?;
        recorder.push(heading);
    }

    let written = recorder.write(&args.output, !args.keep_zero)?;

    let summary = Summary {
        axis,
        start,
        end: heading,
        steps: args.steps,
        step_degrees: args.step,
        rows_written: written,
        output: args.output,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Axis:     {}", summary.axis);
        println!("Start:    {}", summary.start);
        println!("End:      {}", summary.end);
        println!(
            "Steps:    {} x {} deg",
            summary.steps, summary.step_degrees
        );
        println!(
            "Wrote {} rows to {}",
            summary.rows_written,
            summary.output.display()
        );
    }

    Ok(())
}

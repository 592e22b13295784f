//! `shapes` - dispatch one operation over a JSON shape collection

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use shape_dispatch::{
    Angle, DispatchContext, Dispatcher, OperationRegistry, Outcome, ShapeCollection,
    StandardParams, WriterSink,
};

/// Apply a registered operation to every shape in a collection.
#[derive(Parser, Debug)]
#[command(name = "shapes", version, about)]
struct Cli {
    /// JSON array of shapes, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Operation to apply
    #[arg(short, long, default_value = "draw")]
    operation: String,

    /// Rotation angle in degrees used by `rotate`
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    angle: f64,

    /// Horizontal offset used by `translate`
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dx: f64,

    /// Vertical offset used by `translate`
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dy: f64,

    /// List registered operations and exit
    #[arg(long)]
    list: bool,

    /// Log every dispatched element
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> Result<StandardParams> {
        for (flag, value) in [("--angle", self.angle), ("--dx", self.dx), ("--dy", self.dy)] {
            if !value.is_finite() {
                bail!("{} must be a finite number, got {}", flag, value);
            }
        }
        Ok(StandardParams {
            rotation: Angle::degrees(self.angle),
            dx: self.dx,
            dy: self.dy,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let out = stdout.lock();

    if cli.list {
        return list(&cli, out);
    }

    if cli.input.as_os_str() == "-" {
        run(&cli, io::stdin().lock(), out)
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("failed to open {}", cli.input.display()))?;
        run(&cli, BufReader::new(file), out)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build the registry and check it covers every kind before any dispatch.
fn build_registry(cli: &Cli) -> Result<OperationRegistry> {
    let registry = OperationRegistry::with_standard_operations(&cli.params()?);
    registry
        .validate()
        .context("operation registry is incomplete")?;
    tracing::debug!(operations = ?registry.names(), "registry ready");
    Ok(registry)
}

fn list(cli: &Cli, mut out: impl Write) -> Result<()> {
    let registry = build_registry(cli)?;
    for name in registry.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

fn run(cli: &Cli, input: impl Read, out: impl Write) -> Result<()> {
    let shapes: ShapeCollection =
        serde_json::from_reader(input).context("failed to parse shape collection")?;
    tracing::info!(count = shapes.len(), operation = %cli.operation, "loaded shapes");

    let registry = build_registry(cli)?;
    let dispatcher = Dispatcher::with_context(&registry, DispatchContext::with_trace(cli.verbose));

    let mut sink = WriterSink::new(out);
    let outcomes = dispatcher
        .dispatch(&cli.operation, shapes.as_slice(), &mut sink)
        .with_context(|| format!("failed to apply `{}`", cli.operation))?;

    let values: Vec<&Outcome> = outcomes.iter().filter(|o| !o.is_unit()).collect();
    let mut out = sink.into_inner()?;
    if !values.is_empty() {
        serde_json::to_writer_pretty(&mut out, &values)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHAPES: &str = r#"[
        {"kind": "circle", "radius": 1.0},
        {"kind": "square", "side": 2.0}
    ]"#;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("shapes").chain(args.iter().copied()))
    }

    fn run_to_string(cli: &Cli, input: &str) -> Result<String> {
        let mut out = Vec::new();
        run(cli, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_draw_prints_one_line_per_shape() {
        let output = run_to_string(&cli(&["--operation", "draw"]), SHAPES).unwrap();
        assert_eq!(
            output,
            "circle r=1 at (0, 0)\nsquare side=2 angle=0rad at (0, 0)\n"
        );
    }

    #[test]
    fn test_area_prints_json_scalars() {
        let output = run_to_string(&cli(&["-o", "area"]), SHAPES).unwrap();
        let values: Vec<f64> = serde_json::from_str(&output).unwrap();
        assert_eq!(values.len(), 2);
        assert!((values[0] - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(values[1], 4.0);
    }

    #[test]
    fn test_translate_accepts_negative_offsets() {
        let output =
            run_to_string(&cli(&["-o", "translate", "--dx", "-1", "--dy", "2"]), SHAPES).unwrap();
        let values: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(values[0]["center"]["x"], -1.0);
        assert_eq!(values[1]["center"]["y"], 2.0);
    }

    #[test]
    fn test_non_finite_parameters_are_rejected() {
        for args in [
            ["-o", "rotate", "--angle", "inf"],
            ["-o", "translate", "--dx", "NaN"],
            ["-o", "translate", "--dy", "-inf"],
        ] {
            let err = run_to_string(&cli(&args), SHAPES).unwrap_err();
            assert!(
                format!("{:#}", err).contains("must be a finite number"),
                "{:?}: {:#}",
                args,
                err
            );
        }
    }

    #[test]
    fn test_unknown_operation_is_an_error() {
        let err = run_to_string(&cli(&["-o", "scale"]), SHAPES).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown operation"));
    }

    #[test]
    fn test_invalid_shape_is_an_error() {
        let err = run_to_string(&cli(&[]), r#"[{"kind": "square", "side": 0}]"#).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse"));
    }

    #[test]
    fn test_list_prints_standard_operations() {
        let mut out = Vec::new();
        list(&cli(&["--list"]), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "draw\nrotate\ntranslate\narea\nperimeter\n"
        );
    }
}

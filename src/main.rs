use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use equiripple::approx::{
    self, Extremum, FitError, MinimaxFit, TargetSpec,
};
use equiripple::opts::{Method, Opts};
use equiripple::utils::Polynomial;

fn write_output(report: &str, file: &Option<PathBuf>) -> io::Result<()> {
    let mut out: Box<dyn io::Write> = if let Some(path) = file {
        Box::new(File::create(path)?)
    } else {
        Box::new(io::stdout())
    };

    out.write_all(report.as_bytes())
}

fn ripple_levels(poly: &Polynomial, target: &TargetSpec) -> (f64, f64) {
    let found = approx::locate_extrema(
        poly,
        target.passband_edge(),
        target.stopband_edge(),
        |_| 1.0,
    );

    let ripple = |keep: &dyn Fn(&&Extremum) -> bool| {
        found
            .iter()
            .filter(keep)
            .map(Extremum::magnitude)
            .fold(0.0, f64::max)
    };

    (
        ripple(&|e| e.location <= target.passband_edge()),
        ripple(&|e| e.location >= target.stopband_edge()),
    )
}

fn describe(poly: &Polynomial, target: &TargetSpec, opts: &Opts) -> String {
    let mut report = String::new();
    let (passband, stopband) = ripple_levels(poly, target);

    let _ = writeln!(
        report,
        "target: passband [0, {}], stopband [{}, 1], weight {}",
        target.passband_edge(),
        target.stopband_edge(),
        target.passband_weight(),
    );
    let _ = writeln!(report, "method: {}, order {}", opts.method, opts.order);
    let _ = writeln!(report, "passband ripple: {passband:.6e}");
    let _ = writeln!(report, "stopband ripple: {stopband:.6e}");

    for (k, c) in poly.coeffs().iter().enumerate() {
        let _ = writeln!(report, "p[{k}] = {c:.17e}");
    }

    report
}

fn run(opts: &Opts) -> Result<String, FitError> {
    let target = TargetSpec::new(opts.passband_edge, opts.stopband_edge)?
        .with_passband_weight(opts.weight)?;

    match opts.method {
        Method::Minimax => {
            let MinimaxFit {
                polynomial,
                error,
                diagnostics,
            } = approx::fit_minimax(&target, opts.order, opts.iterations)?;

            let mut report = describe(&polynomial, &target, opts);

            let _ = writeln!(report, "leveled error: {error:.6e}");
            let _ = writeln!(
                report,
                "iterations: {}, final candidates: {}",
                diagnostics.iterations,
                diagnostics.candidates.len(),
            );

            Ok(report)
        }
        Method::Interpolating => {
            let polynomial = approx::fit_interpolating(&target, opts.order)?;

            Ok(describe(&polynomial, &target, opts))
        }
    }
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .init();

    let report = match run(&opts) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");

            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = write_output(&report, &opts.output) {
        eprintln!("error: {err}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

use std::path::PathBuf;

use argh::FromArgs;
use log::LevelFilter;
use strum_macros::{Display, EnumString};

/// Fitting method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Method {
    /// Equiripple fit by Remez exchange.
    Minimax,
    /// Plain interpolation through fixed points.
    Interpolating,
}

/// Equiripple polynomial fitting for two-band step targets.
#[derive(FromArgs)]
pub struct Opts {
    /// passband right edge A, with 0 < A < B
    #[argh(option, short = 'a', default = "0.4")]
    pub passband_edge: f64,

    /// stopband left edge B, with A < B < 1
    #[argh(option, short = 'b', default = "0.6")]
    pub stopband_edge: f64,

    /// polynomial degree (at least 3)
    #[argh(option, short = 'n', default = "8")]
    pub order: u32,

    /// exchange iteration budget
    #[argh(option, short = 'i', default = "10")]
    pub iterations: u32,

    /// passband error weight
    #[argh(option, short = 'w', default = "1.0")]
    pub weight: f64,

    /// fitting method (minimax or interpolating)
    #[argh(option, short = 'm', default = "Method::Minimax")]
    pub method: Method,

    /// output file
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parses_kebab_case() {
        assert_eq!("minimax".parse(), Ok(Method::Minimax));
        assert_eq!("interpolating".parse(), Ok(Method::Interpolating));
        assert!("remez".parse::<Method>().is_err());
    }
}

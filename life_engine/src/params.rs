// params.rs - Launch parameters (length, width, density) with silent defaults

use std::str::FromStr;

use tracing::debug;

use crate::board::Board;
use crate::error::ParamsError;
use crate::filler::{density_filler, seeded_density_filler};
use crate::patterns::Pattern;

/// Raw launch parameters as supplied by a front door.
///
/// Dimensions are signed so that a negative request survives parsing and is
/// rejected by [`LaunchParams::validate`] instead of being mistaken for a
/// missing value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParams {
    pub length: i64,
    pub width: i64,
    pub density: f64,
}

impl LaunchParams {
    /// Defaults for the density-aware page.
    pub const DENSITY_AWARE: LaunchParams = LaunchParams { length: 300, width: 300, density: 0.15 };

    /// Defaults for the older fixed-density page.
    pub const LEGACY: LaunchParams = LaunchParams { length: 1000, width: 1000, density: 0.15 };

    /// Parses a query string such as `?length=200&width=120&density=0.3`.
    ///
    /// Missing or non-numeric values fall back to `defaults`. Unknown keys are
    /// ignored and the first occurrence of a repeated key wins.
    pub fn from_query(query: &str, defaults: LaunchParams) -> Self {
        Self::from_pairs(query_pairs(query), defaults)
    }

    /// Same fallback rules as [`LaunchParams::from_query`] over already split pairs.
    pub fn from_pairs<'a, I>(pairs: I, defaults: LaunchParams) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut length = None;
        let mut width = None;
        let mut density = None;

        for (key, value) in pairs {
            let slot = match key.trim() {
                "length" => &mut length,
                "width" => &mut width,
                "density" => &mut density,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            length: parse_or_default("length", length, defaults.length),
            width: parse_or_default("width", width, defaults.width),
            density: parse_or_default("density", density, defaults.density),
        }
    }

    /// Checks the values describe a real board.
    pub fn validate(&self) -> Result<BoardConfig, ParamsError> {
        let length = positive("length", self.length)?;
        let width = positive("width", self.width)?;
        if length.checked_mul(width).is_none() {
            return Err(ParamsError::TooManyCells { length, width });
        }

        if !self.density.is_finite() {
            return Err(ParamsError::DensityNotFinite);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ParamsError::DensityOutOfRange(self.density));
        }

        Ok(BoardConfig { length, width, density: self.density })
    }
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self::DENSITY_AWARE
    }
}

/// Validated parameters, ready to build a board from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardConfig {
    pub length: usize,
    pub width: usize,
    pub density: f64,
}

impl BoardConfig {
    /// Builds a randomly seeded board. A `seed` makes the layout reproducible.
    pub fn build(&self, seed: Option<u64>) -> Board {
        match seed {
            Some(seed) => {
                Board::new(self.length, self.width, seeded_density_filler(self.density, seed))
            }
            None => Board::new(self.length, self.width, density_filler(self.density)),
        }
    }

    /// Builds an otherwise empty board with `pattern` centred on it.
    pub fn build_pattern(&self, pattern: &Pattern) -> Board {
        Board::new(self.length, self.width, pattern.centered_filler(self.length, self.width))
    }
}

/// Splits `?a=1&b=2` into `("a", "1"), ("b", "2")`. A key without `=` gets an
/// empty value.
pub fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

fn parse_or_default<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    match raw.map(|value| value.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            debug!(
                key,
                raw = raw.unwrap_or_default(),
                ?default,
                "unparseable parameter, using default"
            );
            default
        }
        None => default,
    }
}

fn positive(name: &'static str, value: i64) -> Result<usize, ParamsError> {
    match usize::try_from(value) {
        Ok(extent) if extent > 0 => Ok(extent),
        _ => Err(ParamsError::ZeroDimension { name, value }),
    }
}

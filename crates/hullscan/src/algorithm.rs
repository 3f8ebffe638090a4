//! Engine selection by name, and the single dispatching entry point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::brute::brute_force_observed;
use crate::error::{HullError, HullResult};
use crate::events::HullObserver;
use crate::geom2::{GeomCfg, Point};
use crate::graham::graham_scan_observed;
use crate::hull::Hull;
use crate::quickhull::quickhull_observed;

/// Hull engine selector; parses from `brute-force`, `quickhull` or `graham`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BruteForce,
    Quickhull,
    Graham,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BruteForce,
        Algorithm::Quickhull,
        Algorithm::Graham,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute-force",
            Algorithm::Quickhull => "quickhull",
            Algorithm::Graham => "graham",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute_force" | "brute" => Ok(Algorithm::BruteForce),
            "quickhull" | "quick" => Ok(Algorithm::Quickhull),
            "graham" | "graham-scan" | "graham_scan" => Ok(Algorithm::Graham),
            _ => Err(HullError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Run `algorithm` on `points` and return the CCW hull.
///
/// Brute-force edge sets are stitched into a polygon before returning.
pub fn compute_hull<O>(
    algorithm: Algorithm,
    points: &[Point],
    cfg: GeomCfg,
    obs: &mut O,
) -> HullResult<Hull>
where
    O: HullObserver + ?Sized,
{
    match algorithm {
        Algorithm::BruteForce => brute_force_observed(points, cfg, obs)?.stitch(),
        Algorithm::Quickhull => quickhull_observed(points, cfg, obs),
        Algorithm::Graham => graham_scan_observed(points, cfg, obs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
            assert_eq!(algo.to_string(), algo.name());
        }
        assert_eq!("Graham-Scan".parse::<Algorithm>().unwrap(), Algorithm::Graham);
        assert!(matches!(
            "jarvis".parse::<Algorithm>(),
            Err(HullError::UnknownAlgorithm(_))
        ));
    }
}

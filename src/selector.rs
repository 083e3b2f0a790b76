use std::fmt;

use itertools::{Itertools, MinMaxResult};
use signifix::metric::Signifix;
use tracing::{debug, warn};

use crate::combination::NodeId;
use crate::error::{Error, Result};
use crate::generator::CandidateSet;

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub target: f64,
    pub value: f64,
    pub distance: f64,
    pub node: NodeId,
    pub expression: String,
}

fn si(value: f64) -> String {
    match Signifix::try_from(value) {
        Ok(s) => format!("{}Ω", s),
        Err(_) => format!("{:.2}", value),
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "{}: {} is {}", self.rank, si(self.target), si(self.value))?;
        } else {
            writeln!(f, "{}: {:.2} is {:.2}", self.rank, self.target, self.value)?;
        }
        write!(f, "  Construction: {}", self.expression)
    }
}

/// The closest candidates to a target, nearest first.
#[derive(Debug, Clone)]
pub struct Matches {
    target: f64,
    matches: Vec<Match>,
}

impl Matches {
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }

    /// All matches sharing the smallest distance.
    pub fn best(&self) -> &[Match] {
        match self.matches.first() {
            Some(first) => {
                let n = self
                    .matches
                    .iter()
                    .take_while(|m| m.distance == first.distance)
                    .count();
                &self.matches[..n]
            }
            None => &[],
        }
    }

    pub fn into_vec(self) -> Vec<Match> {
        self.matches
    }
}

/// One block per match. The alternate form prints values in engineering notation.
impl fmt::Display for Matches {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for m in &self.matches {
            if f.alternate() {
                writeln!(f, "{:#}", m)?;
            } else {
                writeln!(f, "{}", m)?;
            }
        }
        Ok(())
    }
}

/// Refuses targets that are not a positive, finite resistance.
pub fn validate_target(target: f64) -> Result<f64> {
    if target.is_finite() && target > 0.0 {
        Ok(target)
    } else {
        Err(Error::InvalidTarget(target))
    }
}

/// The `k` candidates nearest to `target` by absolute difference. Equidistant candidates keep
/// their generation order.
pub fn select_top_k(candidates: &CandidateSet, target: f64, k: usize) -> Result<Matches> {
    let target = validate_target(target)?;
    if k > candidates.len() {
        return Err(Error::InsufficientCandidates {
            requested: k,
            available: candidates.len(),
        });
    }
    debug!(target_ohms = target, k, candidates = candidates.len(), "selecting nearest");

    if let MinMaxResult::MinMax(lo, hi) = candidates
        .iter()
        .map(|(_, c)| c.value())
        .minmax_by(|a, b| a.total_cmp(b))
    {
        if target < lo || target > hi {
            warn!(target_ohms = target, lo, hi, "target outside the reachable range");
        }
    }

    let matches = candidates
        .iter()
        .map(|(id, c)| (id, c.value(), (c.value() - target).abs()))
        .sorted_by(|a, b| a.2.total_cmp(&b.2))
        .take(k)
        .enumerate()
        .map(|(i, (node, value, distance))| -> Result<Match> {
            Ok(Match {
                rank: i + 1,
                target,
                value,
                distance,
                node,
                expression: candidates.expr(node)?.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Matches { target, matches })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::catalog::SeriesConfig;

    fn tiny() -> CandidateSet {
        CandidateSet::from_series(&SeriesConfig::new(&[1.0, 2.0, 4.0]).decades(0..=0)).unwrap()
    }

    #[test]
    fn nearest_first() {
        let matches = select_top_k(&tiny(), 3.1, 3).unwrap();
        let exprs: Vec<&str> = matches.iter().map(|m| m.expression.as_str()).collect();
        assert_eq!(exprs, vec!["(2.00+1.00)", "(2.00+2.00)", "(1.00+1.00)"]);
        assert_eq!(matches.iter().map(|m| m.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn ties_keep_generation_order() {
        // (1.00+1.00) and (4.00||4.00) are both exactly 2.
        let matches = select_top_k(&tiny(), 2.0, 2).unwrap();
        assert_eq!(matches.best().len(), 2);
        assert_eq!(matches.best()[0].expression, "(1.00+1.00)");
        assert_eq!(matches.best()[1].expression, "(4.00||4.00)");
        assert!(matches.best()[0].node < matches.best()[1].node);
    }

    #[test]
    fn zero_k_is_empty() {
        let matches = select_top_k(&tiny(), 5.0, 0).unwrap();
        assert!(matches.is_empty());
        assert!(matches.best().is_empty());
    }

    #[test]
    fn too_many_requested() {
        let set = tiny();
        assert_eq!(
            select_top_k(&set, 5.0, 13).unwrap_err(),
            Error::InsufficientCandidates {
                requested: 13,
                available: 12
            }
        );
        assert_eq!(select_top_k(&set, 5.0, 12).unwrap().len(), 12);
    }

    #[test]
    fn bad_targets() {
        let set = tiny();
        for t in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                select_top_k(&set, t, 1),
                Err(Error::InvalidTarget(_))
            ));
        }
    }

    #[test]
    fn report_format() {
        let matches = select_top_k(&tiny(), 3.0, 1).unwrap();
        assert_eq!(
            matches.to_string(),
            "1: 3.00 is 3.00\n  Construction: (2.00+1.00)\n"
        );
    }

    fn catalog_strategy() -> impl Strategy<Value = SeriesConfig> {
        (proptest::collection::vec(0.5f64..50.0, 1..6), 0i32..3)
            .prop_map(|(base, top)| SeriesConfig::new(&base).decades(0..=top))
    }

    proptest! {
        #[test]
        fn ranking_is_sorted_and_complete(
            config in catalog_strategy(),
            target in 0.1f64..5000.0,
            k_frac in 0.0f64..=1.0,
        ) {
            let set = CandidateSet::from_series(&config).unwrap();
            let k = (set.len() as f64 * k_frac) as usize;
            let matches = select_top_k(&set, target, k).unwrap();
            prop_assert_eq!(matches.len(), k);

            let picked: Vec<&Match> = matches.iter().collect();
            for w in picked.windows(2) {
                prop_assert!(w[0].distance <= w[1].distance);
                if w[0].distance == w[1].distance {
                    prop_assert!(w[0].node < w[1].node);
                }
            }
            if let Some(last) = picked.last() {
                for (id, c) in set.iter() {
                    if picked.iter().all(|m| m.node != id) {
                        prop_assert!((c.value() - target).abs() >= last.distance);
                    }
                }
            }
        }
    }
}

use tracing::debug;

use crate::catalog::{Catalog, SeriesConfig};
use crate::combination::{Combination, Expr, Kind, Network, NodeId};
use crate::error::Result;
use crate::store::RecordStore;

/// Pairs whose values differ by this factor or more are skipped.
pub const MAX_RATIO: f64 = 100.0;

/// Whether `a` and `b` are within two orders of magnitude of each other. Past that the smaller
/// resistor barely moves a series pair, and the larger barely moves a parallel one.
pub fn admissible(a: f64, b: f64) -> bool {
    let q = a / b;
    q > 1.0 / MAX_RATIO && q < MAX_RATIO
}

/// All series and parallel pairs drawn from a catalog, in generation order.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    network: Network,
    leaves: usize,
    candidates: RecordStore<NodeId>,
}

impl CandidateSet {
    /// Builds the catalog for `config` and generates its candidates.
    pub fn from_series(config: &SeriesConfig) -> Result<Self> {
        generate(Catalog::build(config)?)
    }

    pub fn len(&self) -> usize {
        self.candidates.count()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of catalog leaves the candidates were drawn from.
    pub fn leaf_count(&self) -> usize {
        self.leaves
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.candidates.iter().cloned()
    }

    /// Candidates in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Combination)> {
        self.ids().filter_map(move |id| self.network.get(id).map(|c| (id, c)))
    }

    /// Looks up any node, candidate or catalog leaf.
    pub fn get(&self, id: NodeId) -> Option<&Combination> {
        self.network.get(id)
    }

    pub fn expr(&self, id: NodeId) -> Result<Expr> {
        self.network.expr(id)
    }

    pub fn network(&self) -> &Network {
        &self.network
    }
}

/// Joins every unordered pair `(i, j)`, `j <= i`, of catalog leaves, a leaf with itself
/// included. Admissible pairs yield a series node followed by a parallel node.
pub fn generate(catalog: Catalog) -> Result<CandidateSet> {
    let leaves: Vec<(NodeId, f64)> = catalog.ids().zip(catalog.values()).collect();
    let mut network = catalog.into_network();
    let mut candidates = RecordStore::with_capacity(5)?;

    for (i, &(r1, v1)) in leaves.iter().enumerate() {
        for &(r2, v2) in &leaves[..=i] {
            if !admissible(v1, v2) {
                continue;
            }
            candidates.append(network.combine(Kind::Series, r1, r2)?)?;
            candidates.append(network.combine(Kind::Parallel, r1, r2)?)?;
        }
    }

    debug!(
        leaves = leaves.len(),
        candidates = candidates.count(),
        "candidates generated"
    );
    Ok(CandidateSet {
        network,
        leaves: leaves.len(),
        candidates,
    })
}

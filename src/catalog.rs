use std::ops::RangeInclusive;

use itertools::Itertools;
use tracing::debug;

use crate::combination::{Network, NodeId};
use crate::error::Result;

/// Ohms through megaohms.
pub const DEFAULT_DECADES: RangeInclusive<i32> = 0..=6;

lazy_static! {
    /// The twelve mantissas per decade the default catalog is built from.
    pub static ref BASE_SERIES: SeriesConfig = SeriesConfig::new(&[
        1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.1,
    ]);
}

/// Mantissas and the span of decades they are replicated over.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesConfig {
    pub base_values: Vec<f64>,
    pub decades: RangeInclusive<i32>,
}

impl SeriesConfig {
    /// A series over [`DEFAULT_DECADES`]. Only the mantissas need to be given, each decade
    /// multiple is generated by the catalog.
    /// # Example
    /// ```
    ///     # use resistor_combo::SeriesConfig;
    ///     let piher = SeriesConfig::new(&[1.0, 2.0, 2.2, 2.5, 4.7, 5.0]).decades(1..=5);
    ///     assert_eq!(piher.len(), 30);
    /// ```
    pub fn new(base_values: &[f64]) -> Self {
        SeriesConfig {
            base_values: base_values.to_vec(),
            decades: DEFAULT_DECADES,
        }
    }

    pub fn decades(mut self, decades: RangeInclusive<i32>) -> Self {
        self.decades = decades;
        self
    }

    /// Number of leaves a catalog built from this series holds.
    pub fn len(&self) -> usize {
        self.base_values.len() * self.decades.clone().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        BASE_SERIES.clone()
    }
}

/// Every discrete resistor value available to the generator, as leaves of one network.
#[derive(Debug, Clone)]
pub struct Catalog {
    network: Network,
}

impl Catalog {
    /// Emits `base × 10^decade` for each decade ascending, and within a decade for each
    /// mantissa in the order given.
    pub fn build(config: &SeriesConfig) -> Result<Self> {
        let mut network = Network::with_capacity(1)?;
        for (decade, base) in config
            .decades
            .clone()
            .cartesian_product(config.base_values.iter())
        {
            network.leaf(base * 10f64.powi(decade))?;
        }
        debug!(leaves = network.len(), "catalog built");
        Ok(Catalog { network })
    }

    pub fn len(&self) -> usize {
        self.network.len()
    }

    pub fn is_empty(&self) -> bool {
        self.network.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.network.iter().map(|(id, _)| id)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.network.iter().map(|(_, leaf)| leaf.value())
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub(crate) fn into_network(self) -> Network {
        self.network
    }
}

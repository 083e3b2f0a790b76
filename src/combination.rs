//! Resistor networks built from single resistors and two-way series/parallel joins.
//!
//! Every node lives in a [`Network`] arena and refers to its children by [`NodeId`]. A child has
//! to exist before a node can point at it, so a network is always acyclic.

use std::fmt;

use crate::error::{Error, Result};
use crate::store::RecordStore;

/// Handle to a node inside a [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How the two halves of a pair are wired together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Series,
    Parallel,
}

impl Kind {
    pub fn symbol(self) -> &'static str {
        match self {
            Kind::Series => "+",
            Kind::Parallel => "||",
        }
    }

    /// Equivalent resistance of `a` and `b` wired this way. A result that rounds to zero or
    /// overflows is refused.
    pub fn equivalent(self, a: f64, b: f64) -> Result<f64> {
        let value = match self {
            Kind::Series => a + b,
            Kind::Parallel => {
                if a == 0.0 || b == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                1.0 / (1.0 / a + 1.0 / b)
            }
        };
        if value == 0.0 {
            Err(Error::DivisionByZero)
        } else if !value.is_finite() {
            Err(Error::InvalidResistance(value))
        } else {
            Ok(value)
        }
    }
}

/// A single resistor, or two sub-networks joined in series or parallel.
///
/// The equivalent value of a pair is computed once, when the pair is added to its network.
#[derive(Debug, Clone, PartialEq)]
pub enum Combination {
    Leaf {
        value: f64,
    },
    Pair {
        kind: Kind,
        left: NodeId,
        right: NodeId,
        value: f64,
    },
}

impl Combination {
    pub fn value(&self) -> f64 {
        match *self {
            Combination::Leaf { value } | Combination::Pair { value, .. } => value,
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        match *self {
            Combination::Leaf { .. } => None,
            Combination::Pair { kind, .. } => Some(kind),
        }
    }

    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match *self {
            Combination::Leaf { .. } => None,
            Combination::Pair { left, right, .. } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.kind().is_none()
    }
}

/// Arena owning every node of one or more resistor networks.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: RecordStore<Combination>,
}

impl Network {
    pub fn new() -> Self {
        Network {
            nodes: RecordStore::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Network {
            nodes: RecordStore::with_capacity(capacity)?,
        })
    }

    /// Adds a single resistor. Zero, negative and non-finite values are refused.
    pub fn leaf(&mut self, value: f64) -> Result<NodeId> {
        if value == 0.0 {
            return Err(Error::DivisionByZero);
        }
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidResistance(value));
        }
        self.nodes.append(Combination::Leaf { value }).map(NodeId)
    }

    /// Joins two existing nodes, caching the equivalent resistance on the new node.
    pub fn combine(&mut self, kind: Kind, left: NodeId, right: NodeId) -> Result<NodeId> {
        let l = self.value(left).ok_or(Error::UnknownNode(left))?;
        let r = self.value(right).ok_or(Error::UnknownNode(right))?;
        let value = kind.equivalent(l, r)?;
        self.nodes
            .append(Combination::Pair {
                kind,
                left,
                right,
                value,
            })
            .map(NodeId)
    }

    pub fn get(&self, id: NodeId) -> Option<&Combination> {
        self.nodes.get(id.0)
    }

    pub fn value(&self, id: NodeId) -> Option<f64> {
        self.get(id).map(Combination::value)
    }

    pub fn len(&self) -> usize {
        self.nodes.count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Combination)> {
        self.nodes.iter().enumerate().map(|(i, c)| (NodeId(i), c))
    }

    /// A displayable construction expression for `id`, e.g. `(100.00||1.20)`.
    pub fn expr(&self, id: NodeId) -> Result<Expr> {
        match self.get(id) {
            Some(_) => Ok(Expr { network: self, id }),
            None => Err(Error::UnknownNode(id)),
        }
    }

    pub fn render(&self, id: NodeId) -> Result<String> {
        self.expr(id).map(|e| e.to_string())
    }
}

/// Construction expression of one node, rendered through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Expr<'a> {
    network: &'a Network,
    id: NodeId,
}

impl<'a> fmt::Display for Expr<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.network.nodes[self.id.0] {
            Combination::Leaf { value } => write!(f, "{:.2}", value),
            Combination::Pair {
                kind, left, right, ..
            } => {
                let sub = |id| Expr {
                    network: self.network,
                    id,
                };
                write!(f, "({}{}{})", sub(left), kind.symbol(), sub(right))
            }
        }
    }
}

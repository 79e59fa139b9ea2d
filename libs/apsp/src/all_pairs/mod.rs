use crate::utils::NumIndexVec;
use crate::{Arc, Vertex};
use num_traits::{Bounded, NumOps, Zero};

pub mod johnson;


/// Directed graph in forward-star form: arcs sorted by tail, with a row
/// pointer per vertex into the shared arc array.
#[derive(Clone)]
pub struct DiGraph<W> {
    num_nodes: Vertex,
    arcs: NumIndexVec<Arc<W>>,
    row_ptr: NumIndexVec<usize>,
}

impl<W> DiGraph<W>
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord,
{
    pub fn builder() -> DiGraphBuilder<W> {
        DiGraphBuilder::new()
    }

    pub fn num_nodes(&self) -> Vertex {
        self.num_nodes
    }

    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn iter_outgoing_arcs(&self, from: Vertex) -> impl Iterator<Item = &Arc<W>> {
        self.arcs[self.row_ptr[from]..self.row_ptr[from + 1]].iter()
    }

    pub fn iter_arcs(&self) -> impl Iterator<Item = &Arc<W>> {
        self.arcs.iter()
    }

    pub fn iter_arcs_mut(&mut self) -> impl Iterator<Item = &mut Arc<W>> {
        self.arcs.iter_mut()
    }
}

pub struct DiGraphBuilder<W>
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord,
{
    num_nodes: Vertex,
    arcs: Vec<Arc<W>>,
}

impl<W> DiGraphBuilder<W>
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord,
{
    pub fn new() -> Self {
        Self {
            num_nodes: 0,
            arcs: vec![],
        }
    }

    pub fn set_num_nodes(mut self, num: Vertex) -> Self {
        self.num_nodes = num;
        self
    }

    pub fn add_arcs(mut self, arcs: impl IntoIterator<Item = Arc<W>>) -> Self {
        for arc in arcs {
            self.arcs.push(arc);
        }
        self
    }

    pub fn build(mut self) -> DiGraph<W> {
        debug_assert!(self.num_nodes < Vertex::MAX);
        self.arcs
            .sort_by(|a, b| a.from.cmp(&b.from).then(a.to.cmp(&b.to)));

        // counting pass + prefix sums; rows without outgoing arcs (and an
        // entirely empty arc set) end up as empty ranges
        let mut row_ptr = num_index_vec![0usize; self.num_nodes + 1];
        for arc in &self.arcs {
            debug_assert!(arc.from < self.num_nodes && arc.to < self.num_nodes);
            row_ptr[arc.from + 1] += 1;
        }
        for v in 1..row_ptr.len() {
            let prev = row_ptr[v - 1];
            row_ptr[v] += prev;
        }

        DiGraph {
            num_nodes: self.num_nodes,
            arcs: NumIndexVec::from_vec(self.arcs),
            row_ptr,
        }
    }
}

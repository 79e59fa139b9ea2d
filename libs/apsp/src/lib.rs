#[macro_use]
pub mod utils;
pub mod all_pairs;

pub type Vertex = u32;

/// Directed edge with an arbitrary signed weight.
#[derive(Clone, Debug)]
pub struct Arc<W> {
    pub from: Vertex,
    pub to: Vertex,
    pub w: W,
}

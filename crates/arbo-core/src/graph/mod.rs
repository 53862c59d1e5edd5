pub mod algos;
pub mod dot;
pub mod load;
pub mod types;

pub use algos::prim_traverse;
pub use dot::render_dot;
pub use load::{load_graph, load_graph_unchecked};
pub use types::{format_weight, Graph, MstResult, TraceStep, TreeEdge};

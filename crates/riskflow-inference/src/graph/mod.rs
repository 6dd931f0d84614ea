//! Graph structure: arena index over node ids, cycle detection, and ordering.

pub mod cycles;
pub mod indexed;
pub mod topo;

pub use cycles::detect_cycles;
pub use indexed::IndexedGraph;
pub use topo::topological_order;

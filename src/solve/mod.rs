//! Solvers: the parallel multi-component driver and the backtracking
//! baseline, plus orientation output helpers.

pub mod driver;
pub mod enumerate;

pub use driver::{
    ComponentOutcome, CountReport, DEFAULT_EDGE_CEILING, SingleSolve, SolveOptions,
    count_acyclic_orientations, count_eulerian_orientations, solve_single,
};
pub use enumerate::{count_by_backtracking, enumerate_acyclic, orientation_is_acyclic};

use std::io::{self, Write};

use itertools::Itertools;

use crate::dd::Diagram;
use crate::graph::edge_list::EdgeGraph;
use crate::model::Direction;

/// Print every orientation a diagram represents, one per line, as
/// space-separated `src->dst` pairs in edge order using the input vertex
/// names.
pub fn write_orientations<W: Write>(
    graph: &EdgeGraph,
    diagram: &Diagram,
    w: &mut W,
) -> io::Result<()> {
    for solution in diagram.solutions() {
        let line = solution
            .iter()
            .enumerate()
            .map(|(a, dir)| {
                let e = graph.edge(a);
                let (src, dst) = match dir {
                    Direction::Forward => (e.v1, e.v2),
                    Direction::Reverse => (e.v2, e.v1),
                };
                format!("{}->{}", graph.vertex_name(src), graph.vertex_name(dst))
            })
            .join(" ");
        writeln!(w, "{line}")?;
    }
    Ok(())
}

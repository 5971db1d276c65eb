use std::io::{self, Write};

use tracing::info;

use transport_network::{
    logging, report, shortest_path, spanning_tree, traversal, GraphError, WeightedGraph, DATASETS,
};

const START_CITY: usize = 0;

fn main() -> Result<(), GraphError> {
    if let Err(e) = logging::init() {
        eprintln!("logging disabled: {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for dataset in DATASETS {
        info!(dataset = dataset.name, "running dataset");
        let edges = dataset.edges()?;
        let graph = WeightedGraph::new(dataset.vertex_count, &edges)?;

        writeln!(out, "##### Dataset: {} #####\n", dataset.name)?;
        report::write_adjacency(&mut out, &graph)?;

        let dfs = traversal::depth_first(&graph, START_CITY)?;
        report::write_depth_first(&mut out, &dfs)?;

        let bfs = traversal::breadth_first(&graph, START_CITY)?;
        report::write_breadth_first(&mut out, &bfs)?;

        let paths = shortest_path::dijkstra(&graph, START_CITY)?;
        report::write_shortest_paths(&mut out, &paths)?;

        let tree = spanning_tree::prim(&graph)?;
        report::write_spanning_tree(&mut out, &tree)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

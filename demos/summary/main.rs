/// Per-component breakdown of a hard-coded structure.
/// Run with `cargo run --example summary`

use rod_cutter::components::connected_components;
use rod_cutter::from_str;
use rod_cutter::redundancy::surplus_per_component;

fn main() {
    let graph = from_str("1,2 3,4 3,4 5,6 6,7 7,5 7,5").expect("Edge list should be valid");
    let components = connected_components(&graph);

    let mut total = 0;
    for surplus in surplus_per_component(&graph, &components) {
        println!(
            "component {:?}: {} edges, spanning tree needs {}, {} to cut",
            surplus.vertices,
            surplus.edge_count,
            surplus.spanning_tree_edges,
            surplus.surplus()
        );
        total += surplus.surplus();
    }
    println!("Number of rods to cut: {}", total);
}

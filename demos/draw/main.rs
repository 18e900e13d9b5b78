/// Example of drawing the multigraph with its components.
/// I use it with `cargo run --example draw | neato -Tsvg > rods.svg`

use rod_cutter::components::connected_components;
use rod_cutter::from_str;
use rod_cutter::output::draw_graph;

fn main() {
    let graph = from_str("1,2 1,3 1,4 2,3 3,4 2,4 5,6 5,6").expect("Edge list should be valid");
    let components = connected_components(&graph);

    print!("{}", draw_graph(&graph, &components));
}

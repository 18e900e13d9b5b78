use rod_cutter::rods_to_cut;
use std::io::BufRead;

/// Reads one edge list from stdin and prints how many rods can be cut.
///
/// ```text
/// $ echo "1,2 3,4 3,4" | cut_rods
/// Number of rods to cut: 1
/// ```
fn main() {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .expect("Stdin should be readable");

    match rods_to_cut(&line) {
        Ok(count) => println!("Number of rods to cut: {}", count),
        Err(reason) => println!("Invalid input: {}", reason),
    }
}

//! Demonstration driver: builds a tree from random values, inspects it,
//! skews it with a run of large inserts, then rebalances it.
//!
//! Run with `cargo run --example driver`.

use balanced_bst::tree::Tree;

use rand::Rng;

/// Generate a random array of values in `0..max`.
fn generate_random_array(len: usize, max: u32) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0..max)).collect()
}

fn print_traversals(tree: &Tree<u32>) {
    let mut values = Vec::new();

    tree.level_order(|node| values.push(node.value().to_string()));
    println!("Level order: {}", values.join(" "));
    values.clear();

    tree.pre_order(|node| values.push(node.value().to_string()));
    println!("Pre order: {}", values.join(" "));
    values.clear();

    tree.in_order(|node| values.push(node.value().to_string()));
    println!("In order: {}", values.join(" "));
    values.clear();

    tree.post_order(|node| values.push(node.value().to_string()));
    println!("Post order: {}", values.join(" "));
}

fn main() {
    let random_array = generate_random_array(15, 100);
    let mut tree = Tree::build(random_array);

    println!("Initial tree:");
    print!("{}", tree);
    println!("Is the tree balanced? {}", tree.is_balanced());
    print_traversals(&tree);

    // Unbalance the tree with values past the generated range.
    for value in [101, 105, 110, 115, 120] {
        tree.insert(value);
    }

    println!("Tree after inserting large values:");
    print!("{}", tree);
    println!("Is the tree balanced? {}", tree.is_balanced());

    tree.rebalance();

    println!("Tree after rebalancing:");
    print!("{}", tree);
    println!("Is the tree balanced? {}", tree.is_balanced());
    print_traversals(&tree);
}

use avl_balanced_tree::BalancedTree;

fn main() {
    let tree: BalancedTree = (1..=6).collect();

    println!("Level-order traversal:");
    for key in tree.level_order() {
        let height = tree.search(key).map(|node| node.height()).unwrap_or_default();
        println!("Key: {}, Height: {}", key, height);
    }
}

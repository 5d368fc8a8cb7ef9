use std::io;

use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use avl_balanced_tree::BalancedTree;

fn initialize_logging() {
    let level = std::env::var("AVL_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .expect("logger is only initialized once");
}

fn main() -> io::Result<()> {
    initialize_logging();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut tree = BalancedTree::new();
    tree.insert(1);
    tree.insert(2);
    tree.display(&mut out)?;

    tree.insert(3);
    tree.insert(4);
    tree.display(&mut out)?;

    for key in 5..=9 {
        tree.insert(key);
    }
    tree.display(&mut out)?;

    info!("{} keys, {:?}", tree.len(), tree.rebalances());

    let in_order: Vec<String> = tree.in_order().map(|key| key.to_string()).collect();
    println!("in-order:   {}", in_order.join(" - "));
    let pre_order: Vec<String> = tree.pre_order().map(|key| key.to_string()).collect();
    println!("pre-order:  {}", pre_order.join(" "));
    let post_order: Vec<String> = tree.post_order().map(|key| key.to_string()).collect();
    println!("post-order: {}", post_order.join(" "));

    assert_eq!(tree.search(5).map(|node| node.key()), Some(5));
    assert!(tree.search(10).is_none());

    tree.clear();
    tree.display(&mut out)
}

//! `osc-tree` registers, removes and looks up OSC address patterns and prints
//! the resulting tree.
//!
//! Without any operation it replays a small demonstration.

use clap::Parser;
use osc_path_tree::PathTree;
use std::io::Write;
use std::process;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "osc-tree", version, about)]
struct Args {
    /// Register a pattern, may be repeated
    #[clap(short, long = "add", value_name = "PATTERN")]
    add: Vec<String>,

    /// Remove a registered pattern after all additions, may be repeated
    #[clap(short, long = "remove", value_name = "ADDRESS")]
    remove: Vec<String>,

    /// Look up an address after all additions and removals, may be repeated
    #[clap(short, long = "match", value_name = "ADDRESS")]
    matches: Vec<String>,

    /// Do not print the tree
    #[clap(short, long)]
    quiet: bool,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    log_level: log::LevelFilter,
}

const DEMO_PATTERNS: &[&str] = &[
    "/foo",
    "/barbie",
    "/food",
    "/bbq",
    "/barbeque",
    "/barby",
    "/baa",
    "/{barbara,badass}/foo",
];

const DEMO_REMOVALS: &[&str] = &["/baa", "/bbq"];

const DEMO_MATCHES: &[&str] = &["/bar", "/barby", "/badass/foo", "/fo?d"];

fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{} - {}", record.level(), record.args()))
        .filter(None, level)
        .parse_default_env()
        .init();
}

fn print_tree(tree: &PathTree<()>, quiet: bool) {
    if !quiet {
        print!("{tree}");
        println!("************************");
    }
}

fn run(args: Args) -> bool {
    let demo = args.add.is_empty() && args.remove.is_empty() && args.matches.is_empty();

    let (add, remove, matches) = if demo {
        log::info!("no operations given, running the demonstration");
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        (
            owned(DEMO_PATTERNS),
            owned(DEMO_REMOVALS),
            owned(DEMO_MATCHES),
        )
    } else {
        (args.add, args.remove, args.matches)
    };

    let mut tree = PathTree::new();
    let mut ok = true;

    for pattern in &add {
        if let Err(err) = tree.insert(pattern.as_str(), ()) {
            log::error!("cannot register {pattern:?}: {err}");
            ok = false;
        }
    }

    print_tree(&tree, args.quiet);

    if !remove.is_empty() {
        for address in &remove {
            if tree.remove(address).is_none() {
                log::warn!("{address:?} is not registered");
            }
        }

        print_tree(&tree, args.quiet);
    }

    for address in &matches {
        match tree.at(address) {
            Ok(matched) => println!("{address} matches {}", matched.pattern),
            Err(err) => println!("{address}: {err}"),
        }
    }

    ok
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level);

    if !run(args) {
        process::exit(1);
    }
}

//! `avl-tree` — build an AVL tree from a JSON array of keys and report on it.
//!
//! Usage:
//!   avl-tree [--policy ignore|update|count] [--delete '<json array>'] < keys.json
//!
//! Keys are read from stdin. Set `RUST_LOG=avl_tree=trace` to watch every
//! insert, delete and rotation on stderr.

use std::io::{self, Read};

use avl_tree::cli::{run, CliOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(buf.trim(), &options) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

//! CLI entry point for mdtoc

use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdtoc::{TocWalker, WalkerConfig, print_json, print_markdown};

#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(about = "Generate a nested markdown table of contents for a documentation tree")]
#[command(version)]
struct Args {
    /// Documentation root to scan
    #[arg(default_value = "./doc")]
    path: PathBuf,

    /// Directory that README links are made relative to
    #[arg(long = "link-base", value_name = "DIR", default_value = ".")]
    link_base: PathBuf,

    /// Skip directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Output the table of contents as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if !args.path.exists() {
        eprintln!(
            "mdtoc: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    let config = WalkerConfig {
        link_base: args.link_base,
        ignore_patterns: args.ignore,
    };

    let mut walker = TocWalker::new(config);
    let toc = walker.walk(&args.path);

    let result = if args.json {
        print_json(&toc)
    } else {
        print_markdown(&toc)
    };

    if let Err(e) = result {
        eprintln!("mdtoc: error writing output: {}", e);
        process::exit(1);
    }
}

// Enum Rewriter CLI - walk a source tree, seal its string enums

use anyhow::Result;
use multitax_types::transform::rewrite_tree;
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: enum-rewriter <root_dir>");
        std::process::exit(1);
    }

    let root = Path::new(&args[1]);

    println!("🔧 Rewriting TypeScript enums under {:?}", root);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let report = rewrite_tree(root)?;

    for path in &report.rewritten {
        println!("✓ {:?}", path);
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "🎉 Scanned {} .ts files, rewrote {}",
        report.scanned,
        report.rewritten.len()
    );

    Ok(())
}

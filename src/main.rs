//! Configuration-injection build pass CLI.
//!
//! Reads a program-structure index snapshot, resolves every
//! configuration-property injection request in the declared component
//! graph, and emits the synthetic component registrations and the
//! sealed validation set the container consumes at process start.
//!
//! **Key modes**
//! - Build only: `--index app.json --emit-artifacts artifacts.json`
//! - Build + start-time validation: `... --properties app.properties`
//!   (fails with an aggregate report naming every unresolved key)

use anyhow::Result;
use clap::Parser;

use confweave::args::Args;
use confweave::runner;

fn main() -> Result<()> {
    let args = Args::parse();
    runner::run(&args)
}

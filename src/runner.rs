//! Build-pass runner.
//!
//! Loads the index snapshot, wires the collaborators, runs the
//! pipeline, and writes deterministic, diff-friendly JSON artifacts.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use confweave_core::{
    run_build, BuildArtifacts, DefaultClassEmitter, NoopStartupHook, PropertySourceHook,
    StartupHook,
};
use confweave_index::ProgramIndex;

use crate::args::Args;
use crate::properties::PropertiesFile;

pub fn run(args: &Args) -> Result<()> {
    let index = ProgramIndex::load(&args.index)?;

    let mut emitter = DefaultClassEmitter;
    let mut hook: Box<dyn StartupHook> = match args.properties.as_ref() {
        Some(path) => {
            let source = PropertiesFile::load(path)?;
            Box::new(PropertySourceHook::new(source))
        }
        None => Box::new(NoopStartupHook),
    };

    let artifacts = run_build(&index, &mut emitter, hook.as_mut())
        .with_context(|| format!("build pass over {}", args.index.display()))?;

    if args.sanity {
        print_sanity(&artifacts);
    }

    if let Some(path) = args.emit_artifacts.as_ref() {
        write_canonical_json(path, &artifacts)?;
    }
    if let Some(path) = args.emit_requests.as_ref() {
        write_canonical_json(path, &artifacts.property_requests)?;
    }

    Ok(())
}

fn print_sanity(artifacts: &BuildArtifacts) {
    eprintln!(
        "sanity: registrations={} config_classes={} requests={} exclusions={} reflective={} validated={}",
        artifacts.registrations.len(),
        artifacts.config_classes.len(),
        artifacts.property_requests.len(),
        artifacts.discovery_exclusions.len(),
        artifacts.reflective_types.len(),
        artifacts.validation.len(),
    );
}

/// Write pretty JSON with a trailing newline; `-` means stdout, where a
/// broken pipe is not an error.
fn write_canonical_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if path.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        if let Err(e) = serde_json::to_writer_pretty(&mut writer, value) {
            if e.is_io() && e.io_error_kind() == Some(io::ErrorKind::BrokenPipe) {
                return Ok(());
            }
            return Err(e).context("serialize JSON");
        }
        writer.write_all(b"\n").ok();
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).context("serialize JSON")?;
    writer.write_all(b"\n").ok();
    Ok(())
}

use std::fs::canonicalize;

use anyhow::Context;
use clap::Parser;

use crate::cli::args::Args;
use crate::cli::progress::{StepContext, TaskKey};
use crate::generate::{generate_decks, read_buffer_lib, read_settings, GenerateParams, OutputMode};
use crate::Result;

pub mod args;
pub mod progress;

pub const BANNER: &str = "BUFLUT v0.1: clock buffer characterization decks\n";

pub fn run() -> Result<()> {
    let args = Args::parse();
    let params = resolve_params(args)?;

    println!("{BANNER}");
    println!("Project root: {:?}", &params.root);
    println!("Settings: {:?}", &params.settings);
    println!("Buffer library: {:?}", &params.buffers);
    println!("Measured edge: {}\n", params.edge);

    let mut ctx = StepContext::new(&[
        TaskKey::ReadBufferLib,
        TaskKey::ReadSettings,
        TaskKey::GenerateDecks,
    ]);

    let buffers = ctx.check(read_buffer_lib(&params))?;
    ctx.finish(TaskKey::ReadBufferLib);

    if buffers.buffer_num == 0 {
        ctx.skip_remaining();
        println!("Buffer library is empty; no decks generated\n");
        return Ok(());
    }

    let settings = ctx.check(read_settings(&params))?;
    ctx.finish(TaskKey::ReadSettings);

    let written = ctx.check(generate_decks(&params, &settings, &buffers))?;
    ctx.finish(TaskKey::GenerateDecks);

    println!(
        "Generated {} deck(s) with {} sweep points each",
        written.len(),
        settings.library.input_slew.len() * settings.library.output_load.len()
    );
    if let Some(last) = written.last() {
        println!("Last deck saved to: {:?}\n", last);
    }

    Ok(())
}

fn resolve_params(args: Args) -> Result<GenerateParams> {
    let root = canonicalize(&args.root)
        .with_context(|| format!("Project root {:?} does not exist", &args.root))?;

    let mut params = GenerateParams::new(root);
    if let Some(settings) = args.settings {
        params.settings = settings;
    }
    if let Some(buffers) = args.buffers {
        params.buffers = buffers;
    }
    params.edge = args.edge;
    params.output = if args.per_buffer {
        OutputMode::PerBuffer
    } else {
        OutputMode::Shared
    };
    params.check_subckt = args.check_subckt;

    Ok(params)
}

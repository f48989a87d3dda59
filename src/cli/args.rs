use clap::Parser;
use std::path::PathBuf;

use crate::deck::Edge;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about,
    help_template(
        "{before-help}{name} {version}\n{author-with-newline}{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}{after-help}"
    )
)]
pub struct Args {
    /// Project root containing `utils/`, `library/`, and `workspace/`.
    #[arg(short, long, env = "SYMCTS")]
    pub root: PathBuf,

    /// Settings file. Defaults to `<root>/utils/settings.json`.
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Buffer library metadata file. Defaults to `<root>/utils/buffer.json`.
    #[arg(short, long)]
    pub buffers: Option<PathBuf>,

    /// Input transition to measure.
    #[arg(short, long, value_enum, default_value_t = Edge::Rise)]
    pub edge: Edge,

    /// Write one deck per buffer instead of overwriting `workspace/for_lut.sp`.
    #[arg(long)]
    pub per_buffer: bool,

    /// Fail if a buffer's subcircuit file is missing.
    #[arg(long)]
    pub check_subckt: bool,
}

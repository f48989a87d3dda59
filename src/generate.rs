use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{debug, info};

use crate::config::{parse_buffer_config, parse_settings, BufferLibConfig, Settings};
use crate::deck::{save_deck, DeckParams, Edge};
use crate::{paths, Result};

/// Where generated decks are written.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OutputMode {
    /// Every buffer writes `workspace/for_lut.sp`, so only the last deck survives.
    #[default]
    Shared,
    /// Buffer `i` writes `workspace/for_lut_buf<i>.sp`.
    PerBuffer,
}

impl OutputMode {
    pub fn deck_path(&self, root: impl AsRef<Path>, index: usize) -> PathBuf {
        match self {
            OutputMode::Shared => paths::out_deck(root),
            OutputMode::PerBuffer => paths::out_buffer_deck(root, index),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GenerateParams {
    /// Project root against which library and workspace paths are resolved.
    pub root: PathBuf,
    pub settings: PathBuf,
    pub buffers: PathBuf,
    pub edge: Edge,
    pub output: OutputMode,
    /// Fail before writing a deck whose subcircuit file does not exist.
    pub check_subckt: bool,
}

impl GenerateParams {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            settings: paths::settings_path(&root),
            buffers: paths::buffer_config_path(&root),
            root,
            edge: Edge::default(),
            output: OutputMode::default(),
            check_subckt: false,
        }
    }
}

pub fn read_settings(params: &GenerateParams) -> Result<Settings> {
    debug!("reading settings from {:?}", &params.settings);
    Ok(parse_settings(&params.settings)?)
}

pub fn read_buffer_lib(params: &GenerateParams) -> Result<BufferLibConfig> {
    debug!("reading buffer library from {:?}", &params.buffers);
    Ok(parse_buffer_config(&params.buffers)?)
}

/// Writes one deck per buffer and returns the path written for each index.
pub fn generate_decks(
    params: &GenerateParams,
    settings: &Settings,
    buffers: &BufferLibConfig,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(buffers.buffer_num);

    for index in buffers.indices() {
        let mut deck = DeckParams::from_settings(&params.root, settings, index);
        deck.edge = params.edge;

        if params.check_subckt && !deck.subckt.is_file() {
            bail!(
                "Subcircuit for buffer {} not found at {:?}",
                index,
                &deck.subckt
            );
        }

        let path = params.output.deck_path(&params.root, index);
        save_deck(&path, &deck)
            .with_context(|| format!("Error generating deck for buffer {index}"))?;
        info!(
            "wrote {} deck for {} ({} sweep points) to {:?}",
            params.edge,
            deck.cell_name(),
            deck.lut_points().len(),
            &path
        );

        written.push(path);
    }

    Ok(written)
}

/// Reads the buffer library, then the settings, and writes every deck.
///
/// An empty library writes nothing and does not need a settings file.
pub fn generate_all(params: &GenerateParams) -> Result<Vec<PathBuf>> {
    let buffers = read_buffer_lib(params)?;
    if buffers.buffer_num == 0 {
        info!("buffer library is empty, no decks to generate");
        return Ok(Vec::new());
    }
    let settings = read_settings(params)?;
    generate_decks(params, &settings, &buffers)
}

use std::path::{Path, PathBuf};

use anyhow::Context as AnyhowContext;
use derive_builder::Builder;
use rust_decimal::Decimal;
use serde::Serialize;
use tera::Context;

use crate::config::{Settings, SimulationSettings};
use crate::units::Units;
use crate::{paths, Result, TEMPLATES};

pub mod lut;
pub mod measure;

pub use lut::{lut_points, LutPoint};
pub use measure::Edge;

pub const DECK_TEMPLATE: &str = "lut_deck.sp";

/// Everything needed to render the characterization deck of one buffer.
#[derive(Debug, Clone, Eq, PartialEq, Builder)]
#[builder(derive(Debug))]
pub struct DeckParams {
    /// Index of the buffer; the instantiated subcircuit is `buf<index>`.
    pub buffer_index: usize,
    /// Subcircuit definition of the buffer.
    #[builder(setter(into))]
    pub subckt: PathBuf,
    /// Transistor model file.
    #[builder(setter(into))]
    pub tech_model: PathBuf,
    /// Supply voltage.
    pub voltage: Decimal,
    #[builder(default)]
    pub units: Units,
    #[builder(setter(into))]
    pub input_slew: Vec<Decimal>,
    #[builder(setter(into))]
    pub output_load: Vec<Decimal>,
    #[builder(default)]
    pub edge: Edge,
    #[builder(default)]
    pub simulation: SimulationSettings,
}

impl DeckParams {
    #[inline]
    pub fn builder() -> DeckParamsBuilder {
        DeckParamsBuilder::default()
    }

    /// Resolves the deck for buffer `index` of the project rooted at `root`.
    pub fn from_settings(root: impl AsRef<Path>, settings: &Settings, index: usize) -> Self {
        let root = root.as_ref();
        Self {
            buffer_index: index,
            subckt: paths::buffer_subckt(root, index),
            tech_model: root.join(&settings.simulation.tech_model),
            voltage: settings.library.voltage,
            units: settings.unit.clone(),
            input_slew: settings.library.input_slew.clone(),
            output_load: settings.library.output_load.clone(),
            edge: Edge::default(),
            simulation: settings.simulation.clone(),
        }
    }

    #[inline]
    pub fn cell_name(&self) -> String {
        format!("buf{}", self.buffer_index)
    }

    #[inline]
    pub fn lut_points(&self) -> Vec<LutPoint> {
        lut_points(&self.input_slew, &self.output_load)
    }
}

#[derive(Serialize)]
struct DeckContext {
    title: String,
    tech_model: String,
    subckt: String,
    options: String,
    default_slew: String,
    default_load: String,
    voltage: String,
    precision: String,
    length: String,
    monte_carlo: usize,
    pulse_delay: String,
    pulse_width: String,
    pulse_period: String,
    cell: String,
    rows: Vec<String>,
    edge: &'static str,
    slew_trig: String,
    slew_targ: String,
}

impl DeckContext {
    fn new(params: &DeckParams) -> Self {
        let sim = &params.simulation;
        let units = &params.units;
        let (slew_trig, slew_targ) = params.edge.slew_thresholds(sim.slew_low, sim.slew_high);

        Self {
            title: sim.title.clone(),
            tech_model: params.tech_model.display().to_string(),
            subckt: params.subckt.display().to_string(),
            options: sim.options.clone(),
            default_slew: units.time(sim.default_slew).to_string(),
            default_load: units.capacitance(sim.default_load).to_string(),
            voltage: params.voltage.normalize().to_string(),
            precision: units.time(sim.precision).to_string(),
            length: units.time(sim.length).to_string(),
            monte_carlo: sim.monte_carlo,
            pulse_delay: sim.pulse_delay.clone(),
            pulse_width: sim.pulse_width.clone(),
            pulse_period: sim.pulse_period.clone(),
            cell: params.cell_name(),
            rows: params
                .lut_points()
                .iter()
                .map(|point| point.row(units))
                .collect(),
            edge: params.edge.keyword(),
            slew_trig: slew_trig.normalize().to_string(),
            slew_targ: slew_targ.normalize().to_string(),
        }
    }
}

pub fn generate_deck(params: &DeckParams) -> Result<String> {
    let ctx = DeckContext::new(params);
    Ok(TEMPLATES.render(DECK_TEMPLATE, &Context::from_serialize(ctx)?)?)
}

/// Renders the deck and writes it to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn save_deck(path: impl AsRef<Path>, params: &DeckParams) -> Result<()> {
    let deck = generate_deck(params)?;

    let path = path.as_ref();
    std::fs::write(path, deck).with_context(|| format!("Error writing deck to {path:?}"))?;

    Ok(())
}

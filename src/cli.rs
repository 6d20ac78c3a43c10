use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::AppError;
use crate::catalog;
use crate::config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
use crate::conversion;
use crate::hydraulics;
use crate::i18n::{keys, Translator};
use crate::input::{FluidInput, FluidSource, PipeInput};
use crate::report::DisplayResult;
use crate::units::{default_units, units_available, QuantityFamily, UnitQuantity, UnitSystem};

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(
    name = "pipe_head_loss",
    version,
    about = "Darcy-Weisbach head loss and pressure drop for circular pipes"
)]
pub struct Cli {
    /// Output language: auto, en, es, ko
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute head loss, pressure drop and the pressure profile
    Calc(CalcArgs),
    /// Convert a value between units of one quantity
    Convert {
        /// length, diameter, roughness, flow-rate, density, viscosity
        quantity: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// List input units per quantity
    Units {
        #[arg(long, value_enum)]
        system: Option<SystemArg>,
    },
    /// List pipe materials and their roughness
    Materials,
    /// List reference fluids
    Fluids,
    /// Show or change the saved configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the current configuration
    Show,
    /// Change the unit system and reset input units to its defaults
    SetSystem {
        #[arg(value_enum)]
        system: SystemArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemArg {
    Si,
    Imperial,
}

impl From<SystemArg> for UnitSystem {
    fn from(value: SystemArg) -> Self {
        match value {
            SystemArg::Si => UnitSystem::SI,
            SystemArg::Imperial => UnitSystem::Imperial,
        }
    }
}

/// `calc` 인자. 단위를 생략하면 설정(또는 `--system`)의 기본 단위를 쓴다.
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Pipe length
    #[arg(long, allow_negative_numbers = true)]
    pub length: f64,
    #[arg(long)]
    pub length_unit: Option<String>,
    /// Inner diameter
    #[arg(long, allow_negative_numbers = true)]
    pub diameter: f64,
    #[arg(long)]
    pub diameter_unit: Option<String>,
    /// Pipe material code or name (sets the roughness)
    #[arg(long, conflicts_with = "roughness")]
    pub material: Option<String>,
    /// Absolute roughness
    #[arg(long, allow_negative_numbers = true)]
    pub roughness: Option<f64>,
    #[arg(long, requires = "roughness")]
    pub roughness_unit: Option<String>,
    /// Volumetric flow rate
    #[arg(long, allow_negative_numbers = true)]
    pub flow: f64,
    #[arg(long)]
    pub flow_unit: Option<String>,
    /// Reference fluid code or name
    #[arg(long, conflicts_with_all = ["density", "viscosity"])]
    pub fluid: Option<String>,
    /// Custom fluid density
    #[arg(long, requires = "viscosity", allow_negative_numbers = true)]
    pub density: Option<f64>,
    #[arg(long, requires = "density")]
    pub density_unit: Option<String>,
    /// Custom fluid kinematic viscosity
    #[arg(long, requires = "density", allow_negative_numbers = true)]
    pub viscosity: Option<f64>,
    #[arg(long, requires = "viscosity")]
    pub viscosity_unit: Option<String>,
    /// Unit system for default input units and for the results
    #[arg(long, value_enum)]
    pub system: Option<SystemArg>,
    /// Write the distance/pressure-loss profile as CSV
    #[arg(long)]
    pub profile_csv: Option<PathBuf>,
}

/// 압력손실 계산 명령을 처리한다.
pub fn handle_calc(
    args: &CalcArgs,
    cfg: &Config,
    tr: &Translator,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let system = args.system.map(UnitSystem::from).unwrap_or(cfg.unit_system);
    let units = if system == cfg.unit_system {
        cfg.input_units
    } else {
        default_units(system)
    };

    let length = UnitQuantity::new(
        args.length,
        unit_or(args.length_unit.as_deref(), units.length, conversion::parse_length_unit)?,
    );
    let diameter = UnitQuantity::new(
        args.diameter,
        unit_or(args.diameter_unit.as_deref(), units.diameter, conversion::parse_length_unit)?,
    );
    let pipe = match args.roughness {
        Some(roughness) => PipeInput {
            length,
            diameter,
            roughness: UnitQuantity::new(
                roughness,
                unit_or(
                    args.roughness_unit.as_deref(),
                    units.roughness,
                    conversion::parse_length_unit,
                )?,
            ),
        },
        None => {
            let code = args.material.as_deref().unwrap_or(&cfg.default_material);
            PipeInput::with_material_code(length, diameter, code)?
        }
    };

    let source = match (args.density, args.viscosity) {
        (Some(density), Some(viscosity)) => FluidSource::Custom {
            density: UnitQuantity::new(
                density,
                unit_or(args.density_unit.as_deref(), units.density, conversion::parse_density_unit)?,
            ),
            kinematic_viscosity: UnitQuantity::new(
                viscosity,
                unit_or(
                    args.viscosity_unit.as_deref(),
                    units.kinematic_viscosity,
                    conversion::parse_viscosity_unit,
                )?,
            ),
        },
        _ => FluidSource::preset(args.fluid.as_deref().unwrap_or(&cfg.default_fluid))?,
    };
    let fluid = FluidInput {
        flow_rate: UnitQuantity::new(
            args.flow,
            unit_or(args.flow_unit.as_deref(), units.flow_rate, conversion::parse_flow_rate_unit)?,
        ),
        source,
    };

    let pipe_spec = pipe.to_pipe_spec();
    let fluid_spec = fluid.to_fluid_spec();
    tracing::debug!(?pipe_spec, ?fluid_spec, "normalized input to SI");

    let Some(result) = hydraulics::compute(&pipe_spec, &fluid_spec) else {
        tracing::warn!("length, diameter or flow rate is not positive");
        writeln!(out, "{}", tr.t(keys::NOT_COMPUTABLE))?;
        return Ok(());
    };
    tracing::debug!(
        reynolds = result.reynolds_number,
        regime = %result.flow_regime,
        friction_factor = result.friction_factor,
        "computed head loss"
    );

    let shown = DisplayResult::from_result(&result, system);
    let fluid_name = fluid.source.name().unwrap_or_else(|| tr.t(keys::CUSTOM_FLUID));
    for line in shown.summary_lines(tr, Some(fluid_name)) {
        writeln!(out, "{line}")?;
    }
    if let Some(path) = &args.profile_csv {
        shown.write_profile_csv(File::create(path)?)?;
        tracing::info!(path = %path.display(), "wrote pressure profile");
        writeln!(out, "{} {}", tr.t(keys::REPORT_PROFILE_SAVED), path.display())?;
    }
    Ok(())
}

fn unit_or<U>(
    arg: Option<&str>,
    default: U,
    parse: fn(&str) -> Result<U, conversion::ConversionError>,
) -> Result<U, conversion::ConversionError> {
    arg.map_or(Ok(default), parse)
}

/// 단위 변환 명령을 처리한다.
pub fn handle_convert(
    quantity: &str,
    value: f64,
    from: &str,
    to: &str,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let family = conversion::parse_family(quantity)?;
    let result = conversion::convert_str(family, value, from, to)?;
    writeln!(out, "{value} {from} = {result} {to}")?;
    Ok(())
}

/// 계열별 입력 단위 목록을 출력한다. 기본 단위에 표시를 붙인다.
pub fn handle_units(system: UnitSystem, tr: &Translator, out: &mut dyn Write) -> Result<(), AppError> {
    writeln!(out, "{} ({system})", tr.t(keys::UNITS_HEADING))?;
    let defaults = default_units(system);
    for family in QuantityFamily::ALL {
        let listed: Vec<String> = units_available(family, system)
            .iter()
            .map(|u| {
                if *u == defaults.get(family) {
                    format!("{u} [{}]", tr.t(keys::UNITS_DEFAULT))
                } else {
                    u.to_string()
                }
            })
            .collect();
        writeln!(out, "  {:<10} {}", family.name(), listed.join(", "))?;
    }
    Ok(())
}

pub fn handle_materials(tr: &Translator, out: &mut dyn Write) -> Result<(), AppError> {
    writeln!(out, "{}", tr.t(keys::MATERIALS_HEADING))?;
    for m in catalog::materials() {
        writeln!(out, "  {:<11} {:<28} {} mm", m.code, m.name, m.roughness_mm)?;
    }
    Ok(())
}

pub fn handle_fluids(tr: &Translator, out: &mut dyn Write) -> Result<(), AppError> {
    writeln!(out, "{}", tr.t(keys::FLUIDS_HEADING))?;
    for f in catalog::fluids() {
        writeln!(
            out,
            "  {:<10} {:<32} {} kg/m³  {} cSt",
            f.code, f.name, f.density_kg_per_m3, f.kinematic_viscosity_cst
        )?;
    }
    Ok(())
}

/// 설정 조회/변경 명령을 처리한다.
pub fn handle_config(
    cmd: &ConfigCommand,
    cfg: &mut Config,
    path: &Path,
    tr: &Translator,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match cmd {
        ConfigCommand::Show => {
            let text = toml::to_string_pretty(cfg).map_err(ConfigError::from)?;
            write!(out, "{text}")?;
        }
        ConfigCommand::SetSystem { system } => {
            cfg.set_unit_system((*system).into());
            cfg.save(path)?;
            writeln!(
                out,
                "{}: {}",
                tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
                cfg.unit_system
            )?;
            writeln!(out, "{} {}", tr.t(keys::SETTINGS_SAVED), path.display())?;
        }
    }
    Ok(())
}

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use crate::boiler::{self, BoilerModelInput, SprayInput};
use crate::config::{Config, ConfigError, DEFAULT_SETTINGS_PATH};
use crate::error::ThermalModelError;
use crate::response::time_axis;
use crate::steam::If97Provider;
use crate::superheater::{
    load_unit_config, ConfigurationError, OperatingPoint, SuperheaterUnit, UnitConfig, UnitKind,
};
use crate::ui_cli;
use crate::units::{to_bar, to_celsius, PressureUnit, TemperatureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 애플리케이션 설정 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 과열기 상수 파일 오류
    #[error("과열기 설정 오류: {0}")]
    UnitConfig(#[from] ConfigurationError),
    /// 모델 계산 오류
    #[error("계산 오류: {0}")]
    Model(#[from] ThermalModelError),
}

#[derive(Debug, Parser)]
#[command(name = "boiler_thermal_toolbox")]
#[command(about = "과열기 동특성(θ, τ, FOPDT) 및 간이 보일러 계산 도구", long_about = None)]
pub struct Cli {
    /// 애플리케이션 설정 파일(TOML)
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 운전 조건에서 증기 물성과 수송 지연/시정수를 계산한다
    Properties(UnitArgs),
    /// FOPDT 계단 응답과 출구 온도 궤적을 계산한다
    Response(ResponseArgs),
    /// 간이 보일러 효율을 계산한다
    Efficiency {
        /// 증기 압력 [bar]
        #[arg(long)]
        steam_pressure: f64,
        /// 증기 온도 [°C]
        #[arg(long)]
        steam_temperature: f64,
        /// 연료 유량 [연료단위/h]
        #[arg(long)]
        fuel_flow: f64,
    },
    /// 감온 분무 확산과 분무 패턴을 계산한다
    Spray {
        /// 분무 압력 [bar]
        #[arg(long)]
        pressure: f64,
        /// 분사 각도 [°]
        #[arg(long)]
        angle: f64,
        /// 분무 유량 [t/h]
        #[arg(long)]
        flow_rate: f64,
    },
    /// 현재 설정을 TOML 파일로 저장한다 (파일이 없으면 기본값으로 생성)
    InitSettings,
}

#[derive(Debug, Args)]
pub struct UnitArgs {
    /// 과열기 종류
    #[arg(long, value_enum)]
    pub unit: UnitKind,
    /// 과열기 상수 YAML 파일 (미지정 시 설정 파일 경로, 그것도 없으면 기본 상수)
    #[arg(long)]
    pub unit_config: Option<PathBuf>,
    /// 파일을 무시하고 기본 상수 사용
    #[arg(long, conflicts_with = "unit_config")]
    pub defaults: bool,
    /// 증기 압력 (절대압)
    #[arg(long)]
    pub pressure: f64,
    #[arg(long, value_enum, default_value_t = PressureUnit::Bar)]
    pub pressure_unit: PressureUnit,
    /// 증기 온도
    #[arg(long)]
    pub temperature: f64,
    #[arg(long, value_enum, default_value_t = TemperatureUnit::Celsius)]
    pub temperature_unit: TemperatureUnit,
    /// 증기 유량 [t/h]
    #[arg(long)]
    pub flow: f64,
}

impl UnitArgs {
    fn operating_point(&self) -> OperatingPoint {
        OperatingPoint::new(
            to_bar(self.pressure, self.pressure_unit),
            to_celsius(self.temperature, self.temperature_unit),
            self.flow,
        )
    }
}

#[derive(Debug, Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    pub unit: UnitArgs,
    /// 공정 이득 k (미지정 시 과열기 기본값)
    #[arg(long)]
    pub gain: Option<f64>,
    /// 계산 시간 범위 [s]
    #[arg(long)]
    pub horizon: Option<f64>,
    /// 샘플 수
    #[arg(long)]
    pub samples: Option<usize>,
    /// 출구 온도 환산 상승폭 [K] (미지정 시 출구-입구 설정온도 차)
    #[arg(long)]
    pub rise: Option<f64>,
    /// 결과를 CSV 로 저장할 경로
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 명령행 인자와 설정에 따라 과열기 상수를 결정한다.
pub fn resolve_unit_config(args: &UnitArgs, cfg: &Config) -> Result<UnitConfig, AppError> {
    if args.defaults {
        return Ok(UnitConfig::defaults(args.unit));
    }
    if let Some(path) = &args.unit_config {
        return Ok(load_unit_config(path, args.unit)?);
    }
    let path = cfg.unit_file(args.unit);
    if path.exists() {
        Ok(load_unit_config(path, args.unit)?)
    } else {
        info!(
            path = %path.display(),
            unit = args.unit.label(),
            "상수 파일이 없어 기본 상수를 사용합니다"
        );
        Ok(UnitConfig::defaults(args.unit))
    }
}

fn build_unit(args: &UnitArgs, cfg: &Config) -> Result<SuperheaterUnit<If97Provider>, AppError> {
    let unit_cfg = resolve_unit_config(args, cfg)?;
    Ok(SuperheaterUnit::from_config(&unit_cfg, If97Provider::new())?)
}

/// 선택된 명령을 실행한다.
pub fn run(cli: &Cli, cfg: &Config) -> Result<(), AppError> {
    match &cli.command {
        Command::Properties(args) => {
            let unit = build_unit(args, cfg)?;
            let op = args.operating_point();
            let dynamics = unit.calculate_properties(&op)?;
            ui_cli::print_unit(&unit);
            ui_cli::print_dynamics(&op, &dynamics);
        }
        Command::Response(args) => {
            let unit = build_unit(&args.unit, cfg)?;
            let op = args.unit.operating_point();
            let dynamics = unit.calculate_properties(&op)?;
            let times = time_axis(
                args.horizon.unwrap_or(cfg.response.horizon_s),
                args.samples.unwrap_or(cfg.response.samples),
            )?;
            let gain = args.gain.unwrap_or(unit.process_gain());
            let curve = unit.step_response_with_gain(times, &dynamics, gain)?;
            let (base_c, default_rise) = unit.default_temperature_rise();
            let outlet_c = curve.outlet_temperature(base_c, args.rise.unwrap_or(default_rise));

            ui_cli::print_dynamics(&op, &dynamics);
            ui_cli::print_curve_summary(&curve, &outlet_c);
            if let Some(path) = &args.output {
                let writer = BufWriter::new(File::create(path)?);
                ui_cli::write_curve_csv(writer, &curve, &outlet_c)?;
                info!(path = %path.display(), rows = curve.len(), "응답 곡선 CSV 저장");
            }
        }
        Command::Efficiency {
            steam_pressure,
            steam_temperature,
            fuel_flow,
        } => {
            let result = boiler::boiler_efficiency(BoilerModelInput {
                steam_pressure_bar: *steam_pressure,
                steam_temperature_c: *steam_temperature,
                fuel_flow_per_h: *fuel_flow,
            })?;
            ui_cli::print_efficiency(&result);
        }
        Command::Spray {
            pressure,
            angle,
            flow_rate,
        } => {
            let input = SprayInput {
                pressure_bar: *pressure,
                angle_deg: *angle,
                flow_rate_t_per_h: *flow_rate,
            };
            ui_cli::print_spray(&input);
        }
        Command::InitSettings => {
            cfg.save(&cli.settings)?;
            info!(path = %cli.settings.display(), "설정 파일 저장");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_response_command() {
        let cli = Cli::try_parse_from([
            "boiler_thermal_toolbox",
            "response",
            "--unit",
            "final",
            "--defaults",
            "--pressure",
            "4",
            "--pressure-unit",
            "mega-pascal",
            "--temperature",
            "410",
            "--flow",
            "200",
            "--gain",
            "0.7",
        ])
        .expect("parse");
        let Command::Response(args) = cli.command else {
            panic!("expected response command");
        };
        assert_eq!(args.unit.unit, UnitKind::Final);
        assert_eq!(args.gain, Some(0.7));
        let op = args.unit.operating_point();
        assert!((op.pressure_bar - 40.0).abs() < 1e-12);
    }

    #[test]
    fn defaults_flag_skips_files() {
        let cli = Cli::try_parse_from([
            "boiler_thermal_toolbox",
            "properties",
            "--unit",
            "platen",
            "--defaults",
            "--pressure",
            "40",
            "--temperature",
            "350",
            "--flow",
            "200",
        ])
        .expect("parse");
        let Command::Properties(args) = cli.command else {
            panic!("expected properties command");
        };
        let unit_cfg = resolve_unit_config(&args, &Config::default()).expect("defaults");
        assert_eq!(unit_cfg, UnitConfig::defaults(UnitKind::Platen));
    }
}

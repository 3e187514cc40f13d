//! 과열기 상수 YAML 로더. 파일 입출력은 여기서만 하고, 모델에는 검증된
//! `UnitConfig`를 넘긴다.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::kind::UnitKind;
use super::spec::{DerivedGeometry, ThermalUnitSpec};
use crate::error::ThermalModelError;

const DEFAULT_TUBE_OD_MM: f64 = 57.0;
const DEFAULT_TUBE_ID_MM: f64 = 41.0;

/// 설정 파일 로드 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("설정 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML 파싱 오류: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("설정 항목 누락: {0}")]
    MissingSection(String),
    #[error("설정 값 오류: {0}")]
    Invalid(#[from] ThermalModelError),
}

#[derive(Debug, Deserialize)]
struct UnitDocument {
    structure: StructureSection,
    thermal: ThermalSection,
    #[serde(default)]
    sections: Vec<serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
struct StructureSection {
    #[serde(alias = "n_panels")]
    n_coils: u32,
    #[serde(alias = "tubes_per_panel")]
    tubes_per_coil: u32,
    #[serde(alias = "passes_per_panel")]
    passes_per_coil: u32,
    pass_length_m: f64,
    total_length_m: f64,
    tube_od_mm: Option<f64>,
    tube_id_mm: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ThermalSection {
    #[serde(rename = "U_W_m2K_low_load")]
    u_low_load_w_m2k: f64,
    #[serde(rename = "setpoint_inlet_C")]
    setpoint_inlet_c: f64,
    #[serde(rename = "setpoint_outlet_C")]
    setpoint_outlet_c: f64,
    process_gain: Option<f64>,
}

/// 검증을 마친 과열기 설정.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConfig {
    pub kind: UnitKind,
    pub spec: ThermalUnitSpec,
    pub process_gain: f64,
    /// 구간별 재질 정보. 계산에는 쓰지 않고 그대로 전달한다.
    pub sections: Vec<serde_yaml::Value>,
}

impl UnitConfig {
    /// 설정 파일 없이 기본 상수로 구성한다.
    pub fn defaults(kind: UnitKind) -> Self {
        Self {
            kind,
            spec: kind.default_spec(),
            process_gain: kind.default_gain(),
            sections: Vec::new(),
        }
    }
}

/// YAML 문자열에서 `kind`에 해당하는 과열기 설정을 읽는다.
pub fn parse_unit_config(content: &str, kind: UnitKind) -> Result<UnitConfig, ConfigurationError> {
    let root: serde_yaml::Value = serde_yaml::from_str(content)?;
    let section = root
        .get(kind.config_key())
        .cloned()
        .ok_or_else(|| ConfigurationError::MissingSection(kind.config_key().to_string()))?;
    let doc: UnitDocument = serde_yaml::from_value(section)?;

    let spec = ThermalUnitSpec {
        n_coils: doc.structure.n_coils,
        tubes_per_coil: doc.structure.tubes_per_coil,
        passes_per_coil: doc.structure.passes_per_coil,
        pass_length_m: doc.structure.pass_length_m,
        total_length_m: doc.structure.total_length_m,
        tube_od_mm: doc.structure.tube_od_mm.unwrap_or(DEFAULT_TUBE_OD_MM),
        tube_id_mm: doc.structure.tube_id_mm.unwrap_or(DEFAULT_TUBE_ID_MM),
        u_low_load_w_m2k: doc.thermal.u_low_load_w_m2k,
        setpoint_inlet_c: doc.thermal.setpoint_inlet_c,
        setpoint_outlet_c: doc.thermal.setpoint_outlet_c,
    };
    DerivedGeometry::from_spec(&spec)?;

    let process_gain = doc.thermal.process_gain.unwrap_or(kind.default_gain());
    if !process_gain.is_finite() {
        return Err(ThermalModelError::InvalidParameter(format!(
            "process_gain 값이 유한하지 않습니다 ({process_gain})"
        ))
        .into());
    }

    Ok(UnitConfig {
        kind,
        spec,
        process_gain,
        sections: doc.sections,
    })
}

/// YAML 파일을 읽어 과열기 설정을 만든다.
pub fn load_unit_config(path: &Path, kind: UnitKind) -> Result<UnitConfig, ConfigurationError> {
    debug!(path = %path.display(), unit = kind.label(), "과열기 설정 로드");
    let content = fs::read_to_string(path)?;
    parse_unit_config(&content, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATEN: &str = r#"
platen_superheater:
  structure:
    n_panels: 43
    tubes_per_panel: 4
    passes_per_panel: 8
    pass_length_m: 6.0
    total_length_m: 50.0
  thermal:
    U_W_m2K_low_load: 800.0
    setpoint_inlet_C: 350.0
    setpoint_outlet_C: 410.0
  sections:
    - name: radiant
      material: T91
"#;

    #[test]
    fn platen_aliases_and_defaults() {
        let cfg = parse_unit_config(PLATEN, UnitKind::Platen).expect("parse");
        assert_eq!(cfg.spec, UnitKind::Platen.default_spec());
        assert_eq!(cfg.process_gain, 0.6);
        assert_eq!(cfg.sections.len(), 1);
        assert_eq!(
            cfg.sections[0].get("material").and_then(|v| v.as_str()),
            Some("T91")
        );
    }

    #[test]
    fn wrong_root_key_is_missing_section() {
        let err = parse_unit_config(PLATEN, UnitKind::Final).expect_err("no final key");
        assert!(matches!(err, ConfigurationError::MissingSection(k) if k == "final_superheater"));
    }

    #[test]
    fn missing_field_is_yaml_error() {
        let doc = PLATEN.replace("    total_length_m: 50.0\n", "");
        let err = parse_unit_config(&doc, UnitKind::Platen).expect_err("missing field");
        assert!(matches!(err, ConfigurationError::Yaml(_)));
    }

    #[test]
    fn negative_length_is_invalid() {
        let doc = PLATEN.replace("total_length_m: 50.0", "total_length_m: -50.0");
        let err = parse_unit_config(&doc, UnitKind::Platen).expect_err("invalid");
        assert!(matches!(
            err,
            ConfigurationError::Invalid(ThermalModelError::InvalidGeometry(_))
        ));
    }
}

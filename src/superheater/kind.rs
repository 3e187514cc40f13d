use clap::ValueEnum;

use super::spec::ThermalUnitSpec;

/// 과열기 종류. 계산식은 동일하고 기본 상수와 공정 이득만 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitKind {
    /// 플래튼 과열기 (복사 영역, SP1/SP2 제어)
    Platen,
    /// 최종 과열기 (대류 영역, 540°C 출구 제어)
    Final,
}

impl UnitKind {
    pub const ALL: [UnitKind; 2] = [UnitKind::Platen, UnitKind::Final];

    /// 설정 파일(YAML)의 최상위 키.
    pub fn config_key(self) -> &'static str {
        match self {
            UnitKind::Platen => "platen_superheater",
            UnitKind::Final => "final_superheater",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UnitKind::Platen => "Platen SH",
            UnitKind::Final => "Final SH",
        }
    }

    /// 기본 FOPDT 공정 이득. 대류형인 최종 과열기가 더 크다.
    pub fn default_gain(self) -> f64 {
        match self {
            UnitKind::Platen => 0.6,
            UnitKind::Final => 0.7,
        }
    }

    /// 설정 파일이 없을 때 쓰는 기본 형상 상수.
    pub fn default_spec(self) -> ThermalUnitSpec {
        match self {
            UnitKind::Platen => ThermalUnitSpec {
                n_coils: 43,
                tubes_per_coil: 4,
                passes_per_coil: 8,
                pass_length_m: 6.0,
                total_length_m: 50.0,
                tube_od_mm: 57.0,
                tube_id_mm: 41.0,
                u_low_load_w_m2k: 800.0,
                setpoint_inlet_c: 350.0,
                setpoint_outlet_c: 410.0,
            },
            UnitKind::Final => ThermalUnitSpec {
                n_coils: 43,
                tubes_per_coil: 4,
                passes_per_coil: 13,
                pass_length_m: 6.0,
                total_length_m: 85.0,
                tube_od_mm: 57.0,
                tube_id_mm: 41.0,
                u_low_load_w_m2k: 900.0,
                setpoint_inlet_c: 410.0,
                setpoint_outlet_c: 540.0,
            },
        }
    }
}

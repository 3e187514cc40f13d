use std::f64::consts::PI;

use crate::error::{require_positive, ModelResult, ThermalModelError};
use crate::units::mm_to_m;

/// 과열기 형상/열전달 상수. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalUnitSpec {
    /// 코일(패널) 수
    pub n_coils: u32,
    /// 코일당 병렬 튜브 수
    pub tubes_per_coil: u32,
    /// 코일당 패스 수
    pub passes_per_coil: u32,
    /// 패스 하나의 길이 [m]
    pub pass_length_m: f64,
    /// 증기 유로 전체 길이 [m]
    pub total_length_m: f64,
    /// 튜브 외경 [mm]
    pub tube_od_mm: f64,
    /// 튜브 내경 [mm]
    pub tube_id_mm: f64,
    /// 저부하 기준 종합전열계수 U [W/m²·K]
    pub u_low_load_w_m2k: f64,
    /// 입구 설정 온도 [°C]
    pub setpoint_inlet_c: f64,
    /// 출구 설정 온도 [°C]
    pub setpoint_outlet_c: f64,
}

impl ThermalUnitSpec {
    /// 병렬 유로(튜브) 총 수.
    pub fn tube_count(&self) -> u64 {
        u64::from(self.n_coils) * u64::from(self.tubes_per_coil)
    }

    /// 상수 값의 물리적 유효성을 검사한다.
    pub fn validate(&self) -> ModelResult<()> {
        let geometry = ThermalModelError::InvalidGeometry;
        if self.tube_count() < 1 {
            return Err(geometry(format!(
                "튜브 수는 1 이상이어야 합니다 (코일 {} x 튜브 {})",
                self.n_coils, self.tubes_per_coil
            )));
        }
        if self.passes_per_coil < 1 {
            return Err(geometry("코일당 패스 수는 1 이상이어야 합니다".into()));
        }
        require_positive(self.pass_length_m, "패스 길이", geometry)?;
        require_positive(self.total_length_m, "전체 길이", geometry)?;
        require_positive(self.tube_od_mm, "튜브 외경", geometry)?;
        require_positive(self.tube_id_mm, "튜브 내경", geometry)?;
        require_positive(self.u_low_load_w_m2k, "전열계수 U", geometry)?;
        if self.tube_id_mm >= self.tube_od_mm {
            return Err(geometry(format!(
                "내경({} mm)은 외경({} mm)보다 작아야 합니다",
                self.tube_id_mm, self.tube_od_mm
            )));
        }
        if !self.setpoint_inlet_c.is_finite() || !self.setpoint_outlet_c.is_finite() {
            return Err(ThermalModelError::InvalidParameter(format!(
                "설정 온도는 유한한 값이어야 합니다 (입구 {}, 출구 {})",
                self.setpoint_inlet_c, self.setpoint_outlet_c
            )));
        }
        Ok(())
    }
}

/// 형상 상수로부터 한 번 계산해 두는 유로 단면적/전열면적.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    /// 튜브 1개 내부 단면적 [m²]
    pub tube_cross_section_m2: f64,
    /// 전체 증기 유로 단면적 [m²]
    pub flow_area_m2: f64,
    /// 외표면 전열면적 [m²]
    pub surface_area_m2: f64,
}

impl DerivedGeometry {
    pub fn from_spec(spec: &ThermalUnitSpec) -> ModelResult<Self> {
        spec.validate()?;
        let tubes = spec.tube_count() as f64;
        let inner_radius_m = mm_to_m(spec.tube_id_mm) / 2.0;
        let tube_cross_section_m2 = PI * inner_radius_m.powi(2);
        let surface_area_m2 = PI * mm_to_m(spec.tube_od_mm) * spec.total_length_m * tubes;
        Ok(Self {
            tube_cross_section_m2,
            flow_area_m2: tube_cross_section_m2 * tubes,
            surface_area_m2,
        })
    }
}

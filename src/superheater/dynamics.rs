use tracing::{debug, warn};

use super::spec::{DerivedGeometry, ThermalUnitSpec};
use crate::error::{ModelResult, ThermalModelError};
use crate::response::FopdtParams;
use crate::steam::{superheat_k, SteamPropertyProvider};
use crate::units::{bar_to_mpa, kj_to_j, tonnes_per_hour_to_kg_per_s};

/// 물성 계산 한 번에 쓰이는 운전 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// 증기 압력 [bar abs]
    pub pressure_bar: f64,
    /// 증기 온도 [°C]
    pub temperature_c: f64,
    /// 증기 유량 [t/h]
    pub steam_flow_t_per_h: f64,
}

impl OperatingPoint {
    pub fn new(pressure_bar: f64, temperature_c: f64, steam_flow_t_per_h: f64) -> Self {
        Self {
            pressure_bar,
            temperature_c,
            steam_flow_t_per_h,
        }
    }
}

/// 운전 조건에서 계산된 증기 물성과 동특성 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedDynamics {
    /// 밀도 [kg/m³]
    pub density_kg_m3: f64,
    /// 비체적 [m³/kg]
    pub specific_volume_m3_kg: f64,
    /// 정압비열 [kJ/kg·K]
    pub cp_kj_kgk: f64,
    /// 비엔탈피 [kJ/kg]
    pub enthalpy_kj_kg: f64,
    /// 관내 유속 [m/s]
    pub velocity_m_s: f64,
    /// 수송 지연 θ [s]
    pub theta_s: f64,
    /// 관내 증기 체적 [m³]
    pub fluid_volume_m3: f64,
    /// 관내 증기 질량 [kg]
    pub fluid_mass_kg: f64,
    /// 열용량 [J/K]
    pub capacitance_j_k: f64,
    /// 컨덕턴스 UA [W/K]
    pub ua_w_k: f64,
    /// 열 시정수 τ [s]
    pub tau_s: f64,
}

impl DerivedDynamics {
    /// 주어진 이득과 함께 FOPDT 파라미터로 묶는다.
    pub fn fopdt_params(&self, gain: f64) -> ModelResult<FopdtParams> {
        FopdtParams::new(gain, self.theta_s, self.tau_s)
    }
}

fn invalid(msg: String) -> ThermalModelError {
    ThermalModelError::InvalidOperatingPoint(msg)
}

/// 운전 조건에 대한 증기 물성, 수송 지연, 열 시정수를 계산한다.
///
/// 호출마다 독립적으로 계산하며 캐시하지 않는다.
pub fn evaluate_dynamics<P: SteamPropertyProvider + ?Sized>(
    spec: &ThermalUnitSpec,
    geometry: &DerivedGeometry,
    provider: &P,
    op: &OperatingPoint,
) -> ModelResult<DerivedDynamics> {
    if !op.steam_flow_t_per_h.is_finite() || op.steam_flow_t_per_h <= 0.0 {
        return Err(invalid(format!(
            "증기 유량은 0보다 커야 합니다 (입력: {} t/h)",
            op.steam_flow_t_per_h
        )));
    }
    if !op.pressure_bar.is_finite() || op.pressure_bar <= 0.0 {
        return Err(invalid(format!(
            "압력은 0보다 커야 합니다 (입력: {} bar)",
            op.pressure_bar
        )));
    }

    let p_mpa = bar_to_mpa(op.pressure_bar);
    let t_c = op.temperature_c;
    if let Some(margin) = superheat_k(p_mpa, t_c) {
        if margin <= 0.0 {
            warn!(
                pressure_bar = op.pressure_bar,
                temperature_c = t_c,
                superheat_k = margin,
                "포화 온도 이하 조건입니다. 과열 증기 기준 모델 결과에 유의하세요."
            );
        }
    }

    let enthalpy_kj_kg = provider.enthalpy_kj_per_kg(p_mpa, t_c)?;
    let cp_kj_kgk = provider.specific_heat_kj_per_kgk(p_mpa, t_c)?;
    let specific_volume_m3_kg = provider.specific_volume_m3_per_kg(p_mpa, t_c)?;
    if !specific_volume_m3_kg.is_finite() || specific_volume_m3_kg <= 0.0 {
        return Err(invalid(format!(
            "비체적이 유효하지 않습니다 ({specific_volume_m3_kg} m³/kg)"
        )));
    }
    if !cp_kj_kgk.is_finite() || cp_kj_kgk <= 0.0 {
        return Err(invalid(format!("정압비열이 유효하지 않습니다 ({cp_kj_kgk} kJ/kg·K)")));
    }
    let density_kg_m3 = 1.0 / specific_volume_m3_kg;

    let mass_flow_kg_s = tonnes_per_hour_to_kg_per_s(op.steam_flow_t_per_h);
    let velocity_m_s = mass_flow_kg_s / (density_kg_m3 * geometry.flow_area_m2);
    if !velocity_m_s.is_finite() || velocity_m_s <= 0.0 {
        return Err(invalid(format!("유속이 유효하지 않습니다 ({velocity_m_s} m/s)")));
    }
    let theta_s = spec.total_length_m / velocity_m_s;

    let fluid_volume_m3 = geometry.flow_area_m2 * spec.total_length_m;
    let fluid_mass_kg = density_kg_m3 * fluid_volume_m3;
    let capacitance_j_k = fluid_mass_kg * kj_to_j(cp_kj_kgk);
    let ua_w_k = spec.u_low_load_w_m2k * geometry.surface_area_m2;
    let tau_s = capacitance_j_k / ua_w_k;

    if !(theta_s.is_finite() && theta_s > 0.0 && tau_s.is_finite() && tau_s > 0.0) {
        return Err(invalid(format!(
            "θ/τ 계산 결과가 유효하지 않습니다 (θ={theta_s}, τ={tau_s})"
        )));
    }

    debug!(
        pressure_bar = op.pressure_bar,
        temperature_c = t_c,
        flow_t_h = op.steam_flow_t_per_h,
        velocity_m_s,
        theta_s,
        tau_s,
        "동특성 계산 완료"
    );

    Ok(DerivedDynamics {
        density_kg_m3,
        specific_volume_m3_kg,
        cp_kj_kgk,
        enthalpy_kj_kg,
        velocity_m_s,
        theta_s,
        fluid_volume_m3,
        fluid_mass_kg,
        capacitance_j_k,
        ua_w_k,
        tau_s,
    })
}

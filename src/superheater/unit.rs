use tracing::info;

use super::dynamics::{evaluate_dynamics, DerivedDynamics, OperatingPoint};
use super::kind::UnitKind;
use super::loader::UnitConfig;
use super::spec::{DerivedGeometry, ThermalUnitSpec};
use crate::error::{ModelResult, ThermalModelError};
use crate::response::StepResponseCurve;
use crate::steam::SteamPropertyProvider;

/// 과열기 열역학 모델. 플래튼/최종 과열기를 상수만 바꿔 하나의 타입으로 표현한다.
///
/// 형상 파생값은 생성 시 한 번만 계산한다. 이후 모든 메서드는 `&self`만
/// 사용하므로 여러 스레드에서 동시에 물성 계산을 호출할 수 있다.
#[derive(Debug, Clone)]
pub struct SuperheaterUnit<P> {
    kind: UnitKind,
    spec: ThermalUnitSpec,
    geometry: DerivedGeometry,
    process_gain: f64,
    provider: P,
}

impl<P: SteamPropertyProvider> SuperheaterUnit<P> {
    /// 검증된 상수와 물성 제공자를 주입받아 모델을 만든다.
    pub fn new(
        kind: UnitKind,
        spec: ThermalUnitSpec,
        process_gain: f64,
        provider: P,
    ) -> ModelResult<Self> {
        if !process_gain.is_finite() {
            return Err(ThermalModelError::InvalidParameter(format!(
                "공정 이득이 유한하지 않습니다 ({process_gain})"
            )));
        }
        let geometry = DerivedGeometry::from_spec(&spec)?;
        info!(
            unit = kind.label(),
            tubes = spec.tube_count(),
            flow_area_m2 = geometry.flow_area_m2,
            surface_area_m2 = geometry.surface_area_m2,
            "과열기 형상 계산"
        );
        Ok(Self {
            kind,
            spec,
            geometry,
            process_gain,
            provider,
        })
    }

    /// 기본 상수와 기본 이득으로 모델을 만든다.
    pub fn with_defaults(kind: UnitKind, provider: P) -> ModelResult<Self> {
        Self::new(kind, kind.default_spec(), kind.default_gain(), provider)
    }

    /// 설정 파일에서 읽은 상수로 모델을 만든다.
    pub fn from_config(config: &UnitConfig, provider: P) -> ModelResult<Self> {
        Self::new(
            config.kind,
            config.spec.clone(),
            config.process_gain,
            provider,
        )
    }

    /// 상수를 교체한 새 모델. 형상 파생값을 다시 계산한다.
    pub fn with_spec(self, spec: ThermalUnitSpec) -> ModelResult<Self> {
        Self::new(self.kind, spec, self.process_gain, self.provider)
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn spec(&self) -> &ThermalUnitSpec {
        &self.spec
    }

    pub fn geometry(&self) -> &DerivedGeometry {
        &self.geometry
    }

    pub fn process_gain(&self) -> f64 {
        self.process_gain
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 운전 조건에서 ρ, cp, v, θ, τ 등을 계산한다.
    pub fn calculate_properties(&self, op: &OperatingPoint) -> ModelResult<DerivedDynamics> {
        evaluate_dynamics(&self.spec, &self.geometry, &self.provider, op)
    }

    /// 계산된 동특성과 이 과열기의 기본 이득으로 계단 응답을 구한다.
    pub fn step_response(
        &self,
        times_s: Vec<f64>,
        dynamics: &DerivedDynamics,
    ) -> ModelResult<StepResponseCurve> {
        self.step_response_with_gain(times_s, dynamics, self.process_gain)
    }

    pub fn step_response_with_gain(
        &self,
        times_s: Vec<f64>,
        dynamics: &DerivedDynamics,
        gain: f64,
    ) -> ModelResult<StepResponseCurve> {
        StepResponseCurve::evaluate(times_s, dynamics.fopdt_params(gain)?)
    }

    /// 출구 온도 궤적 환산 기본값: (입구 설정온도, 출구-입구 설정온도 차).
    pub fn default_temperature_rise(&self) -> (f64, f64) {
        (
            self.spec.setpoint_inlet_c,
            self.spec.setpoint_outlet_c - self.spec.setpoint_inlet_c,
        )
    }
}

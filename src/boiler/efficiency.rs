use crate::error::{ModelResult, ThermalModelError};

/// 연료 단위 발열량 가정값 [MJ/연료단위]
pub const FUEL_HEATING_VALUE_MJ: f64 = 42_000.0;
/// 증기 측 유효 열량 환산 계수
const STEAM_OUTPUT_FACTOR: f64 = 0.85;

/// 간이 보일러 모델 입력.
#[derive(Debug, Clone, Copy)]
pub struct BoilerModelInput {
    /// 증기 압력 [bar]
    pub steam_pressure_bar: f64,
    /// 증기 온도 [°C]
    pub steam_temperature_c: f64,
    /// 연료 유량 [연료단위/h]
    pub fuel_flow_per_h: f64,
}

/// 간이 보일러 효율 결과.
#[derive(Debug, Clone, Copy)]
pub struct BoilerEfficiencyResult {
    /// 효율 [%]
    pub efficiency_pct: f64,
    /// 연료 열 투입 [MJ/h]
    pub heat_input_mj_per_h: f64,
    /// 증기 측 열 출력 (압력·온도 기반 지표)
    pub heat_output: f64,
}

/// 압력·온도 곱 기반의 간이 효율 지표를 계산한다.
///
/// 교육용 근사식이며 열수지 기반 효율과는 다르다.
pub fn boiler_efficiency(input: BoilerModelInput) -> ModelResult<BoilerEfficiencyResult> {
    if !input.fuel_flow_per_h.is_finite() || input.fuel_flow_per_h <= 0.0 {
        return Err(ThermalModelError::InvalidParameter(format!(
            "연료 유량은 0보다 커야 합니다 ({})",
            input.fuel_flow_per_h
        )));
    }
    let heat_input_mj_per_h = input.fuel_flow_per_h * FUEL_HEATING_VALUE_MJ;
    let heat_output = input.steam_pressure_bar * input.steam_temperature_c * STEAM_OUTPUT_FACTOR;
    Ok(BoilerEfficiencyResult {
        efficiency_pct: heat_output / heat_input_mj_per_h * 100.0,
        heat_input_mj_per_h,
        heat_output,
    })
}

/// 분사 각도[°]와 분사 압력으로 분무 확산 폭을 근사한다: p·tan(angle)
pub fn spray_spread(spray_angle_deg: f64, spray_pressure: f64) -> f64 {
    spray_pressure * spray_angle_deg.to_radians().tan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn efficiency_formula() {
        let res = boiler_efficiency(BoilerModelInput {
            steam_pressure_bar: 40.0,
            steam_temperature_c: 540.0,
            fuel_flow_per_h: 1.0,
        })
        .expect("efficiency");
        assert_relative_eq!(res.heat_output, 18_360.0, max_relative = 1e-12);
        assert_relative_eq!(
            res.efficiency_pct,
            18_360.0 / 42_000.0 * 100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_fuel_flow_rejected() {
        let err = boiler_efficiency(BoilerModelInput {
            steam_pressure_bar: 40.0,
            steam_temperature_c: 540.0,
            fuel_flow_per_h: 0.0,
        });
        assert!(matches!(err, Err(ThermalModelError::InvalidParameter(_))));
    }

    #[test]
    fn spray_spread_at_45_degrees_equals_pressure() {
        assert_relative_eq!(spray_spread(45.0, 3.0), 3.0, epsilon = 1e-12);
        assert_eq!(spray_spread(0.0, 3.0), 0.0);
    }
}

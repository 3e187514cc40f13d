use super::fopdt::{fopdt_step_response, FopdtParams};
use crate::error::{ModelResult, ThermalModelError};

/// 0부터 `t_end_s`까지 양 끝을 포함해 `samples`개로 등분한 시간 배열.
pub fn time_axis(t_end_s: f64, samples: usize) -> ModelResult<Vec<f64>> {
    if !t_end_s.is_finite() || t_end_s <= 0.0 {
        return Err(ThermalModelError::InvalidParameter(format!(
            "종료 시간은 0보다 커야 합니다 ({t_end_s})"
        )));
    }
    if samples < 2 {
        return Err(ThermalModelError::InvalidParameter(format!(
            "샘플 수는 2 이상이어야 합니다 ({samples})"
        )));
    }
    let step = t_end_s / (samples - 1) as f64;
    let mut times: Vec<f64> = (0..samples).map(|i| i as f64 * step).collect();
    // 부동소수 누적 오차 없이 끝점을 맞춘다.
    times[samples - 1] = t_end_s;
    Ok(times)
}

/// 시간 배열과 응답 값을 함께 담은 계단 응답 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResponseCurve {
    pub params: FopdtParams,
    pub times_s: Vec<f64>,
    pub values: Vec<f64>,
}

impl StepResponseCurve {
    pub fn evaluate(times_s: Vec<f64>, params: FopdtParams) -> ModelResult<Self> {
        let values = fopdt_step_response(&times_s, &params)?;
        Ok(Self {
            params,
            times_s,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 정규화 응답을 출구 온도[°C]로 환산한다: base + rise·y
    pub fn outlet_temperature(&self, base_c: f64, rise_c: f64) -> Vec<f64> {
        self.values.iter().map(|y| base_c + rise_c * y).collect()
    }

    /// (시간, 응답) 쌍 반복자.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times_s.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let t = time_axis(600.0, 600).expect("axis");
        assert_eq!(t.len(), 600);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[599], 600.0);
        assert!(t.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn axis_rejects_degenerate_input() {
        assert!(time_axis(0.0, 10).is_err());
        assert!(time_axis(600.0, 1).is_err());
    }

    #[test]
    fn outlet_temperature_maps_gain() {
        let params = FopdtParams::new(1.0, 0.0, 1.0).expect("params");
        let curve = StepResponseCurve::evaluate(vec![0.0, 1e9], params).expect("curve");
        let temps = curve.outlet_temperature(410.0, 80.0);
        assert_eq!(temps[0], 410.0);
        assert!((temps[1] - 490.0).abs() < 1e-9);
    }
}

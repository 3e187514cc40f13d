use crate::error::{ModelResult, ThermalModelError};

/// FOPDT(1차 + 수송지연) 모델 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FopdtParams {
    /// 공정 이득 k
    pub gain: f64,
    /// 수송 지연 θ [s]
    pub theta_s: f64,
    /// 시정수 τ [s]
    pub tau_s: f64,
}

impl FopdtParams {
    /// τ ≤ 0 이면 응답이 정의되지 않으므로 오류를 돌려준다.
    pub fn new(gain: f64, theta_s: f64, tau_s: f64) -> ModelResult<Self> {
        if !gain.is_finite() {
            return Err(ThermalModelError::InvalidParameter(format!(
                "이득 k가 유한하지 않습니다 ({gain})"
            )));
        }
        if !theta_s.is_finite() || theta_s < 0.0 {
            return Err(ThermalModelError::InvalidParameter(format!(
                "수송 지연 θ는 0 이상이어야 합니다 ({theta_s})"
            )));
        }
        if !tau_s.is_finite() || tau_s <= 0.0 {
            return Err(ThermalModelError::InvalidParameter(format!(
                "시정수 τ는 0보다 커야 합니다 ({tau_s})"
            )));
        }
        Ok(Self {
            gain,
            theta_s,
            tau_s,
        })
    }

    /// 시각 t 에서의 단위 계단 응답.
    pub fn response_at(&self, t_s: f64) -> f64 {
        if t_s <= self.theta_s {
            0.0
        } else {
            self.gain * (1.0 - (-(t_s - self.theta_s) / self.tau_s).exp())
        }
    }
}

/// 시간 배열 전체에 대한 FOPDT 계단 응답.
///
/// 시간은 0 이상, 오름차순이어야 한다.
pub fn fopdt_step_response(times_s: &[f64], params: &FopdtParams) -> ModelResult<Vec<f64>> {
    let mut prev = 0.0_f64;
    for &t in times_s {
        if !t.is_finite() || t < 0.0 {
            return Err(ThermalModelError::InvalidParameter(format!(
                "시간은 0 이상의 유한한 값이어야 합니다 ({t})"
            )));
        }
        if t < prev {
            return Err(ThermalModelError::InvalidParameter(
                "시간 배열은 오름차순이어야 합니다".into(),
            ));
        }
        prev = t;
    }
    Ok(times_s.iter().map(|&t| params.response_at(t)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_tau_is_rejected() {
        assert!(matches!(
            FopdtParams::new(0.7, 10.0, 0.0),
            Err(ThermalModelError::InvalidParameter(_))
        ));
    }

    #[test]
    fn negative_theta_is_rejected() {
        assert!(FopdtParams::new(0.7, -1.0, 30.0).is_err());
    }

    #[test]
    fn one_time_constant_after_delay() {
        let p = FopdtParams::new(0.7, 12.0, 40.0).expect("params");
        assert_eq!(p.response_at(0.0), 0.0);
        assert_eq!(p.response_at(12.0), 0.0);
        assert_relative_eq!(
            p.response_at(52.0),
            0.7 * (1.0 - (-1.0_f64).exp()),
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_delay_is_plain_first_order() {
        let p = FopdtParams::new(1.0, 0.0, 10.0).expect("params");
        let y = fopdt_step_response(&[0.0, 10.0, 1e6], &p).expect("response");
        assert_eq!(y[0], 0.0);
        assert_relative_eq!(y[1], 0.632_120_558_8, epsilon = 1e-9);
        assert_relative_eq!(y[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn unordered_or_negative_times_rejected() {
        let p = FopdtParams::new(1.0, 0.0, 10.0).expect("params");
        assert!(fopdt_step_response(&[0.0, 5.0, 3.0], &p).is_err());
        assert!(fopdt_step_response(&[-1.0, 0.0], &p).is_err());
        assert_eq!(fopdt_step_response(&[], &p), Ok(Vec::new()));
    }
}

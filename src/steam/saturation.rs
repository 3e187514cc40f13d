//! IF97 Region 4 포화선. 과열 여부 판정에 사용한다.

use super::provider::SteamPropertyError;
use crate::units::KELVIN_OFFSET;

pub const CRITICAL_PRESSURE_MPA: f64 = 22.064;
const CRITICAL_TEMPERATURE_K: f64 = 647.096;
const TRIPLE_PRESSURE_MPA: f64 = 0.000_611_657;

const N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];
const EXP: [f64; 6] = [1.0, 1.5, 3.0, 3.5, 4.0, 7.5];

/// ln(p/p*) 와 온도 미분값을 함께 돌려준다.
fn reduced_log_pressure(t_k: f64) -> (f64, f64) {
    let theta = 1.0 - t_k / CRITICAL_TEMPERATURE_K;
    let (sum, dsum) = N.iter().zip(EXP).fold((0.0, 0.0), |(s, ds), (n, e)| {
        (s + n * theta.powf(e), ds + e * n * theta.powf(e - 1.0))
    });
    let ratio = CRITICAL_TEMPERATURE_K / t_k;
    let value = ratio * sum;
    let derivative = -(ratio / t_k) * sum - dsum / t_k;
    (value, derivative)
}

/// 포화온도(°C) - 입력 압력은 MPa abs. 뉴턴 반복으로 Region 4 식을 역산한다.
pub fn saturation_temperature_c(p_mpa: f64) -> Result<f64, SteamPropertyError> {
    if !(TRIPLE_PRESSURE_MPA..=CRITICAL_PRESSURE_MPA).contains(&p_mpa) {
        return Err(SteamPropertyError::OutOfRange {
            what: "포화압력[MPa]",
            value: p_mpa,
        });
    }
    let target = (p_mpa / CRITICAL_PRESSURE_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..50 {
        let (value, derivative) = reduced_log_pressure(t_k);
        let delta = (value - target) / derivative;
        t_k = (t_k - delta).min(CRITICAL_TEMPERATURE_K);
        if delta.abs() < 1e-9 {
            return Ok(t_k - KELVIN_OFFSET);
        }
    }
    Err(SteamPropertyError::NotComputable(format!(
        "포화온도 역계산 수렴 실패 (p={p_mpa} MPa)"
    )))
}

/// 과열도[K]. 임계압 이상에서는 포화 개념이 없으므로 `None`.
pub fn superheat_k(p_mpa: f64, t_c: f64) -> Option<f64> {
    saturation_temperature_c(p_mpa).ok().map(|t_sat| t_c - t_sat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn atmospheric_boiling_point() {
        let t = saturation_temperature_c(0.101_325).expect("sat");
        assert_relative_eq!(t, 99.97, epsilon = 0.05);
    }

    #[test]
    fn boiler_pressure_saturation() {
        // 40 bar 포화온도 약 250.4°C
        let t = saturation_temperature_c(4.0).expect("sat");
        assert_relative_eq!(t, 250.35, epsilon = 0.1);
    }

    #[test]
    fn supercritical_has_no_superheat() {
        assert!(superheat_k(25.0, 550.0).is_none());
        let margin = superheat_k(4.0, 410.0).expect("subcritical");
        assert!(margin > 150.0);
    }
}

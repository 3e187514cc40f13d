//! IAPWS-IF97 물성 조회를 seuif97 크레이트로 위임한 제공자.
//! 입력: 압력(MPa, 절대), 온도(°C)

use seuif97::{pt, OCP, OH, OV};

use super::provider::{SteamPropertyError, SteamPropertyProvider};

const P_MAX_MPA: f64 = 100.0;
// Region 5 는 50 MPa 이하에서만 2000°C 까지 유효하다.
const P_MAX_REGION5_MPA: f64 = 50.0;
const T_MIN_C: f64 = 0.0;
const T_MAX_C: f64 = 800.0;
const T_MAX_REGION5_C: f64 = 2000.0;
// seuif97 은 계산 불가 시 NaN 대신 이 값을 돌려준다.
const SEUIF97_INVALID: f64 = -9999.0;

/// seuif97 기반 IF97 물성 제공자. 상태가 없으므로 하나의 인스턴스를 공유해 쓴다.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Provider;

impl If97Provider {
    pub fn new() -> Self {
        Self
    }

    fn query(
        &self,
        p_mpa: f64,
        t_c: f64,
        what: &str,
        table: impl Fn(f64, f64) -> f64,
    ) -> Result<f64, SteamPropertyError> {
        check_range(p_mpa, t_c)?;
        let value = table(p_mpa, t_c);
        if !value.is_finite() || value == SEUIF97_INVALID {
            return Err(SteamPropertyError::NotComputable(format!(
                "{what} (p={p_mpa} MPa, T={t_c} °C)"
            )));
        }
        Ok(value)
    }
}

/// IF97 전체 유효 범위(0~800°C/100 MPa, 800~2000°C/50 MPa)를 검사한다.
pub fn check_range(p_mpa: f64, t_c: f64) -> Result<(), SteamPropertyError> {
    if !p_mpa.is_finite() || p_mpa <= 0.0 || p_mpa > P_MAX_MPA {
        return Err(SteamPropertyError::OutOfRange {
            what: "압력[MPa]",
            value: p_mpa,
        });
    }
    if !t_c.is_finite() || t_c < T_MIN_C || t_c > T_MAX_REGION5_C {
        return Err(SteamPropertyError::OutOfRange {
            what: "온도[°C]",
            value: t_c,
        });
    }
    if t_c > T_MAX_C && p_mpa > P_MAX_REGION5_MPA {
        return Err(SteamPropertyError::OutOfRange {
            what: "Region 5 압력[MPa]",
            value: p_mpa,
        });
    }
    Ok(())
}

impl SteamPropertyProvider for If97Provider {
    fn enthalpy_kj_per_kg(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        self.query(p_mpa, t_c, "엔탈피", |p, t| pt(p, t, OH))
    }

    fn specific_heat_kj_per_kgk(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        self.query(p_mpa, t_c, "정압비열", |p, t| pt(p, t, OCP))
    }

    fn specific_volume_m3_per_kg(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        self.query(p_mpa, t_c, "비체적", |p, t| pt(p, t, OV))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check_rejects_outside_envelope() {
        assert!(check_range(4.0, 410.0).is_ok());
        assert!(check_range(0.0, 410.0).is_err());
        assert!(check_range(120.0, 410.0).is_err());
        assert!(check_range(4.0, -5.0).is_err());
        assert!(check_range(60.0, 1000.0).is_err());
        assert!(check_range(4.0, 1000.0).is_ok());
        assert!(check_range(f64::NAN, 410.0).is_err());
    }

    #[test]
    fn out_of_range_query_fails_before_calling_tables() {
        let err = If97Provider::new()
            .enthalpy_kj_per_kg(-1.0, 410.0)
            .expect_err("negative pressure");
        assert!(matches!(err, SteamPropertyError::OutOfRange { .. }));
    }

    #[test]
    fn table_sentinel_is_not_computable() {
        // 0°C 포화압(약 0.000611 MPa) 미만은 seuif97 이 계산하지 않는다.
        let err = If97Provider::new()
            .enthalpy_kj_per_kg(0.0001, 410.0)
            .expect_err("below table minimum");
        assert!(matches!(err, SteamPropertyError::NotComputable(_)));
    }
}

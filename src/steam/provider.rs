use std::sync::Arc;

use thiserror::Error;

use crate::error::ThermalModelError;

/// 증기 물성 조회 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteamPropertyError {
    /// 증기표 유효 범위 밖 입력
    #[error("증기표 범위를 벗어남: {what} = {value}")]
    OutOfRange { what: &'static str, value: f64 },
    /// 계산 결과가 NaN 등으로 유효하지 않음
    #[error("물성 계산 실패: {0}")]
    NotComputable(String),
}

impl From<SteamPropertyError> for ThermalModelError {
    fn from(value: SteamPropertyError) -> Self {
        ThermalModelError::InvalidOperatingPoint(value.to_string())
    }
}

/// 과열기 모델이 사용하는 증기 물성 조회 인터페이스.
///
/// 입력은 모두 압력 MPa(abs), 온도 °C 이다. 구현체는 상태를 갖지 않는
/// 순수 함수처럼 동작해야 하며, 여러 스레드에서 동시에 호출될 수 있다.
///
/// 밀도가 아닌 비체적을 계약으로 삼는다. 밀도는 모델 쪽에서 역수로 구하고
/// 그 과정에서 0 이하 값을 검사한다.
pub trait SteamPropertyProvider: Send + Sync {
    /// 비엔탈피 [kJ/kg]
    fn enthalpy_kj_per_kg(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError>;

    /// 정압비열 [kJ/kg·K]
    fn specific_heat_kj_per_kgk(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError>;

    /// 비체적 [m³/kg]
    fn specific_volume_m3_per_kg(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError>;
}

impl<P: SteamPropertyProvider + ?Sized> SteamPropertyProvider for &P {
    fn enthalpy_kj_per_kg(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        (**self).enthalpy_kj_per_kg(p_mpa, t_c)
    }

    fn specific_heat_kj_per_kgk(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        (**self).specific_heat_kj_per_kgk(p_mpa, t_c)
    }

    fn specific_volume_m3_per_kg(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        (**self).specific_volume_m3_per_kg(p_mpa, t_c)
    }
}

// 플래튼/최종 과열기가 같은 인스턴스를 공유할 때 사용한다.
impl<P: SteamPropertyProvider + ?Sized> SteamPropertyProvider for Arc<P> {
    fn enthalpy_kj_per_kg(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        (**self).enthalpy_kj_per_kg(p_mpa, t_c)
    }

    fn specific_heat_kj_per_kgk(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        (**self).specific_heat_kj_per_kgk(p_mpa, t_c)
    }

    fn specific_volume_m3_per_kg(&self, p_mpa: f64, t_c: f64) -> Result<f64, SteamPropertyError> {
        (**self).specific_volume_m3_per_kg(p_mpa, t_c)
    }
}

use thiserror::Error;

/// 과열기 열역학 모델 계산 중 발생 가능한 오류.
///
/// 모두 결정적인 입력 검증 실패이므로 재시도 대상이 아니다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThermalModelError {
    /// 0 이하이거나 유한하지 않은 형상 상수
    #[error("형상 값 오류: {0}")]
    InvalidGeometry(String),
    /// 유속/밀도가 0 이하이거나 증기표 유효 범위를 벗어난 운전 조건
    #[error("운전 조건 오류: {0}")]
    InvalidOperatingPoint(String),
    /// FOPDT 응답 계산 파라미터 오류 (τ=0 등)
    #[error("파라미터 오류: {0}")]
    InvalidParameter(String),
}

/// 모델 계산 결과 타입.
pub type ModelResult<T> = Result<T, ThermalModelError>;

/// 값이 유한한 양수인지 검사하고, 아니면 `make_err`로 오류를 만든다.
pub(crate) fn require_positive(
    value: f64,
    what: &str,
    make_err: fn(String) -> ThermalModelError,
) -> ModelResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(make_err(format!("{what}은(는) 유한한 양수여야 합니다 (입력: {value})")))
    }
}

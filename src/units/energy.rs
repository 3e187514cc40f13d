/// 비열 등 kJ 기준 값을 J 기준으로 변환한다.
pub fn kj_to_j(value_kj: f64) -> f64 {
    value_kj * 1000.0
}

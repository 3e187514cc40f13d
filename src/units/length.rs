/// 관경 등 mm 단위 치수를 m로 변환한다.
pub fn mm_to_m(value_mm: f64) -> f64 {
    value_mm / 1000.0
}

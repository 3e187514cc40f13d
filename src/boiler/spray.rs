/// 분무 패턴 샘플 위치 수 (0..10)
pub const PATTERN_POINTS: usize = 10;
const PATTERN_CENTER: f64 = 5.0;

/// 감온기 분무 시뮬레이터 입력.
#[derive(Debug, Clone, Copy)]
pub struct SprayInput {
    /// 분무 압력 [bar]
    pub pressure_bar: f64,
    /// 분사 각도 [°]
    pub angle_deg: f64,
    /// 분무 유량 [t/h]
    pub flow_rate_t_per_h: f64,
}

/// 분무 확산 지표: 압력 × 유량 × 0.1
pub fn simulate_spread(input: &SprayInput) -> f64 {
    input.pressure_bar * input.flow_rate_t_per_h * 0.1
}

/// 중심(x=5)에서 최대가 되는 삼각형 분무 강도 분포를 (거리, 강도) 쌍으로 돌려준다.
pub fn spray_pattern(input: &SprayInput) -> Vec<(f64, f64)> {
    let spread = simulate_spread(input);
    (0..PATTERN_POINTS)
        .map(|i| {
            let x = i as f64;
            (x, spread * (1.0 - (x - PATTERN_CENTER).abs() / PATTERN_CENTER))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_peaks_at_center() {
        let input = SprayInput {
            pressure_bar: 20.0,
            angle_deg: 60.0,
            flow_rate_t_per_h: 5.0,
        };
        assert_eq!(simulate_spread(&input), 10.0);
        let pattern = spray_pattern(&input);
        assert_eq!(pattern.len(), PATTERN_POINTS);
        assert_eq!(pattern[0], (0.0, 0.0));
        assert_eq!(pattern[5], (5.0, 10.0));
        assert!((pattern[9].1 - 2.0).abs() < 1e-12);
    }
}

/// 증기 유량 t/h 를 kg/s 로 변환한다.
pub fn tonnes_per_hour_to_kg_per_s(flow_t_per_h: f64) -> f64 {
    flow_t_per_h * 1000.0 / 3600.0
}

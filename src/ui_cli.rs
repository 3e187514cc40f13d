use std::io::{self, Write};

use crate::boiler::{
    simulate_spread, spray_pattern, spray_spread, BoilerEfficiencyResult, SprayInput,
};
use crate::response::StepResponseCurve;
use crate::steam::SteamPropertyProvider;
use crate::superheater::{DerivedDynamics, OperatingPoint, SuperheaterUnit};

/// 과열기 형상 정보를 출력한다.
pub fn print_unit<P: SteamPropertyProvider>(unit: &SuperheaterUnit<P>) {
    let spec = unit.spec();
    let geo = unit.geometry();
    println!("\n=== {} ===", unit.kind().label());
    println!(
        "튜브 수: {} ({} x {}), 전체 길이: {:.1} m",
        spec.tube_count(),
        spec.n_coils,
        spec.tubes_per_coil,
        spec.total_length_m
    );
    println!(
        "유로 단면적: {:.4} m², 전열면적: {:.1} m²",
        geo.flow_area_m2, geo.surface_area_m2
    );
    println!(
        "설정 온도: {:.1} → {:.1} °C, 공정 이득 k={:.2}",
        spec.setpoint_inlet_c,
        spec.setpoint_outlet_c,
        unit.process_gain()
    );
}

/// 동특성 계산 결과를 출력한다.
pub fn print_dynamics(op: &OperatingPoint, d: &DerivedDynamics) {
    println!(
        "\n운전 조건: {:.2} bar, {:.1} °C, {:.1} t/h",
        op.pressure_bar, op.temperature_c, op.steam_flow_t_per_h
    );
    println!("rho: {:.2} kg/m³", d.density_kg_m3);
    println!("cp: {:.3} kJ/kg·K", d.cp_kj_kgk);
    println!("h: {:.1} kJ/kg", d.enthalpy_kj_kg);
    println!("v: {:.2} m/s", d.velocity_m_s);
    println!("theta: {:.2} s", d.theta_s);
    println!("tau: {:.2} s", d.tau_s);
    println!(
        "m: {:.1} kg, C_th: {:.3e} J/K, UA: {:.3e} W/K",
        d.fluid_mass_kg, d.capacitance_j_k, d.ua_w_k
    );
}

/// 계단 응답 요약(최종값, 63.2% 도달 시점)을 출력한다.
pub fn print_curve_summary(curve: &StepResponseCurve, outlet_c: &[f64]) {
    let p = &curve.params;
    println!(
        "\nFOPDT: k={:.2}, θ={:.2} s, τ={:.2} s, 샘플 {}개",
        p.gain,
        p.theta_s,
        p.tau_s,
        curve.len()
    );
    if let (Some(y), Some(t_out)) = (curve.values.last(), outlet_c.last()) {
        println!("마지막 응답: {:.4} (출구 {:.1} °C)", y, t_out);
    }
    println!("63.2% 도달 예상 시점: {:.1} s", p.theta_s + p.tau_s);
}

/// 응답 곡선을 CSV(time_s, response, outlet_c)로 기록한다.
pub fn write_curve_csv<W: Write>(
    mut writer: W,
    curve: &StepResponseCurve,
    outlet_c: &[f64],
) -> io::Result<()> {
    writeln!(writer, "time_s,response,outlet_c")?;
    for ((t, y), t_out) in curve.points().zip(outlet_c) {
        writeln!(writer, "{t},{y},{t_out}")?;
    }
    writer.flush()
}

pub fn print_efficiency(result: &BoilerEfficiencyResult) {
    println!(
        "효율: {:.2} %, 연료 열 투입: {:.1} MJ/h, 열 출력 지표: {:.1}",
        result.efficiency_pct, result.heat_input_mj_per_h, result.heat_output
    );
}

pub fn print_spray(input: &SprayInput) {
    println!(
        "분무 확산(압력·유량): {:.3}, 분사각 기준 확산: {:.3}",
        simulate_spread(input),
        spray_spread(input.angle_deg, input.pressure_bar)
    );
    println!("거리,강도");
    for (x, intensity) in spray_pattern(input) {
        println!("{x},{intensity:.3}");
    }
}

use clap::ValueEnum;

/// 과열기 운전 압력 입력 단위. 내부 기준은 항상 bar(abs)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PressureUnit {
    Bar,
    KiloPascal,
    MegaPascal,
    Psi,
}

const KPA_PER_BAR: f64 = 100.0;
const PSI_PER_BAR: f64 = 14.503_773_8;

/// 주어진 절대압을 bar(abs)로 변환한다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::KiloPascal => value / KPA_PER_BAR,
        PressureUnit::MegaPascal => bar_from_mpa(value),
        PressureUnit::Psi => value / PSI_PER_BAR,
    }
}

/// 증기표 입력 단위(MPa)로 환산한다.
pub fn bar_to_mpa(p_bar: f64) -> f64 {
    p_bar / 10.0
}

pub fn bar_from_mpa(p_mpa: f64) -> f64 {
    p_mpa * 10.0
}

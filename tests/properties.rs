//! 형상 파생값과 FOPDT 응답의 성질 기반 테스트.
use boiler_thermal_toolbox::response::{fopdt_step_response, FopdtParams};
use boiler_thermal_toolbox::steam::{SteamPropertyError, SteamPropertyProvider};
use boiler_thermal_toolbox::superheater::{
    DerivedGeometry, OperatingPoint, SuperheaterUnit, UnitKind,
};
use proptest::prelude::*;

/// 고정 물성 제공자 (40 bar 과열 증기 근사).
struct FixedSteam;

impl SteamPropertyProvider for FixedSteam {
    fn enthalpy_kj_per_kg(&self, _p_mpa: f64, _t_c: f64) -> Result<f64, SteamPropertyError> {
        Ok(3200.0)
    }

    fn specific_heat_kj_per_kgk(&self, _p_mpa: f64, _t_c: f64) -> Result<f64, SteamPropertyError> {
        Ok(2.5)
    }

    fn specific_volume_m3_per_kg(&self, _p_mpa: f64, _t_c: f64) -> Result<f64, SteamPropertyError> {
        Ok(0.1)
    }
}

proptest! {
    #[test]
    fn areas_scale_linearly_with_tube_count(
        coils in 1u32..200,
        tubes in 1u32..10,
        id_mm in 10.0f64..60.0,
        wall_mm in 1.0f64..15.0,
        length_m in 1.0f64..200.0,
    ) {
        let mut spec = UnitKind::Final.default_spec();
        spec.n_coils = coils;
        spec.tubes_per_coil = tubes;
        spec.tube_id_mm = id_mm;
        spec.tube_od_mm = id_mm + 2.0 * wall_mm;
        spec.total_length_m = length_m;
        let one = DerivedGeometry::from_spec(&spec).unwrap();
        prop_assert!(one.flow_area_m2 > 0.0 && one.surface_area_m2 > 0.0);

        spec.n_coils = coils * 2;
        let two = DerivedGeometry::from_spec(&spec).unwrap();
        let flow_err = (two.flow_area_m2 - 2.0 * one.flow_area_m2).abs();
        let surface_err = (two.surface_area_m2 - 2.0 * one.surface_area_m2).abs();
        prop_assert!(flow_err <= 1e-12 * two.flow_area_m2);
        prop_assert!(surface_err <= 1e-9 * two.surface_area_m2);
    }

    #[test]
    fn fopdt_shape(
        gain in 0.01f64..5.0,
        theta in 0.0f64..300.0,
        tau in 0.1f64..500.0,
        raw_times in prop::collection::vec(0.0f64..5000.0, 1..64),
    ) {
        let mut times = raw_times;
        times.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let params = FopdtParams::new(gain, theta, tau).unwrap();
        let y = fopdt_step_response(&times, &params).unwrap();
        prop_assert_eq!(y.len(), times.len());
        for (t, v) in times.iter().zip(&y) {
            if *t <= theta {
                prop_assert_eq!(*v, 0.0);
            }
            prop_assert!(*v >= 0.0 && *v <= gain);
        }
        prop_assert!(y.windows(2).all(|w| w[1] >= w[0]));
        let at_tau = params.response_at(theta + tau);
        prop_assert!((at_tau - gain * (1.0 - (-1.0f64).exp())).abs() <= 1e-9 * gain.max(1.0));
        // 재현성
        prop_assert_eq!(fopdt_step_response(&times, &params).unwrap(), y);
    }

    #[test]
    fn positive_flow_gives_finite_positive_delay(
        flow in 1e-3f64..1e4,
        pressure in 1.0f64..200.0,
        temperature in 300.0f64..600.0,
    ) {
        let unit = SuperheaterUnit::with_defaults(UnitKind::Final, FixedSteam).unwrap();
        let d = unit
            .calculate_properties(&OperatingPoint::new(pressure, temperature, flow))
            .unwrap();
        prop_assert!(d.velocity_m_s.is_finite() && d.velocity_m_s > 0.0);
        prop_assert!(d.theta_s.is_finite() && d.theta_s > 0.0);
        prop_assert!(d.tau_s.is_finite() && d.tau_s > 0.0);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AnyUnit, DensityUnit, FlowRateUnit, LengthUnit, ViscosityUnit};

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    #[default]
    SI,
    /// 미국 관용 단위(야드파운드법)
    Imperial,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::SI => f.write_str("SI"),
            UnitSystem::Imperial => f.write_str("Imperial"),
        }
    }
}

/// 입력값 단위 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityFamily {
    Length,
    Diameter,
    Roughness,
    FlowRate,
    Density,
    KinematicViscosity,
}

impl QuantityFamily {
    pub const ALL: [QuantityFamily; 6] = [
        QuantityFamily::Length,
        QuantityFamily::Diameter,
        QuantityFamily::Roughness,
        QuantityFamily::FlowRate,
        QuantityFamily::Density,
        QuantityFamily::KinematicViscosity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuantityFamily::Length => "length",
            QuantityFamily::Diameter => "diameter",
            QuantityFamily::Roughness => "roughness",
            QuantityFamily::FlowRate => "flow-rate",
            QuantityFamily::Density => "density",
            QuantityFamily::KinematicViscosity => "viscosity",
        }
    }
}

/// 각 입력 계열별 단위 선택을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputUnits {
    pub length: LengthUnit,
    pub diameter: LengthUnit,
    pub roughness: LengthUnit,
    pub flow_rate: FlowRateUnit,
    pub density: DensityUnit,
    pub kinematic_viscosity: ViscosityUnit,
}

impl InputUnits {
    /// 계열에 해당하는 단위를 태그로 돌려준다.
    pub fn get(&self, family: QuantityFamily) -> AnyUnit {
        match family {
            QuantityFamily::Length => AnyUnit::Length(self.length),
            QuantityFamily::Diameter => AnyUnit::Length(self.diameter),
            QuantityFamily::Roughness => AnyUnit::Length(self.roughness),
            QuantityFamily::FlowRate => AnyUnit::FlowRate(self.flow_rate),
            QuantityFamily::Density => AnyUnit::Density(self.density),
            QuantityFamily::KinematicViscosity => AnyUnit::Viscosity(self.kinematic_viscosity),
        }
    }
}

impl Default for InputUnits {
    fn default() -> Self {
        SI_DEFAULTS
    }
}

const SI_DEFAULTS: InputUnits = InputUnits {
    length: LengthUnit::Meter,
    diameter: LengthUnit::Millimeter,
    roughness: LengthUnit::Millimeter,
    flow_rate: FlowRateUnit::LiterPerSecond,
    density: DensityUnit::KgPerCubicMeter,
    kinematic_viscosity: ViscosityUnit::Centistoke,
};

// 점도는 두 시스템 모두 cSt를 쓴다.
const IMPERIAL_DEFAULTS: InputUnits = InputUnits {
    length: LengthUnit::Foot,
    diameter: LengthUnit::Inch,
    roughness: LengthUnit::Inch,
    flow_rate: FlowRateUnit::UsGallonPerMinute,
    density: DensityUnit::PoundPerCubicFoot,
    kinematic_viscosity: ViscosityUnit::Centistoke,
};

use AnyUnit::{Density as D, FlowRate as Q, Length as L, Viscosity as V};

const LENGTH_SI: &[AnyUnit] = &[L(LengthUnit::Meter), L(LengthUnit::Centimeter)];
const LENGTH_IMPERIAL: &[AnyUnit] = &[L(LengthUnit::Foot), L(LengthUnit::Inch)];
const DIAMETER_SI: &[AnyUnit] = &[L(LengthUnit::Millimeter), L(LengthUnit::Centimeter)];
const DIAMETER_IMPERIAL: &[AnyUnit] = &[L(LengthUnit::Inch)];
const ROUGHNESS_SI: &[AnyUnit] = &[L(LengthUnit::Millimeter), L(LengthUnit::Micrometer)];
const ROUGHNESS_IMPERIAL: &[AnyUnit] = &[L(LengthUnit::Inch)];
const FLOW_SI: &[AnyUnit] = &[
    Q(FlowRateUnit::LiterPerSecond),
    Q(FlowRateUnit::CubicMeterPerHour),
];
const FLOW_IMPERIAL: &[AnyUnit] = &[
    Q(FlowRateUnit::UsGallonPerMinute),
    Q(FlowRateUnit::CubicFootPerSecond),
];
const DENSITY_SI: &[AnyUnit] = &[D(DensityUnit::KgPerCubicMeter)];
const DENSITY_IMPERIAL: &[AnyUnit] = &[D(DensityUnit::PoundPerCubicFoot)];
const VISCOSITY_SI: &[AnyUnit] = &[
    V(ViscosityUnit::Centistoke),
    V(ViscosityUnit::SquareMeterPerSecond),
];
const VISCOSITY_IMPERIAL: &[AnyUnit] = &[V(ViscosityUnit::Centistoke)];

/// 계열과 단위 시스템에 따라 선택 가능한 입력 단위 목록을 돌려준다. 첫 항목이 기본 단위다.
pub fn units_available(family: QuantityFamily, system: UnitSystem) -> &'static [AnyUnit] {
    match (family, system) {
        (QuantityFamily::Length, UnitSystem::SI) => LENGTH_SI,
        (QuantityFamily::Length, UnitSystem::Imperial) => LENGTH_IMPERIAL,
        (QuantityFamily::Diameter, UnitSystem::SI) => DIAMETER_SI,
        (QuantityFamily::Diameter, UnitSystem::Imperial) => DIAMETER_IMPERIAL,
        (QuantityFamily::Roughness, UnitSystem::SI) => ROUGHNESS_SI,
        (QuantityFamily::Roughness, UnitSystem::Imperial) => ROUGHNESS_IMPERIAL,
        (QuantityFamily::FlowRate, UnitSystem::SI) => FLOW_SI,
        (QuantityFamily::FlowRate, UnitSystem::Imperial) => FLOW_IMPERIAL,
        (QuantityFamily::Density, UnitSystem::SI) => DENSITY_SI,
        (QuantityFamily::Density, UnitSystem::Imperial) => DENSITY_IMPERIAL,
        (QuantityFamily::KinematicViscosity, UnitSystem::SI) => VISCOSITY_SI,
        (QuantityFamily::KinematicViscosity, UnitSystem::Imperial) => VISCOSITY_IMPERIAL,
    }
}

/// 단위 시스템의 기본 입력 단위 묶음.
pub fn default_units(system: UnitSystem) -> InputUnits {
    match system {
        UnitSystem::SI => SI_DEFAULTS,
        UnitSystem::Imperial => IMPERIAL_DEFAULTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_differ_everywhere_but_viscosity() {
        let si = default_units(UnitSystem::SI);
        let imp = default_units(UnitSystem::Imperial);
        for family in QuantityFamily::ALL {
            if family == QuantityFamily::KinematicViscosity {
                assert_eq!(si.get(family), imp.get(family));
            } else {
                assert_ne!(si.get(family), imp.get(family), "{}", family.name());
            }
        }
        assert_eq!(si.kinematic_viscosity, ViscosityUnit::Centistoke);
    }

    #[test]
    fn default_unit_is_first_available() {
        for system in [UnitSystem::SI, UnitSystem::Imperial] {
            let defaults = default_units(system);
            for family in QuantityFamily::ALL {
                assert_eq!(units_available(family, system)[0], defaults.get(family));
            }
        }
    }

    #[test]
    fn available_units_stay_in_their_family() {
        for system in [UnitSystem::SI, UnitSystem::Imperial] {
            for unit in units_available(QuantityFamily::FlowRate, system) {
                assert!(matches!(unit, AnyUnit::FlowRate(_)));
            }
            for unit in units_available(QuantityFamily::Roughness, system) {
                assert!(matches!(unit, AnyUnit::Length(_)));
            }
        }
    }

    #[test]
    fn si_internal_flow_unit_is_not_offered() {
        let all: Vec<_> = [UnitSystem::SI, UnitSystem::Imperial]
            .into_iter()
            .flat_map(|s| units_available(QuantityFamily::FlowRate, s).iter().copied())
            .collect();
        assert!(!all.contains(&AnyUnit::FlowRate(FlowRateUnit::CubicMeterPerSecond)));
    }
}

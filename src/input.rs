//! 사용자 단위로 들어온 배관/유체 입력을 계산기용 SI 값으로 정규화한다.

use thiserror::Error;

use crate::catalog::{self, PipeMaterial, ReferenceFluid};
use crate::hydraulics::{FluidSpec, PipeSpec};
use crate::units::{
    DensityUnit, FlowRateUnit, LengthUnit, Unit, UnitQuantity, ViscosityUnit,
};

/// 입력 해석 중 발생 가능한 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown pipe material: {0}")]
    UnknownMaterial(String),
    #[error("unknown reference fluid: {0}")]
    UnknownFluid(String),
}

/// 사용자 단위로 표현된 배관 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeInput {
    pub length: UnitQuantity<LengthUnit>,
    pub diameter: UnitQuantity<LengthUnit>,
    pub roughness: UnitQuantity<LengthUnit>,
}

impl PipeInput {
    /// 재질 테이블의 거칠기(mm)를 사용해 입력을 만든다.
    pub fn with_material(
        length: UnitQuantity<LengthUnit>,
        diameter: UnitQuantity<LengthUnit>,
        material: &PipeMaterial,
    ) -> Self {
        Self {
            length,
            diameter,
            roughness: UnitQuantity::new(material.roughness_mm, LengthUnit::Millimeter),
        }
    }

    /// 재질 코드나 이름으로 거칠기를 찾는다.
    pub fn with_material_code(
        length: UnitQuantity<LengthUnit>,
        diameter: UnitQuantity<LengthUnit>,
        code: &str,
    ) -> Result<Self, InputError> {
        let material = catalog::find_material(code)
            .ok_or_else(|| InputError::UnknownMaterial(code.to_string()))?;
        Ok(Self::with_material(length, diameter, material))
    }

    pub fn to_pipe_spec(&self) -> PipeSpec {
        PipeSpec {
            length_m: self.length.value_in(LengthUnit::Meter),
            diameter_m: self.diameter.value_in(LengthUnit::Meter),
            roughness_m: self.roughness.value_in(LengthUnit::Meter),
        }
    }
}

/// 유체 물성의 출처. 기준 유체를 고르면 밀도와 점도가 고정된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FluidSource {
    Preset(&'static ReferenceFluid),
    Custom {
        density: UnitQuantity<DensityUnit>,
        kinematic_viscosity: UnitQuantity<ViscosityUnit>,
    },
}

impl FluidSource {
    pub fn preset(code: &str) -> Result<Self, InputError> {
        catalog::find_fluid(code)
            .map(FluidSource::Preset)
            .ok_or_else(|| InputError::UnknownFluid(code.to_string()))
    }

    pub fn density(&self) -> UnitQuantity<DensityUnit> {
        match self {
            FluidSource::Preset(f) => {
                UnitQuantity::new(f.density_kg_per_m3, DensityUnit::KgPerCubicMeter)
            }
            FluidSource::Custom { density, .. } => *density,
        }
    }

    pub fn kinematic_viscosity(&self) -> UnitQuantity<ViscosityUnit> {
        match self {
            FluidSource::Preset(f) => {
                UnitQuantity::new(f.kinematic_viscosity_cst, ViscosityUnit::Centistoke)
            }
            FluidSource::Custom {
                kinematic_viscosity,
                ..
            } => *kinematic_viscosity,
        }
    }

    /// 표시용 이름. 사용자 정의 유체는 `None`.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            FluidSource::Preset(f) => Some(f.name),
            FluidSource::Custom { .. } => None,
        }
    }
}

/// 사용자 단위로 표현된 유체 입력. 유량은 출처와 무관하게 항상 사용자가 준다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidInput {
    pub flow_rate: UnitQuantity<FlowRateUnit>,
    pub source: FluidSource,
}

impl FluidInput {
    pub fn to_fluid_spec(&self) -> FluidSpec {
        FluidSpec {
            flow_rate_m3_per_s: self.flow_rate.value_in(FlowRateUnit::CubicMeterPerSecond),
            kinematic_viscosity_m2_per_s: self
                .source
                .kinematic_viscosity()
                .value_in(ViscosityUnit::SquareMeterPerSecond),
            density_kg_per_m3: self.source.density().value_in(DensityUnit::KgPerCubicMeter),
        }
    }
}

/// 편집 필드에 다시 보여줄 값. 유효숫자 6자리로 자른다.
pub fn editable_value(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(5 - magnitude);
    if !scale.is_finite() {
        return value;
    }
    (value * scale).round() / scale
}

/// 입력 단위를 바꿀 때 값을 새 단위로 옮겨 편집용 정밀도로 맞춘다.
pub fn switch_unit<U: Unit>(quantity: UnitQuantity<U>, unit: U) -> UnitQuantity<U> {
    let moved = quantity.to(unit);
    UnitQuantity::new(editable_value(moved.value), unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn imperial_pipe_normalizes_to_meters() {
        let pipe = PipeInput {
            length: UnitQuantity::new(328.084, LengthUnit::Foot),
            diameter: UnitQuantity::new(2.0, LengthUnit::Inch),
            roughness: UnitQuantity::new(45.0, LengthUnit::Micrometer),
        };
        let spec = pipe.to_pipe_spec();
        assert_relative_eq!(spec.length_m, 100.0, max_relative = 1e-6);
        assert_relative_eq!(spec.diameter_m, 0.0508, max_relative = 1e-12);
        assert_relative_eq!(spec.roughness_m, 4.5e-5, max_relative = 1e-12);
    }

    #[test]
    fn material_sets_roughness() {
        let pipe = PipeInput::with_material_code(
            UnitQuantity::new(100.0, LengthUnit::Meter),
            UnitQuantity::new(50.0, LengthUnit::Millimeter),
            "steel",
        )
        .expect("steel");
        assert_relative_eq!(pipe.to_pipe_spec().roughness_m, 4.5e-5, max_relative = 1e-12);

        let err = PipeInput::with_material_code(
            UnitQuantity::new(100.0, LengthUnit::Meter),
            UnitQuantity::new(50.0, LengthUnit::Millimeter),
            "bamboo",
        )
        .unwrap_err();
        assert_eq!(err, InputError::UnknownMaterial("bamboo".into()));
    }

    #[test]
    fn preset_fluid_fixes_properties() {
        let fluid = FluidInput {
            flow_rate: UnitQuantity::new(10.0, FlowRateUnit::LiterPerSecond),
            source: FluidSource::preset("water").expect("water"),
        };
        let spec = fluid.to_fluid_spec();
        assert_relative_eq!(spec.flow_rate_m3_per_s, 0.01, max_relative = 1e-12);
        assert_relative_eq!(spec.kinematic_viscosity_m2_per_s, 1e-6, max_relative = 1e-12);
        assert_eq!(spec.density_kg_per_m3, 998.0);
        assert_eq!(fluid.source.name(), Some("Water (20 °C)"));
    }

    #[test]
    fn custom_fluid_in_imperial_units() {
        let fluid = FluidInput {
            flow_rate: UnitQuantity::new(158.503, FlowRateUnit::UsGallonPerMinute),
            source: FluidSource::Custom {
                density: UnitQuantity::new(62.3, DensityUnit::PoundPerCubicFoot),
                kinematic_viscosity: UnitQuantity::new(1.0, ViscosityUnit::Centistoke),
            },
        };
        let spec = fluid.to_fluid_spec();
        assert_relative_eq!(spec.flow_rate_m3_per_s, 0.01, max_relative = 1e-4);
        assert_relative_eq!(spec.density_kg_per_m3, 997.952_55, max_relative = 1e-6);
        assert!(fluid.source.name().is_none());
    }

    #[test]
    fn unknown_fluid_is_an_input_error() {
        assert_eq!(
            FluidSource::preset("mercury").unwrap_err(),
            InputError::UnknownFluid("mercury".into())
        );
    }

    #[test]
    fn editable_value_keeps_six_significant_figures() {
        assert_eq!(editable_value(1.968_503_937), 1.968_5);
        assert_eq!(editable_value(328.083_989_5), 328.084);
        assert_eq!(editable_value(0.001_771_653_5), 0.001_771_65);
        assert_eq!(editable_value(0.0), 0.0);
    }

    #[test]
    fn editable_value_passes_through_values_too_small_to_scale() {
        assert_eq!(editable_value(1e-305), 1e-305);
        assert_eq!(editable_value(5e-324), 5e-324);
        assert_eq!(editable_value(-1e-310), -1e-310);
    }

    #[test]
    fn switching_unit_reexpresses_value() {
        let d = UnitQuantity::new(50.0, LengthUnit::Millimeter);
        let inches = switch_unit(d, LengthUnit::Inch);
        assert_eq!(inches.unit, LengthUnit::Inch);
        assert_eq!(inches.value, 1.968_5);
    }
}

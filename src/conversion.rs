use thiserror::Error;

use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// 알 수 없는 물리량 이름
    #[error("unknown quantity: {0}")]
    UnknownQuantity(String),
    /// 다른 계열의 단위
    #[error("unit '{unit}' cannot be used for {family}")]
    WrongFamily { unit: String, family: &'static str },
}

/// 물리량 이름을 계열로 바꾼다.
pub fn parse_family(s: &str) -> Result<QuantityFamily, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "length" | "l" => Ok(QuantityFamily::Length),
        "diameter" | "d" => Ok(QuantityFamily::Diameter),
        "roughness" | "e" => Ok(QuantityFamily::Roughness),
        "flow" | "flow-rate" | "flow_rate" | "flowrate" | "q" => Ok(QuantityFamily::FlowRate),
        "density" | "rho" => Ok(QuantityFamily::Density),
        "viscosity" | "kinematic-viscosity" | "nu" => Ok(QuantityFamily::KinematicViscosity),
        _ => Err(ConversionError::UnknownQuantity(s.to_string())),
    }
}

/// 문자열 단위를 계열에 맞는 단위 태그로 바꾼다.
///
/// 계열에 속하지 않는 단위는 `WrongFamily`로 거부한다.
pub fn parse_unit(family: QuantityFamily, s: &str) -> Result<AnyUnit, ConversionError> {
    let parsed = match family {
        QuantityFamily::Length | QuantityFamily::Diameter | QuantityFamily::Roughness => {
            parse_length_unit(s).map(AnyUnit::Length)
        }
        QuantityFamily::FlowRate => parse_flow_rate_unit(s).map(AnyUnit::FlowRate),
        QuantityFamily::Density => parse_density_unit(s).map(AnyUnit::Density),
        QuantityFamily::KinematicViscosity => parse_viscosity_unit(s).map(AnyUnit::Viscosity),
    };
    parsed.map_err(|err| match parse_any_unit(s) {
        Some(_) => ConversionError::WrongFamily {
            unit: s.to_string(),
            family: family.name(),
        },
        None => err,
    })
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m`, `in`, `L/s`, `GPM`, `lb/ft3`, `cSt` 등을 사용할 수 있다.
pub fn convert_str(
    family: QuantityFamily,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let from = parse_unit(family, from_unit_str)?;
    let to = parse_unit(family, to_unit_str)?;
    let converted = match (from, to) {
        (AnyUnit::Length(a), AnyUnit::Length(b)) => convert(value, a, b),
        (AnyUnit::FlowRate(a), AnyUnit::FlowRate(b)) => convert(value, a, b),
        (AnyUnit::Density(a), AnyUnit::Density(b)) => convert(value, a, b),
        (AnyUnit::Viscosity(a), AnyUnit::Viscosity(b)) => convert(value, a, b),
        // parse_unit이 계열을 맞춰주므로 도달하지 않는다.
        _ => {
            return Err(ConversionError::WrongFamily {
                unit: to_unit_str.to_string(),
                family: family.name(),
            })
        }
    };
    Ok(converted)
}

fn parse_any_unit(s: &str) -> Option<AnyUnit> {
    parse_length_unit(s)
        .map(AnyUnit::Length)
        .or_else(|_| parse_flow_rate_unit(s).map(AnyUnit::FlowRate))
        .or_else(|_| parse_density_unit(s).map(AnyUnit::Density))
        .or_else(|_| parse_viscosity_unit(s).map(AnyUnit::Viscosity))
        .ok()
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "µm" | "um" | "micron" => Ok(LengthUnit::Micrometer),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        "in" | "inch" => Ok(LengthUnit::Inch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_flow_rate_unit(s: &str) -> Result<FlowRateUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "l/s" | "lps" => Ok(FlowRateUnit::LiterPerSecond),
        "m3/h" | "m³/h" | "m^3/h" => Ok(FlowRateUnit::CubicMeterPerHour),
        "m3/s" | "m³/s" | "m^3/s" => Ok(FlowRateUnit::CubicMeterPerSecond),
        "gpm" => Ok(FlowRateUnit::UsGallonPerMinute),
        "ft3/s" | "ft³/s" | "ft^3/s" | "cfs" => Ok(FlowRateUnit::CubicFootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/m3" | "kg/m³" | "kg/m^3" => Ok(DensityUnit::KgPerCubicMeter),
        "lb/ft3" | "lb/ft³" | "lb/ft^3" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "cst" | "centistoke" => Ok(ViscosityUnit::Centistoke),
        "m2/s" | "m²/s" | "m^2/s" => Ok(ViscosityUnit::SquareMeterPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

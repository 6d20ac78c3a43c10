//! 계산 결과를 표시 단위로 바꿔 텍스트/CSV로 내보낸다.

use std::io;

use thiserror::Error;

use crate::hydraulics::{CalculationResult, FlowRegime};
use crate::i18n::{keys, Translator};
use crate::units::{display_unit, display_value, ResultQuantity, UnitSystem};

/// 결과 출력 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// 표시 단위로 바뀐 프로파일 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPoint {
    pub distance: f64,
    pub pressure_loss: f64,
}

/// 사용자 단위 시스템으로 환산된 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayResult {
    pub system: UnitSystem,
    pub velocity: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    pub flow_regime: FlowRegime,
    pub head_loss: f64,
    pub pressure_drop_bar: f64,
    pub pressure_drop_pascal: f64,
    pub profile: Vec<DisplayPoint>,
}

impl DisplayResult {
    pub fn from_result(result: &CalculationResult, system: UnitSystem) -> Self {
        let show = |v: f64, q: ResultQuantity| display_value(v, system, q);
        Self {
            system,
            velocity: show(result.velocity_m_per_s, ResultQuantity::Velocity),
            reynolds_number: result.reynolds_number,
            friction_factor: result.friction_factor,
            flow_regime: result.flow_regime,
            head_loss: show(result.head_loss_m, ResultQuantity::HeadLoss),
            pressure_drop_bar: show(result.pressure_drop_bar, ResultQuantity::PressureBar),
            pressure_drop_pascal: show(result.pressure_drop_pa, ResultQuantity::PressurePascal),
            profile: result
                .pressure_profile
                .iter()
                .map(|p| DisplayPoint {
                    distance: show(p.distance_m, ResultQuantity::Distance),
                    pressure_loss: show(p.pressure_loss_pa, ResultQuantity::PressurePascal),
                })
                .collect(),
        }
    }

    pub fn unit(&self, quantity: ResultQuantity) -> &'static str {
        display_unit(self.system, quantity)
    }

    /// 결과 요약을 사람이 읽는 줄 단위로 만든다.
    pub fn summary_lines(&self, tr: &Translator, fluid_name: Option<&str>) -> Vec<String> {
        let mut lines = vec![format!("== {} ==", tr.t(keys::REPORT_TITLE))];
        if let Some(name) = fluid_name {
            lines.push(format!("{}: {name}", tr.t(keys::REPORT_FLUID)));
        }
        lines.push(format!(
            "{}: {} {}",
            tr.t(keys::REPORT_VELOCITY),
            format_number(self.velocity),
            self.unit(ResultQuantity::Velocity)
        ));
        lines.push(format!(
            "{}: {}",
            tr.t(keys::REPORT_REYNOLDS),
            format_number(self.reynolds_number)
        ));
        lines.push(format!(
            "{}: {}",
            tr.t(keys::REPORT_FRICTION_FACTOR),
            format_number(self.friction_factor)
        ));
        lines.push(format!(
            "{}: {}",
            tr.t(keys::REPORT_REGIME),
            tr.regime(self.flow_regime)
        ));
        lines.push(format!(
            "{}: {} {}",
            tr.t(keys::REPORT_HEAD_LOSS),
            format_number(self.head_loss),
            self.unit(ResultQuantity::HeadLoss)
        ));
        lines.push(format!(
            "{}: {} {} ({} {})",
            tr.t(keys::REPORT_PRESSURE_DROP),
            format_number(self.pressure_drop_bar),
            self.unit(ResultQuantity::PressureBar),
            format_number(self.pressure_drop_pascal),
            self.unit(ResultQuantity::PressurePascal)
        ));
        lines
    }

    /// 거리-압력손실 프로파일을 CSV로 쓴다. 헤더에 표시 단위를 붙인다.
    pub fn write_profile_csv<W: io::Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            format!("distance_{}", self.unit(ResultQuantity::Distance)),
            format!("pressure_loss_{}", self.unit(ResultQuantity::PressurePascal)),
        ])?;
        for p in &self.profile {
            wtr.write_record([p.distance.to_string(), p.pressure_loss.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// 결과값 표시 형식. 아주 크거나 작은 값은 지수 표기, 나머지는 소수 2~4자리.
pub fn format_number(num: f64) -> String {
    if num > 10_000.0 || (num < 0.01 && num != 0.0) {
        return format!("{num:.2e}");
    }
    let mut s = format!("{num:.4}");
    // 소수점 아래 최소 2자리는 남긴다.
    while s.ends_with('0') && s.len() - s.find('.').unwrap_or(s.len()) > 3 {
        s.pop();
    }
    s
}

/// 프로파일 차트 압력축 눈금 라벨.
pub fn format_pressure_tick(value: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::SI => {
            let abs = value.abs();
            if abs >= 1e5 {
                format!("{:.1} bar", value / 1e5)
            } else if abs >= 1e3 {
                format!("{:.1} kPa", value / 1e3)
            } else {
                format!("{value:.0} Pa")
            }
        }
        UnitSystem::Imperial => format!("{value:.1}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydraulics::{compute, FluidSpec, PipeSpec};
    use approx::assert_relative_eq;

    fn sample() -> CalculationResult {
        compute(
            &PipeSpec {
                length_m: 100.0,
                diameter_m: 0.05,
                roughness_m: 0.000045,
            },
            &FluidSpec {
                flow_rate_m3_per_s: 0.01,
                kinematic_viscosity_m2_per_s: 1e-6,
                density_kg_per_m3: 998.0,
            },
        )
        .expect("sample result")
    }

    #[test]
    fn si_display_matches_raw_result() {
        let raw = sample();
        let shown = DisplayResult::from_result(&raw, UnitSystem::SI);
        assert_eq!(shown.velocity, raw.velocity_m_per_s);
        assert_eq!(shown.pressure_drop_pascal, raw.pressure_drop_pa);
        assert_eq!(shown.profile.len(), raw.pressure_profile.len());
    }

    #[test]
    fn imperial_display_converts_every_dimension() {
        let raw = sample();
        let shown = DisplayResult::from_result(&raw, UnitSystem::Imperial);
        assert_relative_eq!(shown.velocity, raw.velocity_m_per_s * 3.28084);
        assert_relative_eq!(shown.head_loss, raw.head_loss_m * 3.28084);
        assert_relative_eq!(shown.pressure_drop_bar, raw.pressure_drop_bar * 14.5038);
        assert_relative_eq!(shown.profile[100].distance, 328.084, max_relative = 1e-9);
        assert_eq!(shown.reynolds_number, raw.reynolds_number);
        assert_eq!(shown.unit(ResultQuantity::HeadLoss), "ft");
    }

    #[test]
    fn summary_is_localized() {
        let shown = DisplayResult::from_result(&sample(), UnitSystem::SI);
        let lines = shown.summary_lines(&Translator::new("es"), Some("Agua"));
        assert!(lines.iter().any(|l| l == "Régimen de flujo: Turbulento"));
        assert!(lines.iter().any(|l| l == "Velocidad: 5.093 m/s"));
        assert!(lines.iter().any(|l| l == "Fluido: Agua"));
    }

    #[test]
    fn csv_has_header_and_all_points() {
        let shown = DisplayResult::from_result(&sample(), UnitSystem::SI);
        let mut buf = Vec::new();
        shown.write_profile_csv(&mut buf).expect("csv");
        let text = String::from_utf8(buf).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("distance_m,pressure_loss_Pa"));
        assert_eq!(lines.next(), Some("0,0"));
        assert_eq!(text.lines().count(), 102);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(5.092_958), "5.093");
        assert_eq!(format_number(54.1), "54.10");
        assert_eq!(format_number(0.0205), "0.0205");
        assert_eq!(format_number(254_647.9), "2.55e5");
        assert_eq!(format_number(0.001_234), "1.23e-3");
        assert_eq!(format_number(0.0), "0.00");
    }

    #[test]
    fn pressure_ticks() {
        assert_eq!(format_pressure_tick(530_470.0, UnitSystem::SI), "5.3 bar");
        assert_eq!(format_pressure_tick(2_500.0, UnitSystem::SI), "2.5 kPa");
        assert_eq!(format_pressure_tick(12.4, UnitSystem::SI), "12 Pa");
        assert_eq!(format_pressure_tick(76.94, UnitSystem::Imperial), "76.9");
    }
}

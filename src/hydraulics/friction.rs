use std::fmt;

use serde::{Deserialize, Serialize};

/// 이 값 미만은 층류.
pub const LAMINAR_UPPER_RE: f64 = 2300.0;
/// 이 값 초과는 난류. 두 경계값 자체는 천이 구간에 속한다.
pub const TURBULENT_LOWER_RE: f64 = 4000.0;

/// 레이놀즈수로 정해지는 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// 레이놀즈수로 유동 영역을 판정한다. 2300 ≤ Re ≤ 4000 은 천이 영역이다.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < LAMINAR_UPPER_RE {
            FlowRegime::Laminar
        } else if reynolds <= TURBULENT_LOWER_RE {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowRegime::Laminar => f.write_str("Laminar"),
            FlowRegime::Transitional => f.write_str("Transitional"),
            FlowRegime::Turbulent => f.write_str("Turbulent"),
        }
    }
}

/// Swamee-Jain 식에 의한 Darcy 마찰계수.
///
/// f = 0.25 / [log10(ε/(3.7·D) + 5.74/Re^0.9)]²
pub fn swamee_jain(reynolds: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    let log_term = (roughness_m / (3.7 * diameter_m) + 5.74 / reynolds.powf(0.9)).log10();
    0.25 / log_term.powi(2)
}

/// 유동 영역을 판정하고 해당 영역의 Darcy 마찰계수를 계산한다.
///
/// - 층류: f = 64/Re
/// - 천이: 난류식(Swamee-Jain)을 그대로 근사로 사용
/// - 난류: Swamee-Jain
///
/// `reynolds`가 0이면 층류 분기에서 무한대가 나온다. 호출 측 가드가 이를 막는다.
pub fn friction_factor(reynolds: f64, roughness_m: f64, diameter_m: f64) -> (f64, FlowRegime) {
    let regime = FlowRegime::classify(reynolds);
    let f = match regime {
        FlowRegime::Laminar => 64.0 / reynolds,
        FlowRegime::Transitional | FlowRegime::Turbulent => {
            swamee_jain(reynolds, roughness_m, diameter_m)
        }
    };
    (f, regime)
}

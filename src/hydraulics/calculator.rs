use serde::{Deserialize, Serialize};

use super::friction::{friction_factor, FlowRegime};
use super::{GRAVITY, PA_PER_BAR, PROFILE_SEGMENTS};

/// 배관 형상 입력 [SI].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeSpec {
    /// 길이 [m]
    pub length_m: f64,
    /// 내경 [m]
    pub diameter_m: f64,
    /// 절대 거칠기 [m]
    pub roughness_m: f64,
}

/// 유체 물성 및 유량 입력 [SI].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidSpec {
    /// 체적 유량 [m3/s]
    pub flow_rate_m3_per_s: f64,
    /// 동점도 [m2/s]
    pub kinematic_viscosity_m2_per_s: f64,
    /// 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
}

/// 압력 프로파일의 한 점. 두 값 모두 소수 둘째 자리로 반올림되어 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// 입구로부터 거리 [m]
    pub distance_m: f64,
    /// 입구 대비 누적 압력손실 [Pa]
    pub pressure_loss_pa: f64,
}

/// 압력손실 계산 결과 [SI].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 평균 유속 [m/s]
    pub velocity_m_per_s: f64,
    pub reynolds_number: f64,
    /// Darcy 마찰계수
    pub friction_factor: f64,
    pub flow_regime: FlowRegime,
    /// 손실수두 [m]
    pub head_loss_m: f64,
    /// 압력강하 [Pa]
    pub pressure_drop_pa: f64,
    /// 압력강하 [bar]
    pub pressure_drop_bar: f64,
    /// 0 ~ length 구간을 100 등분한 101개 점
    pub pressure_profile: Vec<ProfilePoint>,
}

/// Darcy-Weisbach 식으로 직관 배관의 손실수두와 압력강하를 계산한다.
///
/// 내경, 길이, 유량 중 하나라도 0 이하이면 아직 계산할 수 없는 입력으로 보고 `None`을 돌려준다.
/// 거칠기, 점도, 밀도는 호출 측이 양수를 보장한다고 가정하며 검증하지 않는다.
pub fn compute(pipe: &PipeSpec, fluid: &FluidSpec) -> Option<CalculationResult> {
    if pipe.diameter_m <= 0.0 || pipe.length_m <= 0.0 || fluid.flow_rate_m3_per_s <= 0.0 {
        return None;
    }

    let d = pipe.diameter_m;
    let area = std::f64::consts::PI * (d / 2.0).powi(2);
    let velocity = fluid.flow_rate_m3_per_s / area;
    let reynolds = velocity * d / fluid.kinematic_viscosity_m2_per_s;

    let (f, regime) = friction_factor(reynolds, pipe.roughness_m, d);

    let head_loss = head_loss_m(f, pipe.length_m, d, velocity);
    let pressure_drop_pa = head_loss * fluid.density_kg_per_m3 * GRAVITY;

    Some(CalculationResult {
        velocity_m_per_s: velocity,
        reynolds_number: reynolds,
        friction_factor: f,
        flow_regime: regime,
        head_loss_m: head_loss,
        pressure_drop_pa,
        pressure_drop_bar: pressure_drop_pa / PA_PER_BAR,
        pressure_profile: pressure_profile(f, pipe, velocity, fluid.density_kg_per_m3),
    })
}

/// hf = f · (L/D) · v²/(2g)
fn head_loss_m(f: f64, length_m: f64, diameter_m: f64, velocity: f64) -> f64 {
    f * (length_m / diameter_m) * (velocity.powi(2) / (2.0 * GRAVITY))
}

// 정상류에서는 f와 v가 관 전체에서 일정하므로 거리만 바꿔 같은 식을 적용한다.
fn pressure_profile(f: f64, pipe: &PipeSpec, velocity: f64, density: f64) -> Vec<ProfilePoint> {
    let step = pipe.length_m / PROFILE_SEGMENTS as f64;
    (0..=PROFILE_SEGMENTS)
        .map(|i| {
            let distance = step * i as f64;
            let loss = head_loss_m(f, distance, pipe.diameter_m, velocity) * density * GRAVITY;
            ProfilePoint {
                distance_m: round2(distance),
                pressure_loss_pa: round2(loss),
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

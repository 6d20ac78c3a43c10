//! 배관 재질별 절대 거칠기와 기준 유체 물성 테이블.
//! 값은 일반적인 설계 참고치이며 실제 설계 시 제조사/규격 값으로 확인해야 한다.

/// 배관 재질과 절대 거칠기.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeMaterial {
    pub code: &'static str,
    pub name: &'static str,
    /// 절대 거칠기 [mm]
    pub roughness_mm: f64,
}

/// 밀도와 동점도가 고정된 기준 유체.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFluid {
    pub code: &'static str,
    pub name: &'static str,
    /// 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 동점도 [cSt]
    pub kinematic_viscosity_cst: f64,
}

pub fn materials() -> &'static [PipeMaterial] {
    MATERIALS
}

pub fn fluids() -> &'static [ReferenceFluid] {
    FLUIDS
}

/// 코드 또는 이름(대소문자 무시)으로 재질을 찾는다.
pub fn find_material(code: &str) -> Option<&'static PipeMaterial> {
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

/// 코드 또는 이름(대소문자 무시)으로 기준 유체를 찾는다.
pub fn find_fluid(code: &str) -> Option<&'static ReferenceFluid> {
    FLUIDS
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(code) || f.name.eq_ignore_ascii_case(code))
}

const MATERIALS: &[PipeMaterial] = &[
    mat("steel", "Commercial or welded steel", 0.045),
    mat("stainless", "Stainless steel", 0.002),
    mat("cast-iron", "Cast iron (new)", 0.26),
    mat("galvanized", "Galvanized iron", 0.15),
    mat("pvc", "PVC, plastic, glass", 0.0015),
    mat("copper", "Copper or brass", 0.0015),
    mat("concrete", "Concrete", 0.9),
];

// 첫 항목(20 °C 물)이 기본 유체다.
const FLUIDS: &[ReferenceFluid] = &[
    fluid("water", "Water (20 °C)", 998.0, 1.0),
    fluid("water-5c", "Water (5 °C)", 1000.0, 1.52),
    fluid("water-60c", "Water (60 °C)", 983.2, 0.474),
    fluid("seawater", "Seawater (20 °C)", 1025.0, 1.05),
    fluid("glycol-50", "Ethylene glycol 50 % (20 °C)", 1070.0, 3.8),
    fluid("diesel", "Diesel fuel (20 °C)", 832.0, 4.0),
    fluid("gasoline", "Gasoline (20 °C)", 745.0, 0.71),
    fluid("sae30", "Lubricating oil SAE 30 (20 °C)", 891.0, 440.0),
];

const fn mat(code: &'static str, name: &'static str, roughness_mm: f64) -> PipeMaterial {
    PipeMaterial {
        code,
        name,
        roughness_mm,
    }
}

const fn fluid(
    code: &'static str,
    name: &'static str,
    density_kg_per_m3: f64,
    kinematic_viscosity_cst: f64,
) -> ReferenceFluid {
    ReferenceFluid {
        code,
        name,
        density_kg_per_m3,
        kinematic_viscosity_cst,
    }
}

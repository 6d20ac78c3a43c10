//! 원형 직관의 Darcy-Weisbach 마찰 손실 계산기.
//!
//! 계산 로직(`hydraulics`)과 단위 변환(`units`)은 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓴다.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod hydraulics;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod report;
pub mod units;

// ==========================================
// 集成测试辅助模块
// ==========================================

#![allow(dead_code)]

pub mod line_builder;

pub use line_builder::*;

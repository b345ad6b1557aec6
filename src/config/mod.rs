//! 应用配置
//!
//! 加载顺序：内置默认值 → config 文件 → 环境变量。

mod r#impl;
mod structs;

pub use structs::*;

//! 核心层：错误分类与中间件

pub mod error;
pub mod middleware;

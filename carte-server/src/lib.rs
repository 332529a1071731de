//! Carte Menu Server - 餐厅菜单管理服务
//!
//! # 架构概述
//!
//! 本模块是 Carte 服务端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **管理 API** (`api`): 餐厅/菜单/分类/菜品的 RESTful 接口
//! - **页面路由** (`pages`): 预览页和已发布菜单页（含所有权校验）
//! - **视图模型** (`view`): 轮播图序列、菜单标签页、卡片链接守卫
//!
//! # 模块结构
//!
//! ```text
//! carte-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、会话提取
//! ├── api/           # 管理 HTTP 路由和处理器
//! ├── pages/         # 预览/已发布菜单页面路由
//! ├── view/          # 纯视图模型推导
//! ├── utils/         # 错误、日志等工具
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod pages;
pub mod utils;
pub mod view;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, build_app, build_app_with_state, setup_environment};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   ______           __
  / ____/___ ______/ /____
 / /   / __ `/ ___/ __/ _ \
/ /___/ /_/ / /  / /_/  __/
\____/\__,_/_/   \__/\___/
    "#
    );
}

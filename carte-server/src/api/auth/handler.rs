//! Authentication Handlers
//!
//! Handles registration, login and current-user lookup

use std::time::Duration;

use axum::{Json, extract::State};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{User, UserCreate};
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult, ok};

// Re-use shared DTOs for API consistency
use shared::ApiResponse;
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn user_info(user: &User) -> UserInfo {
    UserInfo {
        id: user.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        is_active: user.is_active,
        created_at: user.created_at,
    }
}

/// POST /api/auth/register - 注册账号
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<ApiResponse<UserInfo>>> {
    let payload = UserCreate {
        email: req.email,
        password: req.password,
        display_name: req.display_name,
    };
    payload.validate()?;

    let repo = UserRepository::new(state.get_db());
    let user = repo.create(payload).await?;

    tracing::info!(email = %user.email, "User registered");

    Ok(ok(user_info(&user)))
}

/// POST /api/auth/login - 登录并签发 JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let user = match user {
        Some(u) => {
            if !u.is_active {
                return Err(AppError::forbidden("Account has been disabled"));
            }

            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.email, &user.display_name)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user_id, email = %user.email, "User logged in successfully");

    Ok(ok(LoginResponse {
        token,
        user: user_info(&user),
    }))
}

/// GET /api/auth/me - 当前用户信息
///
/// 从数据库读取最新状态，而不是回显令牌里的快照
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<UserInfo>>> {
    let repo = UserRepository::new(state.get_db());
    let fresh = repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(ok(user_info(&fresh)))
}

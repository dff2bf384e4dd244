use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::errors::{ArgoChainError, Result};
use crate::models::users::entities::{UserRole, UserType};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::{generate_password, hash_password};
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_ADMIN_EMAIL: &str = "admin@argochainhub.local";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn build_cache(name: &str) -> Result<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name).ok_or_else(|| {
        ArgoChainError::cache_plugin_not_found(format!("Cache backend '{name}' not registered"))
    })?;
    constructor().await.map(Arc::from)
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = AppConfig::get().cache.cache_type.as_str();
    debug!("Attempting to create {} cache backend", cache_type);

    match build_cache(cache_type).await {
        Ok(cache) => {
            info!("Created {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != "moka" => {
            warn!("Failed to create {} cache: {}", cache_type, e);
            warn!("Falling back to Moka (in-memory) cache");
            build_cache("moka").await
        }
        Err(e) => Err(e),
    }
}

/// 没有平台管理员时创建一个
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_platform_admins().await {
        Ok(count) if count > 0 => {
            debug!("Found {} platform admin(s), skipping admin seed", count);
            return;
        }
        Ok(_) => info!("No platform admin found, creating default admin account..."),
        Err(e) => {
            warn!("Failed to count platform admins: {}, skipping admin seed", e);
            return;
        }
    }

    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        email: email.to_lowercase(),
        password_hash,
        name: "Administrator".to_string(),
        role: UserRole::PlatformAdmin,
        user_type: UserType::IndividualBuyer,
        company_id: None,
        phone: None,
        email_verified: true,
    };

    match storage.create_user(admin_request).await {
        Ok(user) => info!(
            "Default admin account created (ID: {}, email: {})",
            user.id, user.email
        ),
        Err(e) => warn!("Failed to create admin account: {}", e),
    }
}

/// 准备服务器启动的上下文：存储（含迁移）、管理员账号和缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 重复安装返回 Err，可忽略
    let _ = rustls::crypto::ring::default_provider().install_default();

    if cfg!(debug_assertions) {
        debug!(
            "Registered cache backends: {:?}",
            crate::cache::register::registered_object_cache_plugins()
        );
    }

    let storage = crate::storage::create_storage().await?;
    info!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;

    let cache = create_cache().await?;
    info!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}

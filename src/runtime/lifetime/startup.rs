use crate::cache::ObjectCache;
use crate::cache::register::{get_object_cache_plugin, register_builtin_caches};
use crate::config::AppConfig;
use crate::errors::{Result, SchoolSiteError};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn build_cache(name: &str) -> Result<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name).ok_or_else(|| {
        SchoolSiteError::cache_plugin_not_found(format!("Cache backend '{name}' is not registered"))
    })?;
    Ok(Arc::from(constructor().await?))
}

/// 按配置创建缓存，失败时退回内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = AppConfig::get().cache.cache_type.as_str();

    match build_cache(cache_type).await {
        Ok(cache) => {
            info!("Using {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != "moka" => {
            warn!("{}, falling back to in-memory cache", e);
            build_cache("moka").await
        }
        Err(e) => Err(e),
    }
}

fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz23456789";
    let mut rng = rand::rng();
    let mut password: String = (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    // 保证满足密码策略
    password.push_str("Aa1");
    password
}

/// 库中没有任何账号时创建默认管理员
async fn seed_admin(storage: &Arc<dyn Storage>) -> Result<()> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!("Found {} account(s), skipping admin seed", count);
        return Ok(());
    }

    let password = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => {
            let generated = generate_random_password(16);
            warn!("==========================================================");
            warn!("  ADMIN_PASSWORD not set, generated admin password: {}", generated);
            warn!("  Log in and change it, or set ADMIN_PASSWORD before first start");
            warn!("==========================================================");
            generated
        }
    };

    let user = storage
        .create_user(CreateUserRequest {
            username: "admin".to_string(),
            email: "admin@localhost.localdomain".to_string(),
            password: hash_password(&password)?,
            role: UserRole::Admin,
            display_name: Some("Administrator".to_string()),
        })
        .await?;

    info!("Default admin account created (ID: {})", user.id);
    Ok(())
}

/// 启动前准备：TLS 提供者、存储与迁移、缓存、默认账号、上传目录
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // redis 的 rustls 连接需要进程级默认提供者，重复安装时忽略
    let _ = rustls::crypto::ring::default_provider().install_default();

    register_builtin_caches();

    let storage = crate::storage::create_storage().await?;
    info!("Storage backend initialized and migrations completed");

    if let Err(e) = seed_admin(&storage).await {
        warn!("Failed to seed admin account: {}", e);
    }

    let upload_dir = &AppConfig::get().upload.dir;
    tokio::fs::create_dir_all(upload_dir).await?;
    debug!("Upload directory ready: {}", upload_dir);

    let cache = create_cache().await?;

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate::validate_password;

    #[test]
    fn test_generated_password_meets_policy() {
        for _ in 0..20 {
            let password = generate_random_password(16);
            assert_eq!(password.len(), 19);
            assert!(validate_password(&password).is_valid);
        }
    }
}

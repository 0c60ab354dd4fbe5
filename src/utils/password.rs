use crate::config::AppConfig;
use crate::errors::SchoolSiteError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

fn argon2_instance() -> Result<Argon2<'static>, SchoolSiteError> {
    let config = &AppConfig::get().argon2;
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| SchoolSiteError::validation(format!("Argon2 参数错误: {e}")))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// 以 Argon2id 哈希后台账号密码
pub fn hash_password(password: &str) -> Result<String, SchoolSiteError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2_instance()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SchoolSiteError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 参数取自哈希串本身，配置变更后旧密码仍可验证
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Sch00lSite").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Sch00lSite", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("Sch00lSite", "not-a-hash"));
    }
}

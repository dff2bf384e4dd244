use crate::config::AppConfig;
use crate::errors::ArgoChainError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::Rng;
use rand::distr::Alphanumeric;

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, ArgoChainError> {
    let config = AppConfig::get();
    hash_password_with(
        password,
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
    )
}

/// 使用指定参数哈希密码
pub fn hash_password_with(
    password: &str,
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
) -> Result<String, ArgoChainError> {
    let params = Params::new(memory_cost, time_cost, parallelism, None)
        .map_err(|e| ArgoChainError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ArgoChainError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

/// 生成随机密码，保证满足密码策略
pub fn generate_password(len: usize) -> String {
    let len = len.max(8);
    let mut rng = rand::rng();
    loop {
        let candidate: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        if crate::utils::validate::validate_password(&candidate).is_valid {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password_with("Agro2025Chain", 1024, 1, 1).unwrap();
        assert!(verify_password("Agro2025Chain", &hash));
        assert!(!verify_password("agro2025chain", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("whatever", "not-a-phc-string"));
    }

    #[test]
    fn test_generated_password_meets_policy() {
        for _ in 0..20 {
            let password = generate_password(16);
            assert_eq!(password.len(), 16);
            assert!(crate::utils::validate::validate_password(&password).is_valid);
        }
    }
}

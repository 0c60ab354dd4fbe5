use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("Invalid color regex")
});

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]{1,64}$").expect("Invalid slug regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 3 <= len <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码策略校验结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 至少 8 位，同时包含大小写字母与数字，且不在常见弱密码表中
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    const WEAK_PASSWORDS: [&str; 6] = [
        "password1",
        "admin1234",
        "qwerty123",
        "abcd1234",
        "school123",
        "welcome1",
    ];
    if WEAK_PASSWORDS
        .iter()
        .any(|weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

/// `#RGB` 或 `#RRGGBB`
pub fn validate_hex_color(color: &str) -> Result<(), &'static str> {
    if !HEX_COLOR_RE.is_match(color) {
        return Err("Color must be a hex value like #RRGGBB or #RGB");
    }
    Ok(())
}

/// 页面名与区块键：小写字母、数字、下划线、连字符
pub fn validate_slug(value: &str) -> Result<(), &'static str> {
    if !SLUG_RE.is_match(value) {
        return Err("Identifier must match [a-z0-9_-] and be 1 to 64 characters");
    }
    Ok(())
}

/// `HH:MM`（24 小时制）
pub fn validate_time_of_day(value: &str) -> Result<(), &'static str> {
    if value.len() != 5 || NaiveTime::parse_from_str(value, "%H:%M").is_err() {
        return Err("Time must use the HH:MM format");
    }
    Ok(())
}

/// 按字符数校验去除首尾空白后的文本长度
pub fn validate_text_length(
    value: &str,
    min: usize,
    max: usize,
    message: &'static str,
) -> Result<(), &'static str> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(message);
    }
    Ok(())
}

pub fn validate_year(year: i32) -> Result<(), &'static str> {
    if !(1900..=2100).contains(&year) {
        return Err("Year must be between 1900 and 2100");
    }
    Ok(())
}

/// 修剪列表中的每一项，丢弃空项并去重，保持原有顺序
pub fn clean_list(items: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim().to_string();
        if !item.is_empty() && !cleaned.contains(&item) {
            cleaned.push(item);
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email("office@school.edu.ph").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("SecurePass123").is_valid);

        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );

        let result = validate_password("School123");
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
        assert!(validate_password_simple("Ab1").is_err());
    }

    #[test]
    fn test_hex_color() {
        assert!(validate_hex_color("#1E3A8A").is_ok());
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("1E3A8A").is_err());
        assert!(validate_hex_color("#12345").is_err());
        assert!(validate_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_slug() {
        assert!(validate_slug("about-us").is_ok());
        assert!(validate_slug("hero_1").is_ok());
        assert!(validate_slug("About").is_err());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("../etc").is_err());
    }

    #[test]
    fn test_time_of_day() {
        assert!(validate_time_of_day("08:30").is_ok());
        assert!(validate_time_of_day("23:59").is_ok());
        assert!(validate_time_of_day("24:00").is_err());
        assert!(validate_time_of_day("8:30").is_err());
        assert!(validate_time_of_day("08:30:00").is_err());
    }

    #[test]
    fn test_text_length_counts_chars_after_trim() {
        assert!(validate_text_length("  Ana  ", 1, 3, "bad").is_ok());
        assert!(validate_text_length("   ", 1, 50, "bad").is_err());
        assert!(validate_text_length("ñañaña", 1, 6, "bad").is_ok());
    }

    #[test]
    fn test_year_range() {
        assert!(validate_year(1900).is_ok());
        assert!(validate_year(2100).is_ok());
        assert!(validate_year(1899).is_err());
        assert!(validate_year(2101).is_err());
    }

    #[test]
    fn test_clean_list() {
        let cleaned = clean_list(vec![
            " Robotics ".into(),
            "".into(),
            "Coding".into(),
            "Robotics".into(),
        ]);
        assert_eq!(cleaned, vec!["Robotics".to_string(), "Coding".to_string()]);
    }
}

//! 查询参数与请求体的宽松反序列化工具
//!
//! `web::Query` 配合 `#[serde(flatten)]` 时所有值都会以字符串形式到达，
//! 这里的函数同时接受原生类型与字符串形式。

use serde::Deserialize;

/// 可选布尔值，兼容查询字符串中 flatten 后的 "true"/"1" 形式
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::Str(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid boolean: {other}"))),
        },
    }
}

/// 可选整数，兼容字符串形式
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(v)) => Ok(Some(v)),
        Some(IntOrString::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer: {s}"))),
    }
}

/// 区分“字段缺失”与“显式 null”，用于可清空的更新字段
///
/// 配合 `#[serde(default, deserialize_with = "deserialize_nullable")]` 使用：
/// 缺失 -> `None`，`null` -> `Some(None)`，有值 -> `Some(Some(v))`
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(default, deserialize_with = "deserialize_optional_bool")]
        upcoming: Option<bool>,
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        image_id: Option<i64>,
    }

    #[test]
    fn test_optional_helpers() {
        let f: Flags = serde_json::from_str(r#"{"upcoming":"true","image_id":"12"}"#).unwrap();
        assert_eq!(f.upcoming, Some(true));
        assert_eq!(f.image_id, Some(12));

        let f: Flags = serde_json::from_str(r#"{"upcoming":false}"#).unwrap();
        assert_eq!(f.upcoming, Some(false));
        assert_eq!(f.image_id, None);

        assert!(serde_json::from_str::<Flags>(r#"{"upcoming":"maybe"}"#).is_err());
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_nullable")]
        expires_at: Option<Option<i64>>,
    }

    #[test]
    fn test_nullable_distinguishes_missing_and_null() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(p.expires_at, None);

        let p: Patch = serde_json::from_str(r#"{"expires_at":null}"#).unwrap();
        assert_eq!(p.expires_at, Some(None));

        let p: Patch = serde_json::from_str(r#"{"expires_at":5}"#).unwrap();
        assert_eq!(p.expires_at, Some(Some(5)));
    }
}

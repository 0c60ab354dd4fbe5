//! 以字符串形式存储与传输的枚举
//!
//! 数据库列与 JSON 中都使用小写字符串，生成 `Display`、`FromStr`、`as_str` 与 `ALL`。

#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal),* $(,)?
        }
    ) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            ts_rs::TS,
        )]
        $(#[$meta])*
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)*
                    _ => Err(format!("Invalid {}: {s}", stringify!($name))),
                }
            }
        }
    };
}

crate::string_enum! {
    /// 回收站筛选：仅已删除 / 包含已删除
    #[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
    pub enum TrashedFilter {
        Only => "only",
        With => "with",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_enum_parse_and_display() {
        assert_eq!("only".parse::<TrashedFilter>().unwrap(), TrashedFilter::Only);
        assert_eq!(TrashedFilter::With.to_string(), "with");
        assert!("all".parse::<TrashedFilter>().is_err());
        assert_eq!(TrashedFilter::ALL.len(), 2);
    }

    #[test]
    fn test_string_enum_serde() {
        let v: TrashedFilter = serde_json::from_str(r#""with""#).unwrap();
        assert_eq!(v, TrashedFilter::With);
        assert_eq!(serde_json::to_string(&TrashedFilter::Only).unwrap(), r#""only""#);
    }
}

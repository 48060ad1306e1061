use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

// 最後に払い出したミリ秒タイムスタンプ
static LAST_ISSUED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// 現在時刻（UNIX ミリ秒）を返す。ただし同一プロセス内では
/// 直前に払い出した値より必ず大きい値を返す。
fn next_timestamp_millis() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let previous = LAST_ISSUED_MILLIS
        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now.max(previous + 1)
}

macro_rules! define_business_id {
    ($id_type:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(String);

        impl $id_type {
            pub const PREFIX: &'static str = $prefix;

            /// `<PREFIX><UNIX ミリ秒>` 形式の ID を新規に発行する
            pub fn new() -> Self {
                Self(format!("{}{}", Self::PREFIX, next_timestamp_millis()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $id_type {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<String> for $id_type {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $id_type {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_business_id!(SpaceId, "PR");
define_business_id!(VendorId, "VN");

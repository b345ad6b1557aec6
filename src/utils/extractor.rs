//! 路径参数提取器
//!
//! 将路径中的 ID 解析为 i64，无法解析时返回 400；不存在的 ID 交由业务层返回 404。

/// 定义从路径参数中提取 i64 ID 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok());

                futures_util::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err($crate::errors::EduCheckError::validation(format!(
                        "Invalid path parameter: {}",
                        $param
                    ))
                    .into()),
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeTestIdI64, "test_id");
define_safe_i64_extractor!(SafeSubmissionIdI64, "submission_id");

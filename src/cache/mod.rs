//! 对象缓存层
//!
//! 缓存后端以插件形式注册（moka 内存缓存 / redis），
//! 启动时按配置选择，redis 不可用时回退到内存缓存。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 注册缓存插件，程序加载时执行
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $constructor:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $constructor:snake>]() {
                use std::sync::Arc;
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    Arc::new(|| {
                        let fut: $crate::cache::register::BoxedObjectCacheFuture =
                            Box::pin(async {
                                $constructor::new()
                                    .map(|cache| {
                                        Box::new(cache) as Box<dyn $crate::cache::ObjectCache>
                                    })
                                    .map_err($crate::errors::CampusRateError::cache_connection)
                            });
                        fut
                    }),
                );
            }
        }
    };
}

use crate::cache::ObjectCache;
use crate::cache::object_cache::{MokaObjectCache, RedisObjectCache};
use crate::errors::{Result, SchoolSiteError};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    let mut registry = OBJECT_CACHE_REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.insert(name.into(), constructor);
}

pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(name)
        .cloned()
}

fn build_moka() -> BoxedObjectCacheFuture {
    Box::pin(async {
        let cache: Box<dyn ObjectCache> = Box::new(MokaObjectCache::from_config());
        Ok::<_, SchoolSiteError>(cache)
    })
}

fn build_redis() -> BoxedObjectCacheFuture {
    Box::pin(async {
        let cache: Box<dyn ObjectCache> = Box::new(RedisObjectCache::connect().await?);
        Ok::<_, SchoolSiteError>(cache)
    })
}

/// 注册内置缓存后端，启动时调用一次
pub fn register_builtin_caches() {
    register_object_cache_plugin("moka", Arc::new(build_moka));
    register_object_cache_plugin("redis", Arc::new(build_redis));
    debug_object_cache_registry();
}

pub fn debug_object_cache_registry() {
    let registry = OBJECT_CACHE_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    for key in registry.keys() {
        tracing::debug!("Object cache backend registered: {}", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheResult;

    #[tokio::test]
    async fn test_builtin_moka_backend() {
        register_builtin_caches();
        assert!(get_object_cache_plugin("redis").is_some());
        assert!(get_object_cache_plugin("memcached").is_none());

        let constructor = get_object_cache_plugin("moka").unwrap();
        let cache = constructor().await.unwrap();
        cache.insert_raw("k".to_string(), "v".to_string(), 0).await;
        assert_eq!(cache.get_raw("k").await, CacheResult::Found("v".to_string()));
    }
}

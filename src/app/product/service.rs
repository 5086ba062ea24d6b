//! 产品存储网关
//!
//! 对单一集合的 get/put/delete/scan 薄封装。底层存储引擎视为不透明
//! 服务，此处为内存实现；一致性只依赖按键原子性，无事务、无重试。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::model::Product;
use crate::core::error::ApiError;

/// 全量扫描结果：无序记录集合及数量
#[derive(Debug)]
pub struct ScanResult {
    pub items: Vec<Product>,
    pub count: usize,
}

/// 产品存储网关，克隆后仍指向同一集合
#[derive(Clone)]
pub struct ProductStore {
    collection: String,
    records: Arc<RwLock<HashMap<String, Product>>>,
}

impl ProductStore {
    pub fn new(collection: String) -> Self {
        Self {
            collection,
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// 按 ID 获取产品记录，不存在返回 NotFound
    pub async fn get(&self, id: &str) -> Result<Product, ApiError> {
        let records = self.records.read().await;
        records.get(id).cloned().ok_or_else(|| {
            ApiError::NotFound(format!("集合 {} 中不存在产品 {}", self.collection, id))
        })
    }

    /// 按 `productID` 插入或整体覆盖产品记录，幂等
    pub async fn put(&self, product: Product) {
        debug!("写入产品 {} 到集合 {}", product.product_id, self.collection);
        let mut records = self.records.write().await;
        records.insert(product.product_id.clone(), product);
    }

    /// 删除产品记录；目标不存在时不报错（尽力而为）
    pub async fn delete(&self, id: &str) {
        debug!("从集合 {} 删除产品 {}", self.collection, id);
        let mut records = self.records.write().await;
        records.remove(id);
    }

    /// 全量扫描当前集合，无序、无分页
    pub async fn scan(&self) -> ScanResult {
        let records = self.records.read().await;
        let items: Vec<Product> = records.values().cloned().collect();
        let count = items.len();
        ScanResult { items, count }
    }

    /// 当前记录数
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(id: &str) -> Product {
        Product {
            product_id: id.to_string(),
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
            available: true,
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = ProductStore::new("products".to_string());
        store.put(sample_product("p1")).await;

        let product = store.get("p1").await.unwrap();
        assert_eq!(product, sample_product("p1"));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = ProductStore::new("products".to_string());
        let err = store.get("nope").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn put_overwrites_existing_record() {
        let store = ProductStore::new("products".to_string());
        store.put(sample_product("p1")).await;

        let mut replacement = sample_product("p1");
        replacement.price = 9.99;
        store.put(replacement.clone()).await;

        assert_eq!(store.get("p1").await.unwrap(), replacement);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn delete_missing_is_best_effort() {
        let store = ProductStore::new("products".to_string());
        // 不存在的键删除不报错
        store.delete("nope").await;
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn scan_returns_everything() {
        let store = ProductStore::new("products".to_string());
        store.put(sample_product("p1")).await;
        store.put(sample_product("p2")).await;
        store.put(sample_product("p3")).await;

        let result = store.scan().await;
        assert_eq!(result.count, 3);
        assert_eq!(result.items.len(), 3);

        let mut ids: Vec<&str> = result.items.iter().map(|p| p.product_id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }
}

//! 产品数据模型与请求校验
//!
//! 校验在原始 JSON 值上逐字段进行并聚合全部错误，而不是依赖 serde
//! 反序列化在第一个错误处停止。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 产品记录，存储中的唯一实体
///
/// `productID` 由服务端生成，创建后不可变；其余四个字段在更新时整体替换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productID")]
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

/// 校验通过的产品字段集合，尚未分配标识符
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

impl ProductDraft {
    /// 附加标识符，生成完整产品记录
    pub fn into_product(self, product_id: String) -> Product {
        Product {
            product_id,
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
        }
    }
}

/// 产品列表响应
#[derive(Debug, Serialize)]
pub struct ListProductsResponse {
    pub items: Vec<Product>,
    pub count: usize,
}

/// 删除确认响应，回显被删除的记录
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub deleted: Product,
}

/// 校验任意 JSON 负载的产品字段
///
/// 不短路：四个字段全部检查，每个缺失或类型错误的字段产生一条消息。
/// 负载中多余的字段（包括调用方提供的 `productID`）被忽略。
pub fn validate_payload(payload: &Value) -> Result<ProductDraft, Vec<String>> {
    let mut errors = Vec::new();

    let name = expect_string(payload, "name", &mut errors);
    let description = expect_string(payload, "description", &mut errors);
    let price = expect_number(payload, "price", &mut errors);
    let available = expect_bool(payload, "available", &mut errors);

    match (name, description, price, available) {
        (Some(name), Some(description), Some(price), Some(available)) => Ok(ProductDraft {
            name,
            description,
            price,
            available,
        }),
        _ => Err(errors),
    }
}

fn expect_string(payload: &Value, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match payload.get(field) {
        None => {
            errors.push(format!("{}: required field is missing", field));
            None
        }
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(_) => {
            errors.push(format!("{}: must be a non-empty string", field));
            None
        }
    }
}

fn expect_number(payload: &Value, field: &str, errors: &mut Vec<String>) -> Option<f64> {
    match payload.get(field) {
        None => {
            errors.push(format!("{}: required field is missing", field));
            None
        }
        Some(value) => match value.as_f64() {
            Some(n) => Some(n),
            None => {
                errors.push(format!("{}: must be a number", field));
                None
            }
        },
    }
}

fn expect_bool(payload: &Value, field: &str, errors: &mut Vec<String>) -> Option<bool> {
    match payload.get(field) {
        None => {
            errors.push(format!("{}: required field is missing", field));
            None
        }
        Some(value) => match value.as_bool() {
            Some(b) => Some(b),
            None => {
                errors.push(format!("{}: must be a boolean", field));
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_payload_passes() {
        let payload = json!({
            "name": "Pen",
            "description": "Blue pen",
            "price": 1.5,
            "available": true
        });

        let draft = validate_payload(&payload).unwrap();
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.description, "Blue pen");
        assert_eq!(draft.price, 1.5);
        assert!(draft.available);
    }

    #[test]
    fn integer_price_is_accepted() {
        let payload = json!({
            "name": "Pen",
            "description": "Blue pen",
            "price": 2,
            "available": false
        });

        let draft = validate_payload(&payload).unwrap();
        assert_eq!(draft.price, 2.0);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let payload = json!({ "name": "Pen" });

        let errors = validate_payload(&payload).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.starts_with("description:")));
        assert!(errors.iter().any(|e| e.starts_with("price:")));
        assert!(errors.iter().any(|e| e.starts_with("available:")));
    }

    #[test]
    fn mistyped_fields_are_all_reported() {
        let payload = json!({
            "name": 42,
            "description": "",
            "price": "1.5",
            "available": "yes"
        });

        let errors = validate_payload(&payload).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn caller_supplied_product_id_is_ignored() {
        let payload = json!({
            "productID": "not-yours-to-pick",
            "name": "Pen",
            "description": "Blue pen",
            "price": 1.5,
            "available": true
        });

        // 校验只关心四个业务字段
        let draft = validate_payload(&payload).unwrap();
        let product = draft.into_product("server-id".to_string());
        assert_eq!(product.product_id, "server-id");
    }

    #[test]
    fn product_id_serializes_with_wire_name() {
        let product = Product {
            product_id: "abc".to_string(),
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
            available: true,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["productID"], "abc");
        assert!(value.get("product_id").is_none());
    }
}

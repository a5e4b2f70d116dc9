//! 产品信息数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// 产品信息文档
///
/// 相等性只看 `id`，其余字段不参与比较。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    /// 存储分配的标识，持久化之前为空
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    /// 精确十进制价格，序列化为字符串；数字形式的输入按原始文本解析，不经过 f64
    pub price: Decimal,
    /// 开放属性集合，值可以是任意 JSON
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl ProductInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            properties: HashMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// 已分配的标识；空字符串视为未分配
    pub fn assigned_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// 用补丁整体替换可变字段，`id` 保持不变
    ///
    /// `properties` 是整体替换而不是逐键合并：空的补丁属性会清空原有属性。
    pub fn merge_from(&mut self, patch: ProductInfo) {
        self.name = patch.name;
        self.description = patch.description;
        self.price = patch.price;
        self.properties = patch.properties;
    }
}

impl PartialEq for ProductInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ProductInfo {}

impl Hash for ProductInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

//! PVGIS 请求参数模型
//!
//! seriescalc 接口的参数由调用方决定，这里不做任何校验，
//! 只负责按插入顺序序列化为 URL 查询字符串

use serde::Serialize;

/// 单个查询参数值
///
/// 仅支持标量类型，序列化时输出裸值（如 `lat=45.0`、`peakpower=1`）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

/// 可无损转换为 i64 的整数类型
macro_rules! int_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(v: $t) -> Self {
                    ParamValue::Int(i64::from(v))
                }
            }
        )*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

/// 平台相关或更宽的整数：超出 i64 范围时以十进制字符串发送，线上表示不变
macro_rules! wide_int_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(v: $t) -> Self {
                    i64::try_from(v)
                        .map(ParamValue::Int)
                        .unwrap_or_else(|_| ParamValue::Str(v.to_string()))
                }
            }
        )*
    };
}

wide_int_param!(u64, usize, isize);

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// 按 f32 的最短十进制表示转换，避免 `0.1f32` 变成 `0.10000000149011612`
impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// seriescalc 查询参数
///
/// 有序的键值对列表，原样转发给 PVGIS。重复的键同样会原样保留
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryParameters(Vec<(String, ParamValue)>);

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个参数（链式调用）
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.push(key, value);
        self
    }

    /// 追加一个参数
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.0.push((key.into(), value.into()));
    }

    /// 按键查找第一个匹配的参数值
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 从原始查询字符串解析（所有值均作为字符串保留）
    pub fn from_query_string(query: &str) -> Self {
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), ParamValue::Str(v.into_owned())))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

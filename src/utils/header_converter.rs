//! Header格式转换工具
//! 响应头归一化为可检索文本，以及多值头的降维

use std::collections::HashMap;
use tracing::debug;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 将响应头合成单一检索串
    /// 键值全部转小写，按 "key: value" 拼接、单空格分隔；
    /// 键按字典序遍历，检索串与HashMap迭代顺序无关
    pub fn to_search_blob(headers: &HashMap<String, String>) -> String {
        let mut pairs: Vec<(String, String)> = headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
            .collect();
        pairs.sort();

        let blob = pairs
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(" ");

        debug!("Header检索串合成完成，{}条记录，{}字节", pairs.len(), blob.len());
        blob
    }

    /// 将HashMap<String, Vec<String>>降维为单值HashMap<String, String>
    /// 每个键取首个非空值
    pub fn to_single_value(hashmap: &HashMap<String, Vec<String>>) -> HashMap<String, String> {
        let mut single_map = HashMap::new();
        for (key, values) in hashmap {
            if let Some(first_val) = values.iter().find(|v| !v.is_empty()) {
                single_map.insert(key.clone(), first_val.clone());
            }
        }
        single_map
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_blob_lowercase_and_sorted() {
        // 测试场景：键值转小写，按键字典序拼接
        let mut headers = HashMap::new();
        headers.insert("Server".to_string(), "Cloudflare".to_string());
        headers.insert("CF-Ray".to_string(), "8A9B".to_string());

        let blob = HeaderConverter::to_search_blob(&headers);
        assert_eq!(blob, "cf-ray: 8a9b server: cloudflare");
    }

    #[test]
    fn test_search_blob_empty_headers() {
        // 测试场景：空头返回空串，不报错
        let blob = HeaderConverter::to_search_blob(&HashMap::new());
        assert!(blob.is_empty());
    }

    #[test]
    fn test_search_blob_deterministic() {
        // 测试场景：同一组头多次合成结果一致
        let mut headers = HashMap::new();
        for i in 0..16 {
            headers.insert(format!("x-header-{}", i), format!("v{}", i));
        }
        let first = HeaderConverter::to_search_blob(&headers);
        let second = HeaderConverter::to_search_blob(&headers);
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_single_value_picks_first_non_empty() {
        // 测试场景：多值头取首个非空值，全空键被丢弃
        let mut headers = HashMap::new();
        headers.insert(
            "set-cookie".to_string(),
            vec!["".to_string(), "session=1".to_string()],
        );
        headers.insert("x-empty".to_string(), vec!["".to_string()]);

        let single = HeaderConverter::to_single_value(&headers);
        assert_eq!(single.get("set-cookie").map(String::as_str), Some("session=1"));
        assert!(!single.contains_key("x-empty"));
    }
}

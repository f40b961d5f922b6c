//! 指纹目录索引
//! 面向"列出支持的指纹"能力的目录统计视图

use serde::{Deserialize, Serialize};

use super::catalog::{self, TECH_SIGNATURES};

/// 单个分类下的技术名称分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub technologies: Vec<String>,
}

/// 目录统计视图
/// by_category 按分类优先级表排序（有序映射的列表化表示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureIndex {
    pub total: usize,
    pub categories: usize,
    pub by_category: Vec<CategoryGroup>,
}

/// 构建目录统计视图
/// 分组内技术名称保持目录顺序，分组间按分类优先级升序
pub fn signature_index() -> SignatureIndex {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for entry in TECH_SIGNATURES {
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(group) => group.technologies.push(entry.name.to_string()),
            None => groups.push(CategoryGroup {
                category: entry.category.to_string(),
                technologies: vec![entry.name.to_string()],
            }),
        }
    }

    groups.sort_by_key(|g| catalog::category_priority(&g.category));

    SignatureIndex {
        total: TECH_SIGNATURES.len(),
        categories: groups.len(),
        by_category: groups,
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_totals() {
        // 测试场景：条目总数与目录一致，分类数与优先级表覆盖一致
        let index = signature_index();
        assert_eq!(index.total, TECH_SIGNATURES.len());
        assert_eq!(index.categories, 14);
        let grouped: usize = index.by_category.iter().map(|g| g.technologies.len()).sum();
        assert_eq!(grouped, index.total);
    }

    #[test]
    fn test_index_ordered_by_priority() {
        // 测试场景：分组顺序严格按分类优先级升序
        let index = signature_index();
        assert_eq!(index.by_category[0].category, "CRM");
        assert_eq!(index.by_category.last().unwrap().category, "Framework");

        let priorities: Vec<u32> = index
            .by_category
            .iter()
            .map(|g| catalog::category_priority(&g.category))
            .collect();
        assert!(priorities.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_index_group_keeps_catalog_order() {
        // 测试场景：分组内名称保持目录顺序（CRM组第一项为HubSpot）
        let index = signature_index();
        let crm = &index.by_category[0];
        assert_eq!(crm.technologies.first().map(String::as_str), Some("HubSpot"));
        assert_eq!(crm.technologies.len(), 6);
    }
}

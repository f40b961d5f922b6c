//! Tech stack detection and gap analysis demonstration for techgap
//! techgap 技术栈检测与缺口分析演示程序
//! 功能说明：
//! 1. 演示内置指纹目录的检测流程（HTML正文+响应头双维度）
//! 2. 展示汇总与商机缺口分析的组合报告输出
//! 3. 包含目录索引查询与结构化JSON结果输出
//!
//! 运行命令：
//! cargo run --example detect_demo

use std::collections::HashMap;
use std::error::Error;

use techgap::{analyze_page, report_to_pretty_json, signature_index};

/// 演示主函数
/// 执行流程：
/// 1. 初始化结构化日志系统
/// 2. 构造示例页面数据（HTML片段+响应头）
/// 3. 执行检测+汇总+缺口分析组合报告
/// 4. 输出格式化检测结果与目录统计
fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // ========== 2. 构造示例页面数据 ==========
    let sample_html = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <link rel="stylesheet" href="/wp-content/themes/storefront/style.css">
            <script src="https://cdn.shopify.com/s/files/1/0001/theme.js"></script>
            <script src="https://static.hotjar.com/c/hotjar-12345.js"></script>
            <script>window.intercomSettings = { app_id: "abc123" };</script>
        </head>
        <body><div id="root"></div></body>
        </html>
    "#;

    let mut sample_headers = HashMap::new();
    sample_headers.insert("Server".to_string(), "cloudflare".to_string());
    sample_headers.insert("CF-Ray".to_string(), "8a9b0c1d2e3f-SJC".to_string());
    sample_headers.insert("X-Shopify-Stage".to_string(), "production".to_string());

    // ========== 3. 执行组合分析 ==========
    let report = analyze_page(sample_html, &sample_headers);
    println!("✅ 检测完成 | 识别技术 {} 项，覆盖分类 {} 个，缺口评分 {}",
        report.tech_summary.total_detected,
        report.tech_summary.categories_found,
        report.gap_analysis.gap_score,
    );

    // ========== 4. 输出结构化结果 ==========
    println!("\n======================================= 分析报告 =======================================");
    println!("📊 组合报告（结构化JSON）:\n{}", report_to_pretty_json(&report)?);

    let index = signature_index();
    println!("\n📚 指纹目录：共 {} 项技术 / {} 个分类，优先级最高分类：{}",
        index.total,
        index.categories,
        index.by_category[0].category,
    );

    Ok(())
}

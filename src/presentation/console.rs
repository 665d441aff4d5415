// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::Write;

use crate::domain::models::company::VatInfo;
use crate::domain::models::ranked::RankedResults;

/// 以两列表格渲染分类结果：类别 | URL（每行一个）
pub fn render_ranked(title: &str, results: &RankedResults) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);

    if results.is_empty() {
        let _ = writeln!(out, "  (no results)");
        return out;
    }

    let width = results
        .iter()
        .map(|(category, _)| category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    let _ = writeln!(out, "  {:<width$}  URLs", "Category", width = width);
    let _ = writeln!(out, "  {}  {}", "-".repeat(width), "-".repeat(4));
    for (category, urls) in results.iter() {
        for (i, url) in urls.iter().enumerate() {
            let label = if i == 0 { category } else { "" };
            let _ = writeln!(out, "  {:<width$}  {}", label, url, width = width);
        }
    }
    let _ = writeln!(out, "  {} URLs in {} categories", results.total_urls(), results.len());
    out
}

/// 渲染 VAT 校验结果
pub fn render_vat(vat: &VatInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "VAT:      {}{}", vat.country_code, vat.vat_number);
    let status = match (&vat.error, vat.is_valid) {
        (Some(_), _) => "error",
        (None, true) => "valid",
        (None, false) => "invalid",
    };
    let _ = writeln!(out, "Status:   {}", status);
    if let Some(name) = &vat.company_name {
        let _ = writeln!(out, "Name:     {}", name);
    }
    if let Some(address) = &vat.company_address {
        let _ = writeln!(out, "Address:  {}", address.replace('\n', ", "));
    }
    if let Some(error) = &vat.error {
        let _ = writeln!(out, "Error:    {}", error);
    }
    out
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 输入不带国家代码时使用的默认国家
pub const DEFAULT_COUNTRY: &str = "IT";

/// 解析 VAT 输入，使用默认国家 `IT`
///
/// ```
/// use woosh::domain::vat::parse_vat_input;
///
/// assert_eq!(parse_vat_input("IT12345678901"), ("IT".to_string(), "12345678901".to_string()));
/// assert_eq!(parse_vat_input("12345678901"), ("IT".to_string(), "12345678901".to_string()));
/// ```
pub fn parse_vat_input(input: &str) -> (String, String) {
    parse_vat_input_with_default(input, DEFAULT_COUNTRY)
}

/// 解析 VAT 输入，提取国家代码与号码
///
/// 去除首尾空白和内部空格并转为大写；前两个字符都是字母时视为国家代码，
/// 否则使用 `default_country`。
pub fn parse_vat_input_with_default(input: &str, default_country: &str) -> (String, String) {
    let cleaned: String = input
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut chars = cleaned.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_alphabetic() && second.is_alphabetic() => {
            let country: String = [first, second].iter().collect();
            let number = cleaned[country.len()..].to_string();
            (country, number)
        }
        _ => (default_country.trim().to_uppercase(), cleaned),
    }
}

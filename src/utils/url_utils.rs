// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 提取 URL 的网络位置（`[用户信息@]主机[:端口]`）并转为小写
///
/// - 相对路径、无协议字符串和没有主机部分的 URL（如 `mailto:`）返回空串
/// - 端口号无效、IP 地址非法等真正的解析错误返回 `None`
///
/// 协议默认端口会被 `url` 归一化掉，`https://a.io:443/` 与 `https://a.io/` 得到同一结果。
pub fn network_location(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(String::new());
    }

    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(ParseError::RelativeUrlWithoutBase) | Err(ParseError::EmptyHost) => {
            return Some(String::new())
        }
        Err(_) => return None,
    };

    let Some(host) = parsed.host_str() else {
        return Some(String::new());
    };

    let mut netloc = String::new();
    if !parsed.username().is_empty() || parsed.password().is_some() {
        netloc.push_str(parsed.username());
        if let Some(password) = parsed.password() {
            netloc.push(':');
            netloc.push_str(password);
        }
        netloc.push('@');
    }
    netloc.push_str(host);
    if let Some(port) = parsed.port() {
        netloc.push(':');
        netloc.push_str(&port.to_string());
    }

    Some(netloc.to_lowercase())
}

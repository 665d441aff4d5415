// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 可剥离的前导子域名标签
const STRIPPABLE_LABELS: &[&str] = &[
    "www", "www1", "www2", "m", "mobile", "amp", "en", "it", "de", "fr", "es",
];

/// 计算去重使用的基础域名
///
/// 只检查最左侧的标签，最多剥离一次，并且剥离后至少保留两个标签，
/// 因此 `www.com` 这类两段式域名保持不变。空串或不含点的输入原样返回。
pub fn base_domain(host: &str) -> &str {
    match host.split_once('.') {
        Some((label, rest))
            if rest.split('.').count() >= 2
                && STRIPPABLE_LABELS
                    .iter()
                    .any(|prefix| prefix.eq_ignore_ascii_case(label)) =>
        {
            rest
        }
        _ => host,
    }
}

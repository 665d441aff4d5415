// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括域名归一化、URL 主机提取与遥测初始化
pub mod domain;
pub mod telemetry;
pub mod url_utils;

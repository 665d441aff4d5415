// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含用例实现、请求/响应 DTO 以及根据配置组装服务的上下文
pub mod context;
pub mod dto;
pub mod use_cases;

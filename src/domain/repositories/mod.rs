// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// - 结果仓库（result_repository）：保存查询结果的平面 JSON 转储
pub mod result_repository;

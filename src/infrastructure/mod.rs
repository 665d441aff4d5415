// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 缓存（cache）：进程内的排序结果缓存
/// - 搜索（search）：搜索引擎客户端
/// - 存储（storage）：结果文件的本地存储
/// - VIES（vies）：欧盟 VAT 校验服务客户端
///
/// 基础设施层依赖于领域层的抽象接口（`SearchEngine`、`VatChecker`、
/// `ResultRepository`），领域层不感知具体实现。
pub mod cache;
pub mod search;
pub mod storage;
pub mod vies;

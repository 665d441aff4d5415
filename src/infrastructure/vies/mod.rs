// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// VIES 集成
///
/// 欧盟 VAT 信息交换系统的 REST 客户端
pub mod client;

pub use client::ViesClient;

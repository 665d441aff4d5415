// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// VAT 领域模块
///
/// 包含 VAT 输入解析以及 VAT 校验协作方接口
pub mod checker;
pub mod parse;

pub use checker::{VatCheckResponse, VatChecker, VatError};
pub use parse::{parse_vat_input, parse_vat_input_with_default, DEFAULT_COUNTRY};

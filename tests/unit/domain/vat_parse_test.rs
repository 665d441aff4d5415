// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// VAT 输入解析测试模块

#[cfg(test)]
mod tests {
    use woosh::domain::vat::{parse_vat_input, parse_vat_input_with_default};

    #[test]
    fn test_parse_vat_inputs() {
        let cases = [
            ("IT00743110157", "IT", "00743110157"),
            ("00743110157", "IT", "00743110157"),
            ("it00743110157", "IT", "00743110157"),
            (" IT 007 431 101 57 ", "IT", "00743110157"),
            ("DE123456789", "DE", "123456789"),
            ("FR12345678901", "FR", "12345678901"),
            ("ES12345678", "ES", "12345678"),
            ("ATU12345678", "AT", "U12345678"),
        ];
        for (input, country, number) in cases {
            assert_eq!(
                parse_vat_input(input),
                (country.to_string(), number.to_string()),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_default_country_only_applies_without_prefix() {
        assert_eq!(
            parse_vat_input_with_default("DE123456789", "FR"),
            ("DE".to_string(), "123456789".to_string())
        );
        assert_eq!(
            parse_vat_input_with_default("123456789", "FR"),
            ("FR".to_string(), "123456789".to_string())
        );
    }
}

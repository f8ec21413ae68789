//! 问题源选择
//!
//! 根据注册号数字部分的奇偶性在两个问题地址之间做确定性选择，
//! 同一个注册号永远选到同一个问题源

use crate::config::Config;

/// 问题源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    /// 问题一（注册号为奇数）
    Question1,
    /// 问题二（注册号为偶数）
    Question2,
}

impl QuestionSource {
    /// 根据注册号选择问题源
    ///
    /// 只看注册号里的数字字符（保持原有顺序）：
    /// - 至少两位时，取末两位组成的两位数，奇数选问题一
    /// - 恰好一位时，按该位的奇偶
    /// - 一位都没有时，默认问题一
    pub fn from_reg_no(reg_no: &str) -> Self {
        if Self::reg_no_digits_odd(reg_no) {
            Self::Question1
        } else {
            Self::Question2
        }
    }

    /// 选中的问题地址
    pub fn url<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Self::Question1 => &config.question1_url,
            Self::Question2 => &config.question2_url,
        }
    }

    fn reg_no_digits_odd(reg_no: &str) -> bool {
        let digits: Vec<u32> = reg_no.chars().filter_map(|c| c.to_digit(10)).collect();
        match digits.as_slice() {
            [] => true,
            [single] => single % 2 == 1,
            [.., tens, ones] => (tens * 10 + ones) % 2 == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_two_digits_odd_selects_question1() {
        assert_eq!(QuestionSource::from_reg_no("REG12723"), QuestionSource::Question1);
        assert_eq!(QuestionSource::from_reg_no("ABCD23"), QuestionSource::Question1);
        assert_eq!(QuestionSource::from_reg_no("1x2y3"), QuestionSource::Question1);
    }

    #[test]
    fn test_last_two_digits_even_selects_question2() {
        assert_eq!(QuestionSource::from_reg_no("REG12724"), QuestionSource::Question2);
        assert_eq!(QuestionSource::from_reg_no("ABCD24"), QuestionSource::Question2);
        assert_eq!(QuestionSource::from_reg_no("100"), QuestionSource::Question2);
    }

    #[test]
    fn test_single_digit_uses_its_own_parity() {
        assert_eq!(QuestionSource::from_reg_no("7"), QuestionSource::Question1);
        assert_eq!(QuestionSource::from_reg_no("8"), QuestionSource::Question2);
        assert_eq!(QuestionSource::from_reg_no("X7Y"), QuestionSource::Question1);
    }

    #[test]
    fn test_no_digits_defaults_to_question1() {
        assert_eq!(QuestionSource::from_reg_no("ABCDEF"), QuestionSource::Question1);
        assert_eq!(QuestionSource::from_reg_no(""), QuestionSource::Question1);
    }

    #[test]
    fn test_selection_is_deterministic() {
        for _ in 0..10 {
            assert_eq!(QuestionSource::from_reg_no("REG12723"), QuestionSource::Question1);
        }
    }

    #[test]
    fn test_url_maps_onto_configured_pair() {
        let config = Config {
            question1_url: "https://q/odd".to_string(),
            question2_url: "https://q/even".to_string(),
            ..Config::default()
        };
        assert_eq!(QuestionSource::Question1.url(&config), "https://q/odd");
        assert_eq!(QuestionSource::Question2.url(&config), "https://q/even");
    }
}

//! 数字验证码生成

use rand::Rng;

/// 生成指定长度的数字验证码
pub fn generate_numeric_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10) as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        assert_eq!(generate_numeric_code(6).len(), 6);
        assert_eq!(generate_numeric_code(8).len(), 8);
    }

    #[test]
    fn test_code_is_numeric() {
        let code = generate_numeric_code(6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}

//! Weighted mod-11 check digit shared by CPF and CNPJ.

/// Compute one verification digit for `digits`, starting at `weight`.
///
/// Each digit is multiplied by the current weight, which decreases by one
/// per position and wraps back to 9 once it would drop below 2. With
/// `r = sum mod 11`, the result is `'0'` when `r < 2` and `11 - r` otherwise.
///
/// The caller is expected to pass ASCII digits only; any other character
/// contributes zero to the sum.
///
/// ```
/// use cpfcnpj::check_digit;
///
/// assert_eq!(check_digit("111444777", 10), '3');
/// assert_eq!(check_digit("1114447773", 11), '5');
/// ```
pub fn check_digit(digits: &str, weight: u32) -> char {
    let mut weight = weight;
    let mut sum = 0u32;
    for c in digits.chars() {
        let value = c.to_digit(10).unwrap_or(0);
        sum = (sum + value * (weight % 11)) % 11;
        weight = weight.saturating_sub(1);
        if weight < 2 {
            weight = 9;
        }
    }

    if sum < 2 {
        '0'
    } else {
        char::from_digit(11 - sum, 10).unwrap_or('0')
    }
}

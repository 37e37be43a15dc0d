//! Number predicates.
//!
//! Policy for negative inputs: they are never prime, never perfect, and never
//! Armstrong numbers. The digit sum is taken over the absolute value.

/// Returns true when `n` is prime.
///
/// Trial division by odd candidates up to `floor(sqrt(n))`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let n = n as u64;
    let mut i: u64 = 3;
    // i stays below 2^32 for any n < 2^63, so i * i cannot overflow.
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Returns true when `n` equals the sum of its proper divisors.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let n = n as u64;
    // 1 divides everything; start from 2 so it is not added twice.
    let mut sum: u64 = 1;
    let mut i: u64 = 2;
    while i * i <= n {
        if n % i == 0 {
            let pair = n / i;
            sum += i;
            if pair != i {
                sum += pair;
            }
            if sum > n {
                return false;
            }
        }
        i += 1;
    }
    sum == n
}

/// Returns true when `n` equals the sum of its digits, each raised to the
/// power of the digit count.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let digits = digits(n.unsigned_abs());
    let power = digits.len() as u32;
    // 19 nines raised to the 19th overflow u64.
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();
    sum == n as u128
}

/// Sum of the decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u64 {
    digits(n.unsigned_abs()).iter().map(|&d| d as u64).sum()
}

/// Parity tag for `n`.
pub fn parity(n: i64) -> &'static str {
    if n % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

/// Decimal digits of `n`, most significant first. Zero has a single digit.
fn digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_is_prime(n: i64) -> bool {
        n > 1 && (2..n).all(|d| n % d != 0)
    }

    // ============================================================================
    // is_prime tests
    // ============================================================================

    #[test]
    fn test_is_prime_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(97));
    }

    #[test]
    fn test_is_prime_matches_naive_definition() {
        for n in -50..2000 {
            assert_eq!(is_prime(n), naive_is_prime(n), "mismatch for {n}");
        }
    }

    #[test]
    fn test_is_prime_odd_squares() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(1_000_003 * 1_000_003));
    }

    #[test]
    fn test_is_prime_negative_never_prime() {
        assert!(!is_prime(-2));
        assert!(!is_prime(-7));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_is_prime_large() {
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(i64::MAX));
    }

    // ============================================================================
    // is_perfect tests
    // ============================================================================

    #[test]
    fn test_is_perfect_known_values() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(is_perfect(8128));
        assert!(is_perfect(33_550_336));
    }

    #[test]
    fn test_is_perfect_rejects_non_perfect() {
        assert!(!is_perfect(1));
        assert!(!is_perfect(12));
        assert!(!is_perfect(16));
        assert!(!is_perfect(97));
    }

    #[test]
    fn test_is_perfect_non_positive() {
        for n in -100..=0 {
            assert!(!is_perfect(n), "{n} should not be perfect");
        }
    }

    // ============================================================================
    // is_armstrong tests
    // ============================================================================

    #[test]
    fn test_is_armstrong_known_values() {
        assert!(is_armstrong(153));
        assert!(is_armstrong(370));
        assert!(is_armstrong(371));
        assert!(is_armstrong(407));
        assert!(is_armstrong(9474));
    }

    #[test]
    fn test_is_armstrong_single_digits() {
        for n in 0..10 {
            assert!(is_armstrong(n), "{n} should be armstrong");
        }
    }

    #[test]
    fn test_is_armstrong_rejects() {
        assert!(!is_armstrong(10));
        assert!(!is_armstrong(154));
        assert!(!is_armstrong(-153));
        assert!(!is_armstrong(i64::MAX));
    }

    // ============================================================================
    // digit_sum and parity tests
    // ============================================================================

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(371), 11);
        assert_eq!(digit_sum(-123), 6);
        assert_eq!(digit_sum(i64::MIN), 89);
    }

    #[test]
    fn test_parity() {
        assert_eq!(parity(0), "even");
        assert_eq!(parity(7), "odd");
        assert_eq!(parity(-3), "odd");
        assert_eq!(parity(-4), "even");
    }
}

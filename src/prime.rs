/// Returns `true` if `n` is prime.
///
/// Small cases and multiples of 2 and 3 are settled directly, the remaining candidates are tested
/// against divisors of the form `6k ± 1` up to `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    if n <= 3 {
        return true;
    }

    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // `d <= n / d` is `d * d <= n` without the overflow close to `i64::MAX`.
    let mut d = 5;
    while d <= n / d {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }

    true
}

/// Collects the primes of `v` in input order, duplicates included.
pub fn find_primes(v: &[i64]) -> Vec<i64> {
    v.iter().copied().filter(|&n| is_prime(n)).collect()
}

pub fn count_primes(v: &[i64]) -> usize {
    v.iter().filter(|&&n| is_prime(n)).count()
}

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// characteristics at construction, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Greatest common divisor of two integers.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// `base^exp`, or `None` on overflow.
pub fn checked_pow(base: u64, exp: usize) -> Option<u64> {
    let mut result: u64 = 1;
    for _ in 0..exp {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

/// All positive divisors of `n` in increasing order. Empty for `n = 0`.
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();

    let mut d = 1;
    while d <= n / d {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }

    small.extend(large.into_iter().rev());
    small
}

/// Euler's totient: the number of `1 <= k <= n` coprime to `n`.
pub fn euler_phi(n: u64) -> u64 {
    let mut result = n;
    let mut m = n;
    let mut d = 2;

    while d <= m / d {
        if m % d == 0 {
            while m % d == 0 {
                m /= d;
            }
            result -= result / d;
        }
        d += 1;
    }

    if m > 1 {
        result -= result / m;
    }
    result
}

/// Multiplicative order of `a` modulo `n`: the least `k >= 1` with `a^k ≡ 1 (mod n)`.
///
/// Computed by iterated multiplication, capped at `n` steps. Returns `None` if
/// `n = 0` or no such `k` exists within the cap (i.e. `gcd(a, n) != 1`).
pub fn multiplicative_order_mod(a: u64, n: u64) -> Option<u64> {
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(1);
    }

    let base = u128::from(a % n);
    let modulus = u128::from(n);
    let mut acc = base;
    for k in 1..=n {
        if acc == 1 {
            return Some(k);
        }
        acc = acc * base % modulus;
    }
    None
}

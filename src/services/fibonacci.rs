/// nth term of the Fibonacci sequence with F(0) = 0 and F(1) = 1.
///
/// Non-positive `n` yields `Some(0)`. Returns `None` once the term no longer
/// fits in a `u64` (n > 93).
pub fn fibonacci(n: i64) -> Option<u64> {
    if n <= 0 {
        return Some(0);
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

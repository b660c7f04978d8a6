/// Ascending prime capacities for table growth.
pub(crate) const GROWTH_PRIMES: [usize; 28] = [
    13, 23, 53, 97, 193, 389, 769, 1543, 3079, 6151, 12289, 24593, 49157, 98317, 196613, 393241,
    786433, 1572869, 3145739, 6291469, 12582917, 25165843, 50331653, 100663319, 201326611,
    402653189, 805306457, 1610612741,
];

/// Starting bucket count for `Dict::new`
pub(crate) const DEFAULT_CAPACITY: usize = 97;

/// Returns the smallest growth capacity strictly greater than `2 * count`.
///
/// Once the prime sequence is exhausted the last prime is doubled until it
/// clears the bound, so growth never stalls.
pub(crate) fn next_capacity(count: usize) -> usize {
    let floor = 2 * count;
    for &prime in GROWTH_PRIMES.iter() {
        if prime > floor {
            return prime;
        }
    }

    let mut cap = GROWTH_PRIMES[GROWTH_PRIMES.len() - 1];
    while cap <= floor {
        cap *= 2;
    }
    cap
}

/// Whether `cap` is a capacity the growth sequence could ever produce
pub(crate) fn is_growth_capacity(cap: usize) -> bool {
    GROWTH_PRIMES.contains(&cap)
}

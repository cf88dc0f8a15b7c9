use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

/// A pair of hash and equality functions used to place and find values.
///
/// The set never inspects values other than through a strategy, so any key
/// type can be stored as long as a strategy exists for it. `hash` must be a
/// deterministic, pure function of the value, and values that are `eq` must
/// hash identically.
pub trait HashStrategy<T: ?Sized> {
    /// Hashes a value. Only the low bits are used to pick the home slot.
    fn hash(&self, value: &T) -> u64;

    /// Returns `true` if `a` and `b` are the same set member.
    fn eq(&self, a: &T, b: &T) -> bool;
}

/// A strategy built from a hash function and an equality function.
///
/// # Examples
///
/// ```rust
/// use probe_set::strategy::FnStrategy;
/// use probe_set::strategy::HashStrategy;
///
/// fn wang(key: &u32) -> u64 {
///     let mut a = *key;
///     a = (a ^ 61) ^ (a >> 16);
///     a = a.wrapping_add(a << 3);
///     a ^= a >> 4;
///     a = a.wrapping_mul(0x27d4_eb2d);
///     (a ^ (a >> 15)) as u64
/// }
///
/// let strategy = FnStrategy::new(wang, |a: &u32, b: &u32| a == b);
/// assert_eq!(strategy.hash(&69), strategy.hash(&69));
/// assert!(strategy.eq(&1, &1));
/// ```
#[derive(Clone, Copy)]
pub struct FnStrategy<H, E> {
    hash: H,
    eq: E,
}

impl<H, E> FnStrategy<H, E> {
    /// Creates a strategy from a hash function and an equality function.
    pub const fn new(hash: H, eq: E) -> Self {
        Self { hash, eq }
    }
}

impl<H, E> Debug for FnStrategy<H, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnStrategy").finish_non_exhaustive()
    }
}

impl<T, H, E> HashStrategy<T> for FnStrategy<H, E>
where
    T: ?Sized,
    H: Fn(&T) -> u64,
    E: Fn(&T, &T) -> bool,
{
    #[inline]
    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }

    #[inline]
    fn eq(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }
}

/// A strategy for `Hash + Eq` types backed by a [`BuildHasher`].
#[derive(Clone, Debug, Default)]
pub struct BuildHasherStrategy<B> {
    build_hasher: B,
}

impl<B> BuildHasherStrategy<B> {
    /// Wraps a hasher builder.
    pub const fn new(build_hasher: B) -> Self {
        Self { build_hasher }
    }

    /// Returns the wrapped hasher builder.
    pub fn hasher(&self) -> &B {
        &self.build_hasher
    }
}

impl<T, B> HashStrategy<T> for BuildHasherStrategy<B>
where
    T: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    #[inline]
    fn hash(&self, value: &T) -> u64 {
        self.build_hasher.hash_one(value)
    }

    #[inline]
    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Hasher builder used by [`DefaultStrategy`].
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// Hasher builder used by [`DefaultStrategy`].
        pub type DefaultHashBuilder = std::hash::RandomState;
    }
}

/// Strategy used by [`OpenAddressingSet::new`](crate::OpenAddressingSet::new)
/// when no other strategy is named.
#[cfg(any(feature = "foldhash", feature = "std"))]
pub type DefaultStrategy = BuildHasherStrategy<DefaultHashBuilder>;

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::string::ToString;

    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone, Default)]
    struct FixedSip;

    impl BuildHasher for FixedSip {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(7, 11)
        }
    }

    #[test]
    fn fn_strategy_forwards_to_closures() {
        let strategy = FnStrategy::new(|v: &u64| v.rotate_left(7), |a: &u64, b: &u64| a == b);
        assert_eq!(strategy.hash(&1), 1u64 << 7);
        assert!(strategy.eq(&5, &5));
        assert!(!strategy.eq(&5, &6));
    }

    #[test]
    fn fn_strategy_unsized_keys() {
        fn djb2(s: &str) -> u64 {
            s.bytes()
                .fold(5381u64, |h, c| h.wrapping_mul(33).wrapping_add(c as u64))
        }

        let strategy = FnStrategy::new(djb2, |a: &str, b: &str| a.eq_ignore_ascii_case(b));
        assert_eq!(strategy.hash("abc"), djb2("abc"));
        assert!(strategy.eq("Hello", "hELLO"));
    }

    #[test]
    fn build_hasher_strategy_is_deterministic() {
        let strategy = BuildHasherStrategy::new(FixedSip);
        let key = "key".to_string();
        assert_eq!(
            HashStrategy::<String>::hash(&strategy, &key),
            HashStrategy::<String>::hash(&strategy, &key.clone())
        );
        assert!(HashStrategy::<String>::eq(&strategy, &key, &"key".to_string()));
        assert!(!HashStrategy::<String>::eq(&strategy, &key, &String::new()));
    }

    #[test]
    fn build_hasher_strategy_matches_hash_one() {
        let strategy = BuildHasherStrategy::new(FixedSip);
        assert_eq!(
            HashStrategy::<u32>::hash(&strategy, &42),
            FixedSip.hash_one(42u32)
        );
        assert_eq!(
            HashStrategy::<u32>::hash(&strategy, &42),
            strategy.hasher().hash_one(&42u32)
        );
    }
}

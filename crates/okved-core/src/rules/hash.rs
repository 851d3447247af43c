//! Stable string hashing for fallback selection.
//!
//! 64-bit FNV-1a over the UTF-8 bytes of the input. The result must not
//! change between releases or platforms: the same phone has to land on the
//! same fallback entry every time.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub fn fnv1a_64(value: &str) -> u64 {
    value.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

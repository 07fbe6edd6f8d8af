//! HASH: the byte-folding hash that picks a lens box.

/// Number of distinct hash values, and of lens boxes.
pub const BOX_COUNT: usize = 256;

/// Holiday ASCII string helper: for each byte, add it, multiply by 17, and
/// keep the low eight bits.
#[inline]
pub fn hash(s: &str) -> u8 {
    s.bytes()
        .fold(0u8, |acc, b| acc.wrapping_add(b).wrapping_mul(17))
}

#[cfg(test)]
mod tests {
    use super::hash;

    #[test]
    fn hashes_reference_word() {
        assert_eq!(hash("HASH"), 52);
    }

    #[test]
    fn hashes_labels_to_their_boxes() {
        assert_eq!(hash("rn"), 0);
        assert_eq!(hash("cm"), 0);
        assert_eq!(hash("qp"), 1);
        assert_eq!(hash("pc"), 3);
        assert_eq!(hash("ot"), 3);
        assert_eq!(hash("ab"), 3);
    }

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(hash(""), 0);
    }
}

//! Pure per-field validation predicates.
//!
//! # Responsibility
//! - Answer "is this field value acceptable" with no side effects.
//! - Stay ignorant of storage; uniqueness of `id` is a repository concern.
//!
//! Callers (prompt loops, service entry points) retry on `false` rather
//! than receiving an error value.

/// Maximum length of a student id in characters.
pub const MAX_ID_LEN: usize = 50;
/// Maximum length of a student name in characters.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum length of a student address in characters.
pub const MAX_ADDRESS_LEN: usize = 200;
/// Inclusive age range accepted for a student record.
pub const AGE_RANGE: std::ops::RangeInclusive<i32> = 1..=150;

/// Returns whether `id` is non-blank after trimming and at most 50 chars.
pub fn is_valid_id(id: &str) -> bool {
    !id.trim().is_empty() && id.chars().count() <= MAX_ID_LEN
}

/// Returns whether `name` is non-blank after trimming and at most 100 chars.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= MAX_NAME_LEN
}

/// Returns whether `age` lies in the inclusive range 1..=150.
pub fn is_valid_age(age: i32) -> bool {
    AGE_RANGE.contains(&age)
}

/// Returns whether `address` is non-blank after trimming and at most 200 chars.
pub fn is_valid_address(address: &str) -> bool {
    !address.trim().is_empty() && address.chars().count() <= MAX_ADDRESS_LEN
}

#[cfg(test)]
mod tests {
    use super::{is_valid_address, is_valid_age, is_valid_id, is_valid_name};

    #[test]
    fn age_boundaries() {
        assert!(!is_valid_age(0));
        assert!(is_valid_age(1));
        assert!(is_valid_age(150));
        assert!(!is_valid_age(151));
        assert!(!is_valid_age(-7));
    }

    #[test]
    fn id_rejects_blank_and_overlong() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("   "));
        assert!(!is_valid_id("\t\n"));
        assert!(!is_valid_id(&"x".repeat(51)));
        assert!(is_valid_id(&"x".repeat(50)));
        assert!(is_valid_id("s-001"));
    }

    #[test]
    fn name_and_address_limits() {
        assert!(!is_valid_name(" "));
        assert!(is_valid_name(&"n".repeat(100)));
        assert!(!is_valid_name(&"n".repeat(101)));

        assert!(!is_valid_address(""));
        assert!(is_valid_address(&"a".repeat(200)));
        assert!(!is_valid_address(&"a".repeat(201)));
    }

    #[test]
    fn predicates_count_characters_not_bytes() {
        // 50 multibyte characters are within the id limit even though the
        // byte length exceeds it.
        let id = "学".repeat(50);
        assert!(is_valid_id(&id));
        assert!(!is_valid_id(&"学".repeat(51)));
    }
}

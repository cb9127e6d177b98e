/*!
 * Serde Helpers
 * Helper functions for compact serialization
 */

/// Skip serializing if value is zero
pub fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

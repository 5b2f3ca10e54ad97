// Canonical form used for access code matching.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

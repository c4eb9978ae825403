//! Form field validation rules.

/// Ordered map of field name to error message.
///
/// Forms keep one instance and clear a field's entry as soon as the user
/// edits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any previous one for the field.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.clear(field);
        self.entries.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn clear(&mut self, field: &str) {
        self.entries.retain(|(name, _)| *name != field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, msg)| (*name, msg.as_str()))
    }

    /// Insert `message` when `value` is blank. Returns true if it was blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, message);
            true
        } else {
            false
        }
    }
}

/// Check an email address: `local@domain.tld`, no whitespace, exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs a dot with something on both sides of it
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check a Cameroonian mobile number: optional `+237`, then nine digits
/// starting with 6, 7, 8 or 9. Whitespace is ignored.
pub fn is_valid_cameroon_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let local = compact.strip_prefix("+237").unwrap_or(&compact);

    local.len() == 9
        && local.chars().all(|c| c.is_ascii_digit())
        && matches!(local.as_bytes()[0], b'6'..=b'9')
}

/// Password strength score from 0 to 4.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|ok| **ok).count() as u8
}

/// Label for a password strength score.
pub fn password_strength_label(strength: u8) -> &'static str {
    match strength {
        1 => "Faible",
        2 => "Moyen",
        3 => "Bon",
        4 => "Fort",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_basic_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jean.dupont@maat.com"));
        assert!(is_valid_email("a@b.c."));
        assert!(is_valid_email("a@b.."));
        assert!(is_valid_email("a@mail.maat.cm"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_accepts_cameroon_numbers() {
        assert!(is_valid_cameroon_phone("+237677000000"));
        assert!(is_valid_cameroon_phone("677000000"));
        assert!(is_valid_cameroon_phone("+237 6 77 00 00 00"));
        assert!(is_valid_cameroon_phone("912345678"));
    }

    #[test]
    fn test_phone_rejects_other_numbers() {
        assert!(!is_valid_cameroon_phone("577000000"));
        assert!(!is_valid_cameroon_phone("67700000"));
        assert!(!is_valid_cameroon_phone("6770000000"));
        assert!(!is_valid_cameroon_phone("+33612345678"));
        assert!(!is_valid_cameroon_phone("+23767700000a"));
        assert!(!is_valid_cameroon_phone(""));
    }

    #[test]
    fn test_password_strength_scores() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdefgh"), 1);
        assert_eq!(password_strength("Abcdefgh"), 2);
        assert_eq!(password_strength("Abcdefg1"), 3);
        assert_eq!(password_strength("Abcdef1!"), 4);
        assert_eq!(password_strength_label(4), "Fort");
        assert_eq!(password_strength_label(0), "");
    }

    #[test]
    fn test_field_errors_replace_and_clear() {
        let mut errors = FieldErrors::new();
        assert!(errors.require("email", "  ", "L'email est requis"));
        assert!(!errors.require("name", "Alice", "Le nom est requis"));
        errors.insert("email", "Format d'email invalide");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Format d'email invalide"));

        errors.clear("email");
        assert!(errors.is_empty());
    }
}

use crate::models::SessionRecord;

// The single admin account, embedded verbatim from the original site. This is
// not a security boundary: the route guard is the only thing keeping visitors
// out of the admin panel, and the backend is never told about login state.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

fn admin_record() -> SessionRecord {
    SessionRecord {
        id: "1".to_string(),
        username: ADMIN_USERNAME.to_string(),
        email: "admin@nowestinterior.com".to_string(),
    }
}

/// Check submitted credentials against the one known account.
///
/// Pure and side-effect free. Both fields must match exactly
/// (case-sensitive); a mismatch is a `None`, never an error.
pub fn verify(username: &str, password: &str) -> Option<SessionRecord> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Some(admin_record())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_fixed_pair() {
        let record = verify("admin", "admin123").expect("fixed pair must verify");
        assert_eq!(record.id, "1");
        assert_eq!(record.username, "admin");
        assert_eq!(record.email, "admin@nowestinterior.com");
    }

    #[test]
    fn rejects_everything_else() {
        assert!(verify("admin", "admin124").is_none());
        assert!(verify("Admin", "admin123").is_none());
        assert!(verify("admin", "ADMIN123").is_none());
        assert!(verify("", "").is_none());
        assert!(verify("admin", "").is_none());
        assert!(verify("", "admin123").is_none());
    }
}

//! Contact-specific store operations

use crate::models::Contact;

use super::store::RecordStore;

/// Store of contacts backed by contacts.json
pub type ContactRepository = RecordStore<Contact>;

impl RecordStore<Contact> {
    /// Contacts whose name contains `query` (ignoring case) or whose phone
    /// contains it verbatim
    pub fn find_by_text(&self, query: &str) -> Vec<&Contact> {
        self.list_where(|contact| contact.matches_text(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactFields;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ContactRepository) {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = ContactRepository::open(temp_dir.path().join("contacts.json")).unwrap();
        repo.create(ContactFields::new("Anna Smith", "+1 555-0100", "anna@example.com"))
            .unwrap();
        repo.create(ContactFields::new("Bob Stone", "+44 20 7946", "bob@example.com"))
            .unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        let found = repo.find_by_text("ANNA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Anna Smith");
    }

    #[test]
    fn test_find_by_phone_fragment() {
        let (_temp_dir, repo) = create_test_repo();
        let found = repo.find_by_text("7946");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bob Stone");
    }

    #[test]
    fn test_find_matches_several() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.find_by_text("s").len(), 2);
    }

    #[test]
    fn test_find_nothing() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.find_by_text("zzz").is_empty());
    }
}

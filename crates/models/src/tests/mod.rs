

/// Live-database tests only run when `DATABASE_URL` is set and `SKIP_DB_TESTS` is not.
pub(crate) fn db_tests_enabled() -> bool {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return false;
    }
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip db tests");
        return false;
    }
    true
}

mod validation_tests {
    use crate::errors::ModelError;
    use crate::teacher::{self, EMAIL_MAX_LEN, NAME_MAX_LEN};

    #[test]
    fn name_rejects_blank() {
        let err = teacher::validate_name("first_name", "   ").unwrap_err();
        assert!(matches!(err, ModelError::Validation(ref m) if m == "first_name is required"));
    }

    #[test]
    fn name_rejects_overlong() {
        let long = "x".repeat(NAME_MAX_LEN + 1);
        assert!(teacher::validate_name("last_name", &long).is_err());
        assert!(teacher::validate_name("last_name", &long[..NAME_MAX_LEN]).is_ok());
    }

    #[test]
    fn middle_initial_maps_to_single_char_string() {
        assert_eq!(teacher::validate_middle_initial(Some('Q')).unwrap(), Some("Q".to_string()));
        assert_eq!(teacher::validate_middle_initial(None).unwrap(), None);
        assert!(teacher::validate_middle_initial(Some(' ')).is_err());
        assert!(teacher::validate_middle_initial(Some('\0')).is_err());
    }

    #[test]
    fn email_is_optional_but_bounded() {
        assert!(teacher::validate_email(None).is_ok());
        assert!(teacher::validate_email(Some("ada@example.com")).is_ok());
        let long = "e".repeat(EMAIL_MAX_LEN + 1);
        assert!(teacher::validate_email(Some(&long)).is_err());
    }

    #[test]
    fn middle_initial_char_reads_first_char() {
        let m = teacher::Model {
            id: uuid::Uuid::new_v4(),
            first_name: "Ada".into(),
            middle_initial: Some("Bx".into()),
            last_name: "Lovelace".into(),
            email: None,
        };
        assert_eq!(m.middle_initial_char(), Some('B'));
        let none = teacher::Model { middle_initial: None, ..m };
        assert_eq!(none.middle_initial_char(), None);
    }

    #[test]
    fn entity_maps_to_teacher_table() {
        use sea_orm::{DbBackend, EntityTrait, QueryTrait};
        let sql = teacher::Entity::find().build(DbBackend::Postgres).to_string();
        assert!(sql.contains(r#"FROM "teacher""#), "{sql}");
        assert!(sql.contains(r#""teacher"."middle_initial""#), "{sql}");
    }
}

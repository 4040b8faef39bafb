use medi_gate::{validate_email, GateError, SessionContext, SessionGate, ValidationError};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn short_passwords_are_always_rejected(
        name in ".{0,12}",
        email in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}",
        password in ".{0,7}",
    ) {
        let gate = SessionGate::in_memory();
        let result = gate.register(&name, &email, &password);
        prop_assert!(result.is_err());
        prop_assert!(gate.store().list_emails().unwrap().is_empty());
    }

    #[test]
    fn addresses_without_at_sign_fail_both_forms(email in "[a-z0-9._+-]{0,20}") {
        let gate = SessionGate::in_memory();
        let err = gate.register("Ann", &email, "password1").unwrap_err();
        prop_assert!(matches!(err, GateError::Validation(ValidationError::InvalidEmail)));

        let mut session = SessionContext::new();
        let err = gate.login(&mut session, "Ann", &email, "password1").unwrap_err();
        prop_assert!(matches!(err, GateError::Validation(ValidationError::InvalidEmail)));
        prop_assert!(!session.is_authenticated());
    }

    #[test]
    fn addresses_without_dotted_domain_are_invalid(
        local in "[a-z0-9]{1,8}",
        domain in "[a-z0-9-]{1,8}",
    ) {
        let email = format!("{local}@{domain}");
        prop_assert_eq!(validate_email(&email), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn wrong_password_never_authenticates(
        name in ".{0,12}",
        wrong in "[a-zA-Z0-9]{8,16}",
    ) {
        prop_assume!(wrong != "password1");
        let gate = SessionGate::in_memory();
        gate.register("Ann", "ann@gmail.com", "password1").unwrap();

        let mut session = SessionContext::new();
        let result = gate.login(&mut session, &name, "ann@gmail.com", &wrong);
        prop_assert!(result.is_err());
        prop_assert!(!session.is_authenticated());
    }
}

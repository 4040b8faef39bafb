use medi_gate::{
    FileUserStore, GateError, SessionContext, SessionGate, SessionState, UserStore,
    ValidationError,
};

#[test]
fn ann_signs_up_and_logs_in() {
    let gate = SessionGate::in_memory();
    gate.register("Ann", "ann@gmail.com", "password1")
        .expect("sign up");

    let mut session = SessionContext::new();
    gate.login(&mut session, "Ann", "ann@gmail.com", "password1")
        .expect("login");

    assert!(session.is_authenticated());
    assert_eq!(session.user_name(), Some("Ann"));
}

#[test]
fn duplicate_registration_leaves_original_record() {
    let gate = SessionGate::in_memory();
    let original = gate
        .register("Ann", "ann@gmail.com", "password1")
        .unwrap();

    let err = gate
        .register("Someone Else", "ann@gmail.com", "different-password")
        .unwrap_err();
    assert!(matches!(err, GateError::DuplicateEmail(ref e) if e == "ann@gmail.com"));
    assert_eq!(err.to_string(), "Email is already registered.");

    let stored = gate.store().get("ann@gmail.com").unwrap().unwrap();
    assert_eq!(stored, original);

    // the first password still works, the second never does
    let mut session = SessionContext::new();
    assert!(matches!(
        gate.login(&mut session, "Ann", "ann@gmail.com", "different-password"),
        Err(GateError::WrongPassword)
    ));
    gate.login(&mut session, "Ann", "ann@gmail.com", "password1")
        .unwrap();
}

#[test]
fn validation_messages_match_form_copy() {
    let gate = SessionGate::in_memory();
    let cases = [
        ("", "ann@gmail.com", "password1", "Please enter your name."),
        ("Ann", "ann.gmail.com", "password1", "Please enter a valid email address."),
        (
            "Ann",
            "ann@gmail.com",
            "short",
            "Password must be at least 8 characters long.",
        ),
    ];
    for (name, email, password, message) in cases {
        let err = gate.register(name, email, password).unwrap_err();
        assert!(matches!(err, GateError::Validation(_)));
        assert_eq!(err.to_string(), message);
    }
    assert!(gate.store().list_emails().unwrap().is_empty());
}

#[test]
fn login_validates_before_lookup() {
    let gate = SessionGate::in_memory();
    let mut session = SessionContext::new();
    let err = gate
        .login(&mut session, "Ann", "not-an-email", "password1")
        .unwrap_err();
    assert!(matches!(
        err,
        GateError::Validation(ValidationError::InvalidEmail)
    ));
    assert_eq!(session.state(), &SessionState::Anonymous);
}

#[test]
fn file_store_survives_gate_restart() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let dir = tmp.path().join("users");

    {
        let gate = SessionGate::with_store(Box::new(FileUserStore::new(&dir).unwrap()));
        gate.register("Ann", "ann@gmail.com", "password1").unwrap();
    }

    let gate = SessionGate::with_store(Box::new(FileUserStore::new(&dir).unwrap()));
    assert_eq!(
        gate.store().list_emails().unwrap(),
        vec!["ann@gmail.com".to_string()]
    );
    assert!(matches!(
        gate.register("Ann", "ann@gmail.com", "password1"),
        Err(GateError::DuplicateEmail(_))
    ));

    let mut session = SessionContext::new();
    gate.login(&mut session, "Ann", "ann@gmail.com", "password1")
        .unwrap();
    assert!(session.is_authenticated());

    let raw = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| std::fs::read_to_string(e.unwrap().path()).unwrap())
        .collect::<String>();
    assert!(!raw.contains("password1"), "plaintext password on disk");
}

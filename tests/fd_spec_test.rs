use fdcheck::{FdStore, ValidationError, parse_attribute_list, validate_dependency};

fn store_with(fds: &[(&str, &str)]) -> FdStore {
    let mut store = FdStore::new();
    for (det, dep) in fds {
        store.submit(det, dep).unwrap();
    }
    store
}

// =============================================================================
// Attribute lists
// =============================================================================

#[test]
fn spec_duplicate_attribute() {
    let err = parse_attribute_list("a,b,a", "Dependent").unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateAttribute {
            field: "Dependent".into(),
            token: "a".into()
        }
    );
}

#[test]
fn spec_empty_input() {
    let err = parse_attribute_list("", "Dependent").unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyInput {
            field: "Dependent".into()
        }
    );
}

#[test]
fn spec_whitespace_inside_comma_piece() {
    let err = parse_attribute_list("ab cd, ef", "Determinant").unwrap_err();
    assert_eq!(
        err,
        ValidationError::WhitespaceInToken {
            field: "Determinant".into(),
            token: "ab cd".into()
        }
    );
}

#[test]
fn spec_space_without_comma_is_one_token() {
    let err = parse_attribute_list("a b", "Determinant").unwrap_err();
    assert_eq!(
        err,
        ValidationError::WhitespaceInToken {
            field: "Determinant".into(),
            token: "a b".into()
        }
    );
}

#[test]
fn spec_field_label_in_message() {
    let err = parse_attribute_list("toolong", "Determinant").unwrap_err();
    assert!(err.to_string().starts_with("Determinant:"), "got: {err}");
}

// =============================================================================
// Validation pipeline
// =============================================================================

#[test]
fn spec_trivial_dependency() {
    let errors = validate_dependency("a", "a, b", &FdStore::new()).unwrap_err();
    assert!(matches!(
        &errors[..],
        [ValidationError::TrivialDependency { shared }] if shared == &vec!["a".to_string()]
    ));
}

#[test]
fn spec_duplicate_fd() {
    let store = store_with(&[("a", "b")]);
    let errors = validate_dependency("a", "b", &store).unwrap_err();
    assert_eq!(errors, vec![ValidationError::DuplicateFd]);
}

#[test]
fn spec_wider_determinant_accepted() {
    let store = store_with(&[("a", "b")]);
    let fd = validate_dependency("a, c", "d", &store).unwrap();
    assert_eq!(fd.to_string(), "a, c -> d");
}

#[test]
fn spec_determinant_overlap() {
    let store = store_with(&[("a, c", "d")]);
    let errors = validate_dependency("a", "c", &store).unwrap_err();
    assert!(matches!(
        &errors[..],
        [ValidationError::DeterminantOverlapViolation { .. }]
    ));
}

#[test]
fn spec_field_errors_reported_together() {
    let errors = validate_dependency("a b", "toolong", &FdStore::new()).unwrap_err();
    let fields: Vec<Option<&str>> = errors.iter().map(ValidationError::field).collect();
    assert_eq!(fields, vec![Some("Determinant"), Some("Dependent")]);
}

#[test]
fn spec_validate_does_not_insert() {
    let store = FdStore::new();
    validate_dependency("a", "b", &store).unwrap();
    assert!(store.is_empty());
}

// The overlap rule is a heuristic over single stored dependencies, not a
// closure check. These document what it deliberately lets through.

#[test]
fn spec_heuristic_misses_transitive_implication() {
    let store = store_with(&[("a", "b"), ("b", "c")]);
    assert!(validate_dependency("a", "c", &store).is_ok());
}

#[test]
fn spec_heuristic_misses_augmentation() {
    // a -> b already implies a, c -> b.
    let store = store_with(&[("a", "b")]);
    assert!(validate_dependency("a, c", "b", &store).is_ok());
}

// =============================================================================
// Store
// =============================================================================

#[test]
fn spec_accepted_fd_is_first() {
    let mut store = store_with(&[("x", "y")]);
    let fd = validate_dependency("a", "b", &store).unwrap();
    let id = store.insert_front(fd.clone());
    assert_eq!(store.iter().next(), Some(&fd));
    assert_eq!(store.entries().next().map(|(i, _)| i), Some(id));
}

#[test]
fn spec_delete_all_empties_store() {
    let mut store = FdStore::new();
    let ids: Vec<_> = [("a", "b"), ("c", "d"), ("e", "f")]
        .iter()
        .map(|(det, dep)| store.submit(det, dep).unwrap().0)
        .collect();
    for id in [ids[1], ids[2], ids[0]] {
        assert!(store.remove(id).is_some());
    }
    assert!(store.is_empty());
}

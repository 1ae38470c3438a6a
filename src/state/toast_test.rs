use super::*;

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn severity_maps_to_fixed_classes() {
    assert_eq!(Severity::Success.css_class(), "bg-green-500 text-white");
    assert_eq!(Severity::Error.css_class(), "bg-red-500 text-white");
    assert_eq!(Severity::Warning.css_class(), "bg-yellow-500 text-white");
    assert_eq!(Severity::Info.css_class(), "bg-blue-500 text-white");
}

#[test]
fn toast_class_combines_base_and_severity() {
    let toast = Toast { id: 1, message: "ok".into(), severity: Severity::Error };
    assert_eq!(toast.class(), "fixed top-4 right-4 p-4 rounded-lg shadow-lg z-50 bg-red-500 text-white");
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("first", Severity::Info);
    let b = state.push("second", Severity::Success);
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "second");
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push("first", Severity::Info);
    let b = state.push("second", Severity::Warning);
    assert!(state.dismiss(a));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_twice_is_a_no_op() {
    let mut state = ToastState::default();
    let a = state.push("only", Severity::Info);
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
    assert!(state.items.is_empty());
}

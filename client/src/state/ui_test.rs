use super::*;

// =============================================================
// Theme parsing
// =============================================================

#[test]
fn absent_attribute_reads_as_light() {
    assert_eq!(Theme::from_attr(None), Theme::Light);
}

#[test]
fn dark_attribute_reads_as_dark() {
    assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
}

#[test]
fn light_attribute_reads_as_light() {
    assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
}

#[test]
fn unrecognized_attribute_reads_as_light() {
    assert_eq!(Theme::from_attr(Some("solarized")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("DARK")), Theme::Light);
}

// =============================================================
// Toggle semantics
// =============================================================

#[test]
fn first_toggle_from_absent_is_dark_second_is_light() {
    let first = Theme::from_attr(None).flipped();
    assert_eq!(first, Theme::Dark);
    let second = Theme::from_attr(Some(first.attr_value())).flipped();
    assert_eq!(second, Theme::Light);
}

#[test]
fn flip_is_its_own_inverse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.flipped().flipped(), theme);
    }
}

#[test]
fn flip_always_lands_on_a_recognized_value() {
    for value in [None, Some("dark"), Some("light"), Some("bogus")] {
        let next = Theme::from_attr(value).flipped();
        assert!(matches!(next.attr_value(), "light" | "dark"));
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_defaults_to_light() {
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn attr_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_attr(Some(theme.attr_value())), theme);
    }
}

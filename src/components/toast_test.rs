use super::*;
use crate::config::UiConfig;

#[test]
fn severity_parses_known_names_case_insensitively() {
    assert_eq!(Severity::from_name("success"), Severity::Success);
    assert_eq!(Severity::from_name(" ERROR "), Severity::Error);
    assert_eq!(Severity::from_name("Warning"), Severity::Warning);
    assert_eq!(Severity::from_name("info"), Severity::Info);
}

#[test]
fn unknown_severity_falls_back_to_info() {
    assert_eq!(Severity::from_name("celebration"), Severity::Info);
    assert_eq!(Severity::from_name(""), Severity::Info);
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn class_name_tags_severity() {
    assert_eq!(Severity::Error.class_name(), "toast toast-error");
    assert_eq!(Severity::Success.class_name(), "toast toast-success");
}

#[test]
fn each_severity_has_a_distinct_icon() {
    let icons = [Severity::Success, Severity::Error, Severity::Warning, Severity::Info].map(Severity::icon_svg);
    for (i, a) in icons.iter().enumerate() {
        for b in &icons[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn escape_html_neutralizes_markup() {
    assert_eq!(
        escape_html(r#"<img src=x onerror="alert('x')">&"#),
        "&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt;&amp;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn markup_escapes_message_and_includes_close_button() {
    let spec = ToastSpec::new("<script>boom()</script>", Severity::Warning, 3000);
    let html = spec.markup();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;boom()&lt;/script&gt;"));
    assert!(html.contains(r#"class="toast-close""#));
    assert!(html.contains(&Severity::Warning.icon_svg()));
}

#[test]
fn toast_ids_are_unique_and_prefixed() {
    let a = next_toast_id();
    let b = next_toast_id();
    assert!(a.starts_with("toast-"));
    assert_ne!(a, b);
}

#[test]
fn timeline_enters_then_hides_after_duration() {
    let config = UiConfig::default().toast;
    let spec = ToastSpec::new("saved", Severity::Success, 3000);
    let timeline = spec.timeline(&config);
    assert_eq!(timeline.enter_at_ms, 10);
    assert_eq!(timeline.hide_at_ms, Some(3000));
    assert_eq!(timeline.remove_after_hide_ms, 300);
}

#[test]
fn zero_duration_toast_never_auto_hides() {
    let config = UiConfig::default().toast;
    let spec = ToastSpec::new("sticky", Severity::Info, 0);
    assert_eq!(spec.timeline(&config).hide_at_ms, None);
}

#[test]
fn container_style_is_fixed_and_click_through() {
    let style = container_style(&UiConfig::default().toast);
    assert!(style.contains(&("position", "fixed".to_owned())));
    assert!(style.contains(&("bottom", "16px".to_owned())));
    assert!(style.contains(&("right", "16px".to_owned())));
    assert!(style.contains(&("z-index", "50".to_owned())));
    assert!(style.contains(&("pointer-events", "none".to_owned())));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn show_toast_returns_generated_id_outside_browser() {
    let ctx = UiContext::new(UiConfig::default()).unwrap();
    let id = ctx.show_error_toast("failed", None);
    assert!(id.starts_with("toast-"));
    ctx.hide_toast(&id);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn shortcut_duration_defaults_to_config() {
    let mut config = UiConfig::default();
    config.toast.duration_ms = 4500;
    let ctx = UiContext::new(config).unwrap();
    assert_eq!(ctx.toast_duration(None), 4500);
    assert_eq!(ctx.toast_duration(Some(800)), 800);
    assert_eq!(ctx.toast_duration(Some(0)), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn shortcuts_accept_custom_duration() {
    let ctx = UiContext::new(UiConfig::default()).unwrap();
    assert!(ctx.show_success_toast("saved", Some(0)).starts_with("toast-"));
    assert!(ctx.show_warning_toast("careful", Some(10_000)).starts_with("toast-"));
    assert!(ctx.show_info_toast("fyi", None).starts_with("toast-"));
}

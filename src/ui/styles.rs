use web_sys as web;

const STYLE_ID: &str = "portfolio-injected-styles";

const INJECTED_CSS: &str = r#"
@keyframes slideInRight {
    from { opacity: 0; transform: translateX(100%); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes slideOutRight {
    from { opacity: 1; transform: translateX(0); }
    to { opacity: 0; transform: translateX(100%); }
}
@keyframes particleFloat {
    0% { transform: translateY(100vh) rotate(0deg); opacity: 0; }
    10% { opacity: 1; }
    90% { opacity: 1; }
    100% { transform: translateY(-100px) rotate(360deg); opacity: 0; }
}
.nav-link.active { color: var(--neon-blue) !important; text-shadow: 0 0 10px var(--neon-blue); }
.nav-link.active::after { width: 100% !important; }
.btn-neon:active { transform: translateY(-1px) scale(0.98); }
.project-card:active { transform: translateY(-8px) rotateX(5deg) scale(0.98); }
.btn-neon:disabled { opacity: 0.7; cursor: not-allowed; transform: none; }
@media (max-width: 768px) {
    .particle { display: none; }
    .notification { right: 10px !important; max-width: calc(100vw - 20px) !important; }
}
@media (hover: none) {
    .project-card:hover { transform: none; }
    .glass:hover { transform: none; }
    .nav-link:hover { color: var(--neon-blue); }
}
.nav-link, .btn-neon, .project-card, .glass, .filter-btn {
    transition: all 0.3s cubic-bezier(0.33, 1, 0.68, 1);
}
"#;

/// Append the keyframes and state rules to `<head>`, once.
pub fn inject_styles(document: &web::Document) {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        return;
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(INJECTED_CSS));
    _ = head.append_child(&style);
}

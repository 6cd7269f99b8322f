use {
    crate::{
        js::{
            append,
            create_el,
            el_by_id,
            LogJsErr,
        },
        state::state,
    },
    gloo::{
        timers::callback::Timeout,
        utils::document,
    },
    web_sys::Element,
};

pub const TOAST_VISIBLE_MS: u32 = 3000;
pub const TOAST_FADE_MS: u32 = 300;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    /// A severity name from elsewhere (e.g. a server-supplied string) that
    /// isn't one of the known kinds. Keeps its own name in the style class,
    /// falls back to the info icon.
    Other(String),
}

impl ToastKind {
    pub fn from_name(name: &str) -> ToastKind {
        match name {
            "success" => return ToastKind::Success,
            "error" => return ToastKind::Error,
            "warning" => return ToastKind::Warning,
            "info" => return ToastKind::Info,
            _ => return ToastKind::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ToastKind::Success => return "success",
            ToastKind::Error => return "error",
            ToastKind::Warning => return "warning",
            ToastKind::Info => return "info",
            ToastKind::Other(name) => return name.as_str(),
        }
    }

    /// Material symbols glyph name.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => return "check_circle",
            ToastKind::Error => return "error",
            ToastKind::Warning => return "warning",
            ToastKind::Info | ToastKind::Other(_) => return "info",
        }
    }
}

fn toast_container() -> Result<Element, String> {
    let s = state();
    if let Some(container) = s.toast_container.borrow().as_ref() {
        if container.is_connected() {
            return Ok(container.clone());
        }
    }
    // First use; bind an existing container or make one
    let container = match el_by_id("toast-container") {
        Some(container) => container,
        None => {
            let container = create_el("div")?;
            container.set_id("toast-container");
            let Some(body) = document().body() else {
                return Err(format!("Document has no body to attach the toast container to"));
            };
            append(&body, &container)?;
            container
        },
    };
    *s.toast_container.borrow_mut() = Some(container.clone());
    return Ok(container);
}

/// Shows an auto-dismissing notification. Concurrent toasts stack in the
/// shared container in call order, each on its own timers.
pub fn show_toast(message: &str, kind: ToastKind) {
    if let Err(e) = show_toast_inner(message, kind) {
        state().log.log(&format!("Error showing toast: {}", e));
    }
}

fn show_toast_inner(message: &str, kind: ToastKind) -> Result<(), String> {
    let container = toast_container()?;
    let toast = create_el("div")?;
    toast.set_class_name(&format!("toast toast-{}", kind.name()));
    let icon_el = create_el("span")?;
    icon_el.set_class_name("material-symbols-rounded toast-icon");
    icon_el.set_text_content(Some(kind.icon()));
    let message_el = create_el("span")?;
    message_el.set_class_name("toast-message");
    message_el.set_text_content(Some(message));
    append(&toast, &icon_el)?;
    append(&toast, &message_el)?;
    append(&container, &toast)?;

    // Let the element land in the document so the show transition engages
    Timeout::new(10, {
        let toast = toast.clone();
        move || {
            toast.class_list().add_1("show").log(&state().log, &"Error showing toast");
        }
    }).forget();
    Timeout::new(TOAST_VISIBLE_MS, move || {
        toast.class_list().remove_1("show").log(&state().log, &"Error hiding toast");
        Timeout::new(TOAST_FADE_MS, move || {
            toast.remove();
        }).forget();
    }).forget();
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind() {
        assert_eq!(ToastKind::default(), ToastKind::Success);
    }

    #[test]
    fn test_known_kind_names() {
        for name in ["success", "error", "warning", "info"] {
            let kind = ToastKind::from_name(name);
            assert_eq!(kind.name(), name);
        }
    }

    #[test]
    fn test_icons() {
        assert_eq!(ToastKind::Success.icon(), "check_circle");
        assert_eq!(ToastKind::Error.icon(), "error");
        assert_eq!(ToastKind::Warning.icon(), "warning");
        assert_eq!(ToastKind::Info.icon(), "info");
    }

    #[test]
    fn test_unknown_kind_keeps_name_but_gets_info_icon() {
        let kind = ToastKind::from_name("fatal");
        assert_eq!(kind.name(), "fatal");
        assert_eq!(kind.icon(), "info");
    }
}

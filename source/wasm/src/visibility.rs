use {
    crate::{
        interface::{
            Role,
            User,
        },
        js::{
            Log,
            LogJsErr,
        },
    },
    gloo::utils::document,
    std::rc::Rc,
    wasm_bindgen::JsCast,
    web_sys::HtmlElement,
};

pub fn admin_visible(role: Option<Role>) -> bool {
    match role {
        Some(Role::Admin) | Some(Role::Manager) => return true,
        Some(Role::User) | None => return false,
    }
}

/// List items get the list display mode so markers and layout stay intact.
pub fn display_mode(tag_name: &str) -> &'static str {
    if tag_name.eq_ignore_ascii_case("li") {
        return "list-item";
    }
    return "block";
}

fn reveal_all(log: &Rc<dyn Log>, selector: &str) {
    let els = match document().query_selector_all(selector) {
        Ok(els) => els,
        Err(e) => {
            log.log(&format!("Error querying [{}] elements: {:?}", selector, e));
            return;
        },
    };
    for i in 0 .. els.length() {
        let Some(node) = els.item(i) else {
            continue;
        };
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            continue;
        };
        el
            .style()
            .set_property("display", display_mode(&el.tag_name()))
            .log(log, &format_args!("Error revealing [{}] element", selector));
    }
}

/// Reveals navigation entries the user's role entitles them to. Only ever
/// reveals; everything else keeps the stylesheet's default (hidden) state.
pub fn apply_role_restrictions(log: &Rc<dyn Log>, user: &User) {
    if admin_visible(user.role) {
        reveal_all(log, ".admin-only");
    }
    if user.is_superadmin {
        reveal_all(log, ".superadmin-only");
    }
}

use {
    crate::{
        api::{
            req_get_json,
            ReqError,
        },
        interface::MeResponse,
        js::LogJsErr,
        sidebar_menu,
        sidebar_user,
        state::state,
        visibility,
    },
    gloo::utils::window,
};

pub const ME_PATH: &str = "/api/user/me";
pub const LOGIN_PATH: &str = "/login";

/// Where to send the browser after an authentication failure, if anywhere.
/// Already on the login page means stay put.
pub fn login_redirect(current_path: &str) -> Option<&'static str> {
    if current_path == LOGIN_PATH {
        return None;
    }
    return Some(LOGIN_PATH);
}

/// Page-load flow: bind the drawer toggle, fetch the current user, then
/// personalize the sidebar and reveal role-gated navigation. Auth failure
/// redirects to login; anything else is logged and the page carries on
/// unpersonalized. One shot, no retry.
pub async fn run() {
    let log = state().log.clone();
    sidebar_menu::setup_sidebar(&log);
    match req_get_json::<MeResponse>(&state().env.base_url, ME_PATH).await {
        Ok(body) => {
            sidebar_user::render(&log, &body.user);
            visibility::apply_role_restrictions(&log, &body.user);
        },
        Err(ReqError::Status(_)) => {
            let path = match window().location().pathname() {
                Ok(path) => path,
                Err(e) => {
                    log.log(&format!("Error reading location path: {:?}", e));
                    return;
                },
            };
            if let Some(target) = login_redirect(&path) {
                window().location().set_href(target).log(&log, &"Error redirecting to login");
            }
        },
        Err(ReqError::Other(e)) => {
            log.log(&format!("Error initializing page shell: {}", e));
        },
    }
}

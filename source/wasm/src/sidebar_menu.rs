use {
    crate::js::{
        el_by_id,
        Log,
        LogJsErr,
    },
    gloo::{
        events::EventListener,
        utils::document,
    },
    std::rc::Rc,
};

/// Binds the mobile navigation drawer controls: the open button, the close
/// button and the overlay all invoke the same toggle. If the page has no
/// drawer (no open button or no sidebar), this binds nothing. Open/closed
/// state lives entirely in the DOM classes; nothing is tracked here.
pub fn setup_sidebar(log: &Rc<dyn Log>) {
    let Some(open_btn) = el_by_id("openSidebarBtn") else {
        return;
    };
    let Some(sidebar) = el_by_id("sidebar") else {
        return;
    };
    let close_btn = el_by_id("closeSidebarBtn");
    let overlay = el_by_id("sidebarOverlay");
    let toggle = Rc::new({
        let log = log.clone();
        let sidebar = sidebar.clone();
        let overlay = overlay.clone();
        move || {
            sidebar.class_list().toggle("active").log(&log, &"Error toggling sidebar state");
            if let Some(overlay) = &overlay {
                overlay.class_list().toggle("active").log(&log, &"Error toggling overlay state");
            }
            if let Some(body) = document().body() {
                body.class_list().toggle("sidebar-open").log(&log, &"Error toggling body sidebar marker");
            }
        }
    });
    EventListener::new(&open_btn, "click", {
        let toggle = toggle.clone();
        move |_| toggle()
    }).forget();
    if let Some(close_btn) = close_btn {
        EventListener::new(&close_btn, "click", {
            let toggle = toggle.clone();
            move |_| toggle()
        }).forget();
    }
    if let Some(overlay) = overlay {
        EventListener::new(&overlay, "click", {
            let toggle = toggle.clone();
            move |_| toggle()
        }).forget();
    }
}

use {
    backoffice_wasm::{
        boot,
        js::{
            scan_env,
            ConsoleLog,
            Log,
        },
        state::{
            State_,
            STATE,
        },
    },
    gloo::{
        events::EventListener,
        utils::document,
    },
    std::{
        cell::RefCell,
        panic,
        rc::Rc,
    },
    wasm_bindgen_futures::spawn_local,
};

fn start() {
    spawn_local(boot::run());
}

pub fn main() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
    STATE.with(|s| *s.borrow_mut() = Some(Rc::new(State_ {
        log: Rc::new(ConsoleLog) as Rc<dyn Log>,
        env: scan_env(),
        toast_container: RefCell::new(None),
    })));

    // The module may finish loading before or after the document finishes
    // parsing
    if document().ready_state() == "loading" {
        EventListener::once(&document(), "DOMContentLoaded", |_| start()).forget();
    } else {
        start();
    }
}

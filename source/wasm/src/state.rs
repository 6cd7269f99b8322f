use {
    crate::js::{
        Env,
        Log,
    },
    std::{
        cell::RefCell,
        rc::Rc,
    },
    web_sys::Element,
};

pub struct State_ {
    pub log: Rc<dyn Log>,
    pub env: Env,
    /// Singleton container for toasts, bound on first use. See
    /// `toast::show_toast`.
    pub toast_container: RefCell<Option<Element>>,
}

thread_local!{
    pub static STATE: RefCell<Option<Rc<State_>>> = RefCell::new(None);
}

pub fn state() -> Rc<State_> {
    return STATE.with(|x| x.borrow().clone()).unwrap();
}

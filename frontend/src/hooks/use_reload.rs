use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Counter bumped to re-run a data loading effect
#[derive(Debug, Default, PartialEq)]
pub struct ReloadToken(pub u32);

impl Reducible for ReloadToken {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(ReloadToken(self.0.wrapping_add(1)))
    }
}

/// Current reload generation and a stable callback that bumps it
#[hook]
pub fn use_reload() -> (u32, Callback<()>) {
    let token = use_reducer(ReloadToken::default);

    let reload = {
        let dispatcher = token.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(()))
    };

    (token.0, reload)
}

/// Tags each load with an increasing id so a slower, older response
/// cannot overwrite the rows of the latest request.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest(Rc<Cell<u64>>);

impl LatestRequest {
    pub fn begin(&self) -> u64 {
        let id = self.0.get().wrapping_add(1);
        self.0.set(id);
        id
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.0.get() == id
    }
}

#[hook]
pub fn use_latest_request() -> LatestRequest {
    (*use_memo((), |_| LatestRequest::default())).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_only_latest_request_is_current() {
        let latest = LatestRequest::default();
        let first = latest.begin();
        let handle = latest.clone();
        let second = handle.begin();

        assert!(!latest.is_current(first));
        assert!(latest.is_current(second));
    }
}

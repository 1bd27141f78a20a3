use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Returns `value` once it has stopped changing for `delay_ms`.
///
/// Each change drops the pending timeout, so only the last value in a burst
/// of keystrokes is applied.
#[hook]
pub fn use_debounce<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            let timeout = Timeout::new(delay_ms, move || debounced.set(value));
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}

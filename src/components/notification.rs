//! Transient notification banner with fixed-delay auto-hide.

use leptos::prelude::*;

use crate::state::notify::NoticeState;
#[cfg(feature = "csr")]
use crate::state::notify::NOTICE_VISIBLE_MS;

/// Notification banner pinned above the tab bar.
///
/// Each posted notice schedules its own hide timer; the sequence check in
/// `hide_if_current` makes a stale timer a no-op, so a late-arriving notice
/// restarts visibility instead of being cut short by its predecessor's
/// timer. Messages never queue.
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let notify = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let seq = notify.with(|n| n.seq);
        if seq == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_VISIBLE_MS)).await;
            notify.update(|n| n.hide_if_current(seq));
        });
    });

    let class = move || {
        notify.with(|n| {
            if n.visible {
                n.kind.css_class().to_owned()
            } else {
                format!("{} hidden", n.kind.css_class())
            }
        })
    };

    view! { <div class=class>{move || notify.with(|n| n.message.clone())}</div> }
}

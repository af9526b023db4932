//! Root application component with context providers and startup wiring.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::net::dispatch;
use crate::pages::garage::GaragePage;
use crate::state::notify::{NoticeKind, NoticeState};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared state contexts, resolves the host identity once,
/// and kicks off the initial data load. A missing identity is terminal for
/// the session: one error notification and no network activity at all.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notify = RwSignal::new(NoticeState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(notify);
    provide_context(ui);

    Effect::new(move || {
        if session.with_untracked(|s| s.identity.is_some()) {
            return;
        }
        match crate::util::host_env::resolve_identity() {
            Some(id) => {
                session.update(|s| s.identity = Some(id));
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    dispatch::refresh(session, notify).await;
                });
            }
            None => notify.update(|n| {
                n.post(dispatch::MISSING_IDENTITY_NOTICE, NoticeKind::Error);
            }),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/static/style.css"/>
        <Title text="Garage"/>

        <GaragePage/>
    }
}

//! Host-local result notice for login and registration.
//!
//! Unlike the editors, this popup is part of the host: it must work even when
//! the auth remote is down, since it reports the outcome of that remote's
//! requests.

#[cfg(test)]
#[path = "info_tooltip_test.rs"]
mod info_tooltip_test;

use leptos::prelude::*;

use crate::actions::Stores;
use crate::state::ui::{NoticeStatus, Popup};

pub fn notice_text(status: NoticeStatus) -> &'static str {
    match status {
        NoticeStatus::Success => "Вы успешно зарегистрировались!",
        NoticeStatus::Fail => "Что-то пошло не так! Попробуйте ещё раз.",
    }
}

pub fn notice_class(status: NoticeStatus) -> &'static str {
    match status {
        NoticeStatus::Success => "tooltip__icon tooltip__icon--success",
        NoticeStatus::Fail => "tooltip__icon tooltip__icon--fail",
    }
}

#[component]
pub fn InfoTooltip() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let status = move || {
        stores.ui.with(|ui| match ui.popup {
            Popup::InfoTooltip(status) => Some(status),
            _ => None,
        })
    };

    move || {
        status().map(|status| {
            view! {
                <div class="popup popup_opened" on:click=move |_| stores.close_all_popups()>
                    <div class="popup__container tooltip" on:click=|ev| ev.stop_propagation()>
                        <button
                            class="popup__close"
                            type="button"
                            aria-label="Закрыть"
                            on:click=move |_| stores.close_all_popups()
                        ></button>
                        <div class=notice_class(status)></div>
                        <p class="tooltip__text">{notice_text(status)}</p>
                    </div>
                </div>
            }
        })
    }
}

//! Success / failure banner shown above the form.

use dioxus::prelude::*;

use crate::notify::{Notice, NoticeLevel, Notifier};

/// [`Notifier`] that publishes into a signal read by [`NoticeBanner`].
#[derive(Clone, Copy)]
pub struct SignalNotifier(pub Signal<Option<Notice>>);

impl Notifier for SignalNotifier {
    fn notify(&self, notice: Notice) {
        let mut slot = self.0;
        slot.set(Some(notice));
    }
}

#[component]
pub fn NoticeBanner(mut notice: Signal<Option<Notice>>) -> Element {
    let Some(current) = notice.read().clone() else {
        return rsx! {};
    };

    let tone = match current.level {
        NoticeLevel::Success => "bg-green-50 text-green-800 border-green-200",
        NoticeLevel::Warning => "bg-yellow-50 text-yellow-800 border-yellow-200",
        NoticeLevel::Failure => "bg-red-50 text-red-800 border-red-200",
    };

    rsx! {
        div {
            class: "w-full max-w-3xl mb-4 flex items-center justify-between rounded-lg border px-4 py-3 text-sm {tone}",
            role: "status",
            span { "{current.message}" }
            button {
                class: "ml-4 text-xs font-semibold opacity-70 hover:opacity-100",
                r#type: "button",
                onclick: move |_| notice.set(None),
                "Dismiss"
            }
        }
    }
}

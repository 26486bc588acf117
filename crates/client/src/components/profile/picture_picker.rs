//! Picture selection with an inline preview.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::controller::ProfileFormController;
use crate::notify::Notice;
use crate::picture_source::SelectedPicture;

#[component]
pub fn PicturePicker(
    mut controller: Signal<ProfileFormController>,
    mut notice: Signal<Option<Notice>>,
) -> Element {
    let form = controller.read();
    let preview = form.preview().map(str::to_string);
    let hint = form.picture_limits().hint();
    let warning = form.picture_warning().map(str::to_string);
    drop(form);

    let on_pick = move |evt: FormEvent| {
        let selection = evt
            .files()
            .into_iter()
            .next()
            .map(|file| SelectedPicture::new(Rc::new(file)));

        let result = controller.write().select_picture(selection);
        match result {
            Ok(Some(ticket)) => {
                spawn(async move {
                    let loaded = ticket.load().await;
                    controller.write().apply_preview(ticket.generation(), loaded);
                });
            }
            Ok(None) => {}
            Err(e) => notice.set(Some(Notice::warning(e.to_string()))),
        }
    };

    rsx! {
        div { class: "w-full",
            label { class: "block text-sm font-medium text-gray-700 mb-2", "Picture" }
            div { class: "flex gap-3 items-center",
                div { class: "w-28 h-28 rounded-lg bg-gray-100 border flex items-center justify-center overflow-hidden",
                    if let Some(src) = preview {
                        img { class: "w-full h-full object-cover", src: "{src}", alt: "preview" }
                    } else {
                        svg {
                            class: "h-12 w-12 text-gray-300",
                            fill: "none",
                            view_box: "0 0 24 24",
                            stroke: "currentColor",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M12 4v16m8-8H4",
                            }
                        }
                    }
                }
                div { class: "flex-1",
                    input {
                        class: "block w-full text-sm text-gray-600",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_pick,
                    }
                    p { class: "text-xs text-gray-400 mt-1", "{hint}" }
                    if let Some(msg) = warning {
                        p { class: "text-xs text-yellow-600 mt-1", "{msg}" }
                    }
                }
            }
        }
    }
}

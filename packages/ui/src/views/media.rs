use dioxus::prelude::*;

use api::services::media;
use api::Api;
use store::models::MediaAsset;

use crate::notices::{push_notice, report_api_error, use_notices, NoticeLevel};
use crate::session::use_session;
use crate::table::{Column, ResourceTable};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn format_size(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

/// Content type from the filename extension; the backend stores it with the
/// asset.
fn content_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn media_filename(asset: &MediaAsset) -> String {
    asset.filename.clone()
}

fn media_type(asset: &MediaAsset) -> String {
    asset.content_type.clone()
}

fn media_size(asset: &MediaAsset) -> String {
    format_size(asset.size)
}

fn media_url(asset: &MediaAsset) -> String {
    asset.url.clone()
}

fn media_key(asset: &MediaAsset) -> String {
    asset.id.clone()
}

#[component]
pub fn MediaView() -> Element {
    let api = use_context::<Api>();
    let mut session = use_session();
    let mut notices = use_notices();

    let mut assets = use_signal(Vec::<MediaAsset>::new);
    let mut reload = use_signal(|| 0u32);
    let mut pending_delete = use_signal(|| Option::<MediaAsset>::None);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        let _tick = reload();
        async move {
            match media::list(&api).await {
                Ok(list) => assets.set(list),
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
        }
    });

    let upload_api = api.clone();
    let on_upload = move |evt: FormEvent| {
        let api = upload_api.clone();
        async move {
            let Some(file_engine) = evt.files() else {
                return;
            };
            for name in file_engine.files() {
                match file_engine.read_file(&name).await {
                    Some(bytes) => {
                        match media::upload(&api, &name, content_type_for(&name), bytes).await {
                            Ok(asset) => {
                                push_notice(
                                    &mut notices,
                                    NoticeLevel::Success,
                                    &format!("Uploaded {}", asset.filename),
                                );
                                let next = reload() + 1;
                                reload.set(next);
                            }
                            Err(e) => report_api_error(&e, &mut session, &mut notices),
                        }
                    }
                    None => push_notice(
                        &mut notices,
                        NoticeLevel::Error,
                        &format!("Could not read {name}"),
                    ),
                }
            }
        }
    };

    let delete_api = api.clone();
    let confirm_delete = move |_| {
        let api = delete_api.clone();
        async move {
            let Some(asset) = pending_delete() else {
                return;
            };
            match media::delete(&api, &asset.id).await {
                Ok(()) => {
                    push_notice(&mut notices, NoticeLevel::Success, "File deleted");
                    let next = reload() + 1;
                    reload.set(next);
                }
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
            pending_delete.set(None);
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page",

            div {
                class: "view-toolbar",
                h2 { class: "view-title", "Media" }
                label {
                    class: "primary upload-label",
                    "Upload"
                    input {
                        r#type: "file",
                        class: "upload-input",
                        onchange: on_upload,
                    }
                }
            }

            if let Some(ref asset) = pending_delete() {
                div {
                    class: "confirm-bar",
                    span { "Delete \"{asset.filename}\"?" }
                    button { class: "table-action table-action--danger", onclick: confirm_delete, "Delete" }
                    button { class: "table-action", onclick: move |_| pending_delete.set(None), "Cancel" }
                }
            }

            ResourceTable {
                columns: vec![
                    Column { label: "Filename", value: media_filename },
                    Column { label: "Type", value: media_type },
                    Column { label: "Size", value: media_size },
                    Column { label: "URL", value: media_url },
                ],
                items: assets(),
                row_key: media_key,
                empty_message: "No files uploaded yet.",
                show_edit: false,
                on_edit: move |_: MediaAsset| {},
                on_delete: move |asset: MediaAsset| pending_delete.set(Some(asset)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_render_in_sensible_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1_048_576), "3.0 MB");
    }

    #[test]
    fn content_type_follows_the_extension() {
        assert_eq!(content_type_for("logo.png"), "image/png");
        assert_eq!(content_type_for("photo.JPG"), "image/jpeg");
        assert_eq!(content_type_for("report.pdf"), "application/pdf");
        assert_eq!(content_type_for("mystery"), "application/octet-stream");
    }
}

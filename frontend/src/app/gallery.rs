use common::{
    api::traits::ImageListAPI,
    fetcher::get_images,
    types::{ImageDescriptor, ImageList},
};
use leptos::{
    component, create_local_resource, create_rw_signal, view, CollectView, IntoView, Resource,
    SignalGet, SignalSet,
};
use leptos_icons::Icon;

use super::{console_sink::ConsoleSink, log, modal::Modal, LoadingSpinner};

const THUMBNAIL_WIDTH: u32 = 480;
const THUMBNAIL_HEIGHT: u32 = 320;

#[component]
pub fn Gallery<A: ImageListAPI + 'static>(api: A) -> impl IntoView {
    // `None` inside means the fetch failed and was already reported to the console
    let images: Resource<(), Option<ImageList>> = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move {
                log("Requesting image list");
                get_images(&api, &ConsoleSink).await
            }
        },
    );

    let gallery_view = move || {
        if images.loading().get() {
            return view! {
                <div class="gallery-loading">
                    <LoadingSpinner />
                </div>
            }
            .into_view();
        }

        match images.get() {
            None => view! {
                <div class="gallery-loading">
                    <LoadingSpinner />
                </div>
            }
            .into_view(),
            Some(None) => view! { <NoImages /> }.into_view(),
            Some(Some(list)) => {
                view! { <ImageGrid images=ImageDescriptor::from_list(&list) /> }.into_view()
            }
        }
    };

    view! {
        <header class="gallery-header">
            <h1>"Picsum gallery"</h1>
            <button
                class="reload-button"
                disabled=move || images.loading().get()
                on:click=move |_| images.refetch()
            >
                <Icon icon=icondata::VsRefresh />
                "Reload"
            </button>
        </header>
        <section class="gallery">{gallery_view}</section>
    }
}

#[component]
fn NoImages() -> impl IntoView {
    view! { <p class="gallery-message">"No images available"</p> }
}

#[component]
fn ImageGrid(images: Vec<ImageDescriptor>) -> impl IntoView {
    if images.is_empty() {
        return view! { <p class="gallery-message">"The image list is empty"</p> }.into_view();
    }

    view! {
        <div class="image-grid">
            {images.into_iter().map(|image| view! { <ImageCard image=image /> }).collect_view()}
        </div>
    }
    .into_view()
}

#[component]
fn ImageCard(image: ImageDescriptor) -> impl IntoView {
    let open_dialog = create_rw_signal(false);

    let thumbnail = image.thumbnail_url(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT);
    let full_size = image.full_size_url();
    let author = image.author;
    let author_for_dialog = author.clone();

    view! {
        <figure class="image-card">
            <img
                src=thumbnail
                alt=author.clone()
                loading="lazy"
                on:click=move |_| open_dialog.set(true)
            />
            <figcaption>{author}</figcaption>
            <Modal
                open=open_dialog
                on_close=move || open_dialog.set(false)
                children=move || {
                    {
                        view! { <img class="image-full" src=full_size alt=author_for_dialog /> }
                    }
                        .into_view()
                        .into()
                }
            />
        </figure>
    }
}

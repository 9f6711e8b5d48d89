use shared::share::note_url;
use shared::{ContentKind, MAX_NOTE_LENGTH};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::browser;
use crate::free_tier::FreeTierBanner;
use crate::qr_code::QrCode;
use crate::session::{repository, use_session};
use crate::styles::*;
use crate::toast::use_toaster;

#[function_component]
pub fn NoteCreator() -> Html {
    let note = use_state(String::new);
    let generated_id = use_state(|| None::<String>);
    let refresh = use_state(|| 0u32);
    let toaster = use_toaster();
    let logged_in = use_session().map(|session| session.logged_in()).unwrap_or(false);

    let oninput = {
        let note = note.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            note.set(input.value());
        })
    };

    let create_note = {
        let note = note.clone();
        let generated_id = generated_id.clone();
        let refresh = refresh.clone();
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            match repository().and_then(|repo| repo.create_note(&note)) {
                Ok(created) => {
                    generated_id.set(Some(created.id));
                    refresh.set(*refresh + 1);
                    toaster.success("Note created successfully!");
                }
                Err(e) => {
                    log::warn!("note creation failed: {e}");
                    toaster.error(e.message);
                }
            }
        })
    };

    let blank = note.trim().is_empty();

    html! {
        <section id="notes" class={SECTION}>
            <div class={CONTAINER}>
                <div class="text-center mb-12">
                    <span class={BADGE}>{"Notes"}</span>
                    <h2 class={combine_classes(HEADING_LG, "mt-4")}>{"Create Shareable Notes"}</h2>
                    <p class={combine_classes(TEXT_MUTED, "max-w-2xl mx-auto text-base")}>
                        {"Type your note below, generate a QR code, and share it instantly. \
                          Recipients can access your note by scanning the QR code or using the link."}
                    </p>
                    if !logged_in {
                        <FreeTierBanner kind={ContentKind::Note} refresh={*refresh} />
                    }
                </div>

                <div class={GRID_SPLIT}>
                    <div class={combine_classes(CARD, SPACE_Y_BASE)}>
                        <label class={TEXT_LABEL}>
                            {format!("Your note ({}/{})", note.chars().count(), MAX_NOTE_LENGTH)}
                        </label>
                        <textarea
                            class={combine_classes(INPUT_BASE, "min-h-[200px] resize-y")}
                            value={(*note).clone()}
                            maxlength={MAX_NOTE_LENGTH.to_string()}
                            placeholder="Enter your note here..."
                            {oninput}
                        />
                        <button type="button" class={button_primary(true)} onclick={create_note} disabled={blank}>
                            {"Generate QR Code"}
                        </button>
                    </div>

                    <div class={CARD}>
                        {match &*generated_id {
                            Some(id) => html! { <QrCode url={note_url(&browser::origin(), id)} /> },
                            None => html! {
                                <div class={QR_PLACEHOLDER}>
                                    <p>{"Your QR code will appear here"}</p>
                                </div>
                            },
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::current_year;
use crate::config::CONFIG;
use crate::note_create::NoteCreator;
use crate::poll_create::PollCreator;
use crate::{Route, styles::*};

const FEATURES: [(&str, &str); 6] = [
    ("Beautiful QR Codes", "Instantly create custom QR codes for your notes and polls that can be scanned by any device."),
    ("No Account Required", "Get started right away without signing up. Create up to 3 notes and 1 poll for free."),
    ("Real-time Results", "See poll results update in real-time as participants submit their responses."),
    ("Simple Sharing", "Share your content via QR codes or copyable links to reach your audience instantly."),
    ("Minimalist Design", "Clean, distraction-free interface focuses on what matters: your content."),
    ("Mobile Friendly", "Create and view notes and polls on any device with our responsive design."),
];

#[function_component]
pub fn Home() -> Html {
    html! {
        <>
            <Hero />
            <NoteCreator />
            <PollCreator />
            <Features />
            <CallToAction />
            <Footer />
        </>
    }
}

#[function_component]
fn Hero() -> Html {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let timer = Timeout::new(CONFIG.hero_reveal_ms, move || visible.set(true));
            move || drop(timer)
        }, ());
    }

    let reveal = if *visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-4" };

    html! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_top,rgba(0,230,118,0.15),transparent_60%)]" />
            <div class={combine_classes("relative text-center px-6 max-w-3xl transition-all duration-700", reveal)}>
                <span class={BADGE}>{"Create Notes & Polls with QR Codes"}</span>
                <h1 class={combine_classes(HEADING_XL, "mt-6 mb-6")}>
                    {"Share Ideas "}<span class={TEXT_ACCENT}>{"Instantly"}</span>
                </h1>
                <p class="text-lg text-neutral-400 mb-10">
                    {"Create notes and polls with just a few clicks. Share them instantly with \
                      beautiful QR codes. No account needed for basic access."}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a href="#notes" class={button_primary(false)}>{"Create a Note"}</a>
                    <a href="#polls" class={button_secondary()}>{"Create a Poll"}</a>
                </div>
            </div>
            <a href="#notes" aria-label="Scroll down" class="absolute bottom-10 animate-bounce text-neutral-500">
                {"↓"}
            </a>
        </section>
    }
}

#[function_component]
fn Features() -> Html {
    html! {
        <section id="features" class={SECTION}>
            <div class={CONTAINER}>
                <div class="text-center mb-12">
                    <span class={BADGE}>{"Features"}</span>
                    <h2 class={combine_classes(HEADING_LG, "mt-4")}>{"Everything You Need"}</h2>
                    <p class={combine_classes(TEXT_MUTED, "max-w-2xl mx-auto text-base")}>
                        {"Simple, powerful tools designed to help you share information and collect feedback with ease."}
                    </p>
                </div>
                <div class={GRID_FEATURES}>
                    {for FEATURES.iter().map(|(title, description)| html! {
                        <div class={CARD_HOVER}>
                            <h3 class={HEADING_SM}>{*title}</h3>
                            <p class={TEXT_MUTED}>{*description}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn CallToAction() -> Html {
    html! {
        <section class={combine_classes(SECTION, "bg-neutral-950")}>
            <div class={combine_classes(CONTAINER_SM, "text-center")}>
                <h2 class={HEADING_LG}>{"Ready to Get Started?"}</h2>
                <p class={combine_classes(TEXT_MUTED, "mb-8 text-base")}>
                    {"Create your first note or poll in seconds. No credit card required."}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Link<Route> to={Route::Auth} classes={classes!(button_primary(false))}>
                        {"Create Free Account"}
                    </Link<Route>>
                    <a href="#notes" class={button_secondary()}>{"Try It Now"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="border-t border-neutral-800 py-10">
            <div class="container mx-auto px-6 flex flex-col md:flex-row gap-6 justify-between items-center">
                <div>
                    <div class="text-xl font-bold">{"Qr"}<span class={TEXT_ACCENT}>{"Notes"}</span></div>
                    <p class={TEXT_MUTED}>{"Share ideas and collect feedback instantly."}</p>
                </div>
                <div class="flex gap-6 text-sm text-neutral-400">
                    <a href="#" class="hover:text-white">{"Terms of Service"}</a>
                    <a href="#" class="hover:text-white">{"Privacy Policy"}</a>
                    <a href="#" class="hover:text-white">{"Contact"}</a>
                </div>
            </div>
            <p class={combine_classes(TEXT_MUTED, "text-center mt-8")}>
                {format!("© {} {}. All rights reserved.", current_year(), CONFIG.app_name)}
            </p>
        </footer>
    }
}

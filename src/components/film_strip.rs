use yew::prelude::*;

const PROJECTS: [&str; 8] = [
    "FIT CHECK",
    "THE DEGENERATES",
    "Alt Spectrum",
    "ZOO BREAK",
    "PASSENGERS",
    "It's all yarn",
    "NEON DREAMS",
    "URBAN TALES",
];

fn strip_cells(key_prefix: &str) -> Html {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            html! {
                <div key={format!("{key_prefix}-{index}")} class="film-strip-cell">
                    {*project}
                </div>
            }
        })
        .collect()
}

#[function_component(FilmStrip)]
pub fn film_strip() -> Html {
    html! {
        <section class="film-strip">
            <div class="film-strip-track">
                // Rendered twice so the translateX(-50%) loop is seamless.
                { strip_cells("first") }
                { strip_cells("second") }
            </div>
            <style>
                {r#"
                    .film-strip {
                        padding: 5rem 0;
                        background: rgba(25, 25, 30, 0.3);
                        overflow: hidden;
                    }
                    .film-strip-track {
                        display: flex;
                        gap: 1.5rem;
                        width: max-content;
                        animation: strip-scroll 30s linear infinite;
                    }
                    .film-strip-track:hover {
                        animation-play-state: paused;
                    }
                    .film-strip-cell {
                        flex-shrink: 0;
                        width: 16rem;
                        height: 10rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        font-size: 1.25rem;
                        background: rgba(40, 40, 45, 0.8);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        cursor: pointer;
                        transition: border-color 0.3s ease;
                    }
                    .film-strip-cell:hover {
                        border-color: rgba(255, 255, 255, 0.4);
                    }
                    @keyframes strip-scroll {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }
                "#}
            </style>
        </section>
    }
}

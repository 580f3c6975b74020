use yew::prelude::*;

const FILMS: [(&str, &str); 6] = [
    ("FIT CHECK", "Junie Lau"),
    ("THE DEGENERATES", "Dave Clark"),
    ("Alt Spectrum", "Henry Daubrez"),
    ("ZOO BREAK", "Sarah Chen"),
    ("PASSENGERS", "Mike Torres"),
    ("It's all yarn", "Emma Wilson"),
];

#[function_component(Showcase)]
pub fn showcase() -> Html {
    html! {
        <section class="showcase">
            <div class="showcase-inner">
                <h2 class="showcase-heading">{"See how filmmakers are using VisionFlux"}</h2>
                <p class="showcase-subheading">{"Watch Short Films →"}</p>
                <div class="showcase-grid">
                    {
                        FILMS.iter().enumerate().map(|(index, (title, creator))| html! {
                            <div
                                key={*title}
                                class="showcase-card"
                                style={format!("animation-delay: {}s", index as f32 * 0.05)}
                            >
                                <div class="showcase-card-glow"></div>
                                <div class="showcase-card-body">
                                    <h3>{title}</h3>
                                    <p>{creator}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .showcase {
                        padding: 6rem 1.5rem;
                    }
                    .showcase-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .showcase-heading {
                        font-size: clamp(2rem, 5vw, 3rem);
                        font-weight: 700;
                        text-align: center;
                        margin: 0 0 1rem 0;
                    }
                    .showcase-subheading {
                        text-align: center;
                        color: #999;
                        margin: 0 0 4rem 0;
                    }
                    .showcase-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .showcase-card {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        background: rgba(25, 25, 30, 0.6);
                        cursor: pointer;
                        transition: border-color 0.3s ease;
                    }
                    .showcase-card:hover {
                        border-color: rgba(255, 255, 255, 0.4);
                    }
                    .showcase-card-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg,
                            rgba(120, 120, 255, 0.15),
                            rgba(255, 120, 200, 0.15));
                        transition: opacity 0.3s ease;
                    }
                    .showcase-card:hover .showcase-card-glow {
                        opacity: 1.5;
                    }
                    .showcase-card-body {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        text-align: center;
                    }
                    .showcase-card-body h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem 0;
                        transition: transform 0.3s ease;
                    }
                    .showcase-card:hover .showcase-card-body h3 {
                        transform: scale(1.05);
                    }
                    .showcase-card-body p {
                        font-size: 0.9rem;
                        color: #999;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}

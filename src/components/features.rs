use yew::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fa-wand-magic-sparkles",
        title: "Consistent",
        description: "Bring your own assets, or generate them in VisionFlux. Then easily manage and reference them as you start to generate clips.",
    },
    Feature {
        icon: "fa-layer-group",
        title: "Seamless",
        description: "An interface designed for the creative story-building process from ideation to iteration.",
    },
    Feature {
        icon: "fa-film",
        title: "Cinematic",
        description: "State-of-the-art video quality made possible by advanced AI models.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features">
            <div class="features-inner">
                <h2 class="features-heading">{"VisionFlux is an AI filmmaking tool built with and for creatives."}</h2>
                <p class="features-subheading">
                    {"Seamlessly create cinematic clips, scenes and stories using advanced generative AI models."}
                </p>
                <div class="features-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div
                                key={feature.title}
                                class="feature-item"
                                style={format!("animation-delay: {}s", index as f32 * 0.1)}
                            >
                                <div class="feature-icon">
                                    <i class={classes!("fas", feature.icon)}></i>
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .features {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(to bottom, #0A0A0A, rgba(25, 25, 30, 0.4));
                    }
                    .features-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .features-heading {
                        font-size: clamp(2rem, 5vw, 3rem);
                        font-weight: 700;
                        text-align: center;
                        margin: 0 0 1.5rem 0;
                        animation: slide-up 0.6s ease;
                    }
                    .features-subheading {
                        font-size: 1.25rem;
                        text-align: center;
                        color: #999;
                        max-width: 48rem;
                        margin: 0 auto 5rem auto;
                        animation: slide-up 0.6s ease;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 3rem;
                        margin-top: 4rem;
                    }
                    .feature-item {
                        text-align: center;
                        animation: slide-up 0.6s ease both;
                    }
                    .feature-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.08);
                        margin-bottom: 1.5rem;
                        font-size: 1.6rem;
                        color: white;
                    }
                    .feature-item h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 1rem 0;
                    }
                    .feature-item p {
                        color: #999;
                        line-height: 1.7;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}

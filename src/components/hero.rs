use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-background">
                <video autoplay=true loop=true muted=true playsinline=true>
                    <source src="/hero-background.mp4" type="video/mp4" />
                </video>
                <div class="hero-gradient"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title shine">{"VisionFlux"}</h1>
                <p class="hero-tagline">{"Turn your words into worlds"}</p>
                <Link<Route> to={Route::Create} classes="hero-cta-link">
                    <button class="hero-cta">{"Create with VisionFlux"}</button>
                </Link<Route>>
                <p class="hero-footnote">{"Explore AI Subscriptions · See FAQ"}</p>
            </div>
            <div class="scroll-indicator">
                <div class="scroll-indicator-track">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-background video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom,
                            rgba(10, 10, 10, 0.6),
                            rgba(10, 10, 10, 0.4),
                            #0A0A0A);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        padding: 0 1.5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                        animation: fade-in 1s ease;
                    }
                    .hero-title {
                        font-family: 'Orbitron', sans-serif;
                        font-size: clamp(3.5rem, 10vw, 7rem);
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        margin: 0 0 2rem 0;
                    }
                    .hero-tagline {
                        font-family: 'Orbitron', sans-serif;
                        font-weight: 500;
                        font-size: clamp(1.5rem, 4vw, 2.25rem);
                        margin: 0 auto 3rem auto;
                        max-width: 48rem;
                    }
                    .hero-cta {
                        font-size: 1.1rem;
                        padding: 1.2rem 2rem;
                        border-radius: 9999px;
                        border: none;
                        background: white;
                        color: black;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-footnote {
                        margin-top: 2rem;
                        font-size: 0.9rem;
                        color: #999;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        animation: float 3s ease-in-out infinite;
                        z-index: 1;
                    }
                    .scroll-indicator-track {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-radius: 9999px;
                        display: flex;
                        align-items: flex-start;
                        justify-content: center;
                        padding: 0.5rem 0;
                    }
                    .scroll-indicator-dot {
                        width: 0.25rem;
                        height: 0.75rem;
                        background: rgba(255, 255, 255, 0.5);
                        border-radius: 9999px;
                    }
                    @keyframes float {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, -0.5rem); }
                    }
                "#}
            </style>
        </section>
    }
}

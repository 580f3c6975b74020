use gloo_console::log;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlAnchorElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Toast, ToastNotification};
use crate::studio::endpoint::{save_endpoint, BrowserStore, EndpointStore};
use crate::studio::generate::{prepare_request, send_generate, GenerateError, GenerationResult};
use crate::studio::StudioTab;

#[function_component(Create)]
pub fn create() -> Html {
    let endpoint_input = use_state(String::new);
    let prompt = use_state(String::new);
    let active_tab = use_state(|| StudioTab::Connection);
    let is_generating = use_state(|| false);
    let result = use_state(|| None::<GenerationResult>);
    let toast = use_state(|| None::<Toast>);

    // Pre-populate from storage on mount; a saved endpoint skips straight to
    // the create view.
    {
        let endpoint_input = endpoint_input.clone();
        let active_tab = active_tab.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(saved) = BrowserStore.load() {
                    endpoint_input.set(saved);
                    active_tab.set(StudioTab::Create);
                }
                || ()
            },
            (),
        );
    }

    let on_endpoint_input = {
        let endpoint_input = endpoint_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            endpoint_input.set(input.value());
        })
    };

    let on_prompt_input = {
        let prompt = prompt.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            prompt.set(textarea.value());
        })
    };

    let on_save = {
        let endpoint_input = endpoint_input.clone();
        let active_tab = active_tab.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            match save_endpoint(&BrowserStore, &endpoint_input) {
                Ok(saved) => {
                    endpoint_input.set(saved);
                    toast.set(Some(Toast::success("Success", "Tunnel URL saved successfully")));
                    active_tab.set(StudioTab::Create);
                }
                Err(err) => {
                    toast.set(Some(Toast::error("Error", err.to_string())));
                }
            }
        })
    };

    let on_generate = {
        let prompt = prompt.clone();
        let active_tab = active_tab.clone();
        let is_generating = is_generating.clone();
        let result = result.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_generating {
                return;
            }
            // The endpoint is re-read from storage here, not from the input
            // state, so an out-of-band change is always picked up.
            let prepared = match prepare_request(&BrowserStore, &prompt) {
                Ok(prepared) => prepared,
                Err(GenerateError::EmptyPrompt) => return,
                Err(err @ GenerateError::MissingEndpoint) => {
                    toast.set(Some(Toast::error("Error", err.to_string())));
                    active_tab.set(StudioTab::Connection);
                    return;
                }
                Err(err) => {
                    toast.set(Some(Toast::error("Error", err.to_string())));
                    return;
                }
            };
            is_generating.set(true);
            result.set(None);
            let is_generating = is_generating.clone();
            let result = result.clone();
            let toast = toast.clone();
            spawn_local(async move {
                log!("Sending prompt to", prepared.url.clone());
                match send_generate(&prepared).await {
                    Ok(generated) => {
                        toast.set(Some(Toast::success("Success!", generated.success_message())));
                        result.set(Some(generated));
                    }
                    Err(err) => {
                        log!("Generation error:", err.to_string());
                        toast.set(Some(Toast::error("Generation Failed", err.to_string())));
                    }
                }
                is_generating.set(false);
            });
        })
    };

    let on_download = {
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(generated) = (*result).as_ref() {
                if let Some(document) = window().and_then(|w| w.document()) {
                    if let Ok(element) = document.create_element("a") {
                        if let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() {
                            anchor.set_href(&generated.data_uri());
                            anchor.set_download(generated.download_file_name());
                            anchor.click();
                        }
                    }
                }
            }
        })
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| toast.set(None))
    };

    html! {
        <div class="studio-page">
            <div class="studio-background">
                <video autoplay=true loop=true muted=true playsinline=true>
                    <source src="/hero-background.mp4" type="video/mp4" />
                </video>
                <div class="studio-overlay"></div>
            </div>
            <div class="studio-card">
                <div class="studio-card-header">
                    <h1 class="studio-title">{"VisionFlux Studio"}</h1>
                    <p class="studio-subtitle">{"Configure your connection and start creating"}</p>
                </div>
                <div class="studio-tabs">
                    <button
                        class={classes!("tab-button", (*active_tab == StudioTab::Connection).then(|| "active"))}
                        onclick={{
                            let active_tab = active_tab.clone();
                            Callback::from(move |_| active_tab.set(StudioTab::Connection))
                        }}
                    >
                        {"Connection"}
                    </button>
                    <button
                        class={classes!("tab-button", (*active_tab == StudioTab::Create).then(|| "active"))}
                        onclick={{
                            let active_tab = active_tab.clone();
                            Callback::from(move |_| active_tab.set(StudioTab::Create))
                        }}
                    >
                        {"Create"}
                    </button>
                </div>
                {
                    match *active_tab {
                        StudioTab::Connection => html! {
                            <div class="studio-panel">
                                <label class="studio-label">{"Tunnel URL"}</label>
                                <input
                                    type="text"
                                    class="studio-input"
                                    placeholder="https://xxxx-xx-xx-xx-xx.ngrok-free.app"
                                    value={(*endpoint_input).clone()}
                                    oninput={on_endpoint_input}
                                />
                                <p class="studio-hint">{"Enter the public URL from your Colab instance"}</p>
                                <button class="studio-button" onclick={on_save}>
                                    {"Save Connection"}
                                </button>
                            </div>
                        },
                        StudioTab::Create => html! {
                            <div class="studio-panel">
                                <label class="studio-label">{"Your Prompt"}</label>
                                <textarea
                                    class="studio-textarea"
                                    placeholder="Describe the video you want to generate..."
                                    value={(*prompt).clone()}
                                    oninput={on_prompt_input}
                                />
                                <button
                                    class="studio-button"
                                    onclick={on_generate}
                                    disabled={prompt.is_empty() || *is_generating}
                                >
                                    if *is_generating {
                                        {"Generating..."}
                                    } else {
                                        {"Generate Video"}
                                    }
                                </button>
                                if let Some(generated) = (*result).as_ref() {
                                    <div class="studio-result">
                                        <label class="studio-label">{"Generated Result"}</label>
                                        <div class="studio-result-frame">
                                            <img src={generated.data_uri()} alt="Generated result" />
                                        </div>
                                        <button class="studio-button secondary" onclick={on_download}>
                                            if generated.format == "gif" {
                                                {"Download Video"}
                                            } else {
                                                {"Download Image"}
                                            }
                                        </button>
                                    </div>
                                }
                            </div>
                        },
                    }
                }
            </div>
            if let Some(current) = (*toast).as_ref() {
                <ToastNotification toast={current.clone()} on_dismiss={on_dismiss_toast} />
            }
            <style>
                {r#"
                    .studio-page {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .studio-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .studio-background video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .studio-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                    }
                    .studio-card {
                        position: relative;
                        z-index: 1;
                        width: 100%;
                        max-width: 42rem;
                        margin: 0 1rem;
                        padding: 2rem;
                        background: rgba(0, 0, 0, 0.4);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        backdrop-filter: blur(12px);
                        color: white;
                        animation: fade-in 0.5s ease;
                    }
                    .studio-card-header {
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .studio-title {
                        font-family: 'Orbitron', sans-serif;
                        font-size: 1.9rem;
                        letter-spacing: 0.1em;
                        margin: 0 0 0.5rem 0;
                    }
                    .studio-subtitle {
                        color: #CCC;
                        margin: 0;
                    }
                    .studio-tabs {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        overflow: hidden;
                        margin-bottom: 1.5rem;
                    }
                    .tab-button {
                        padding: 0.7rem;
                        background: none;
                        border: none;
                        color: #999;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .tab-button.active {
                        background: rgba(255, 255, 255, 0.1);
                        color: white;
                    }
                    .studio-panel {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .studio-label {
                        font-size: 0.9rem;
                        font-weight: 500;
                        color: #DDD;
                    }
                    .studio-input, .studio-textarea {
                        width: 100%;
                        padding: 0.7rem;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 6px;
                        color: white;
                        font-size: 1rem;
                        box-sizing: border-box;
                    }
                    .studio-input::placeholder, .studio-textarea::placeholder {
                        color: #777;
                    }
                    .studio-textarea {
                        min-height: 150px;
                        resize: none;
                        font-family: inherit;
                    }
                    .studio-hint {
                        font-size: 0.8rem;
                        color: #999;
                        margin: 0;
                    }
                    .studio-button {
                        width: 100%;
                        padding: 0.8rem;
                        background: white;
                        color: black;
                        border: none;
                        border-radius: 6px;
                        font-weight: 600;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .studio-button:hover:not(:disabled) {
                        background: #DDD;
                    }
                    .studio-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .studio-button.secondary {
                        background: rgba(255, 255, 255, 0.1);
                        color: white;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .studio-button.secondary:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .studio-result {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        margin-top: 1rem;
                    }
                    .studio-result-frame {
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        overflow: hidden;
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .studio-result-frame img {
                        display: block;
                        width: 100%;
                        height: auto;
                    }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Toast,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(ToastNotification)]
pub fn toast_notification(props: &ToastProps) -> Html {
    let kind_class = match props.toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };
    html! {
        <div class={classes!("toast", kind_class)}>
            <div class="toast-body">
                <span class="toast-title">{ &props.toast.title }</span>
                <span class="toast-message">{ &props.toast.message }</span>
            </div>
            <button class="toast-dismiss" onclick={props.on_dismiss.clone()}>{"×"}</button>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 100;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        min-width: 260px;
                        max-width: 380px;
                        padding: 1rem 1.2rem;
                        border-radius: 8px;
                        backdrop-filter: blur(10px);
                        animation: toast-in 0.25s ease;
                    }
                    @keyframes toast-in {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast-success {
                        background: rgba(20, 40, 20, 0.9);
                        border: 1px solid rgba(120, 255, 150, 0.3);
                    }
                    .toast-error {
                        background: rgba(40, 20, 20, 0.9);
                        border: 1px solid rgba(255, 120, 120, 0.3);
                    }
                    .toast-body {
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                    }
                    .toast-title {
                        color: white;
                        font-weight: 600;
                    }
                    .toast-message {
                        color: #CCC;
                        font-size: 0.9rem;
                    }
                    .toast-dismiss {
                        background: none;
                        border: none;
                        color: #999;
                        font-size: 1.1rem;
                        cursor: pointer;
                        margin-left: auto;
                        padding: 0;
                    }
                    .toast-dismiss:hover {
                        color: white;
                    }
                "#}
            </style>
        </div>
    }
}

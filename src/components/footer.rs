use yew::prelude::*;

const COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Product", ["Features", "Pricing", "FAQ"]),
    ("Resources", ["Documentation", "Tutorials", "Community"]),
    ("Company", ["About", "Blog", "Careers"]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{"VisionFlux"}</h3>
                        <p class="footer-blurb">{"Where the next wave of storytelling happens with AI"}</p>
                    </div>
                    {
                        COLUMNS.iter().map(|(heading, links)| html! {
                            <div key={*heading}>
                                <h4>{*heading}</h4>
                                <ul>
                                    { links.iter().map(|link| html! {
                                        <li key={*link}>{*link}</li>
                                    }).collect::<Html>() }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 VisionFlux. All rights reserved."}</p>
                </div>
            </div>
            <style>
                {r#"
                    .footer {
                        padding: 6rem 1.5rem 3rem 1.5rem;
                        background: rgba(25, 25, 30, 0.2);
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 1rem 0;
                    }
                    .footer-blurb {
                        font-size: 0.9rem;
                        color: #999;
                        margin: 0;
                    }
                    .footer-grid h4 {
                        font-weight: 600;
                        margin: 0 0 1rem 0;
                    }
                    .footer-grid ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .footer-grid li {
                        font-size: 0.9rem;
                        color: #999;
                        margin-bottom: 0.5rem;
                        cursor: pointer;
                        transition: color 0.2s ease;
                    }
                    .footer-grid li:hover {
                        color: white;
                    }
                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        text-align: center;
                        font-size: 0.9rem;
                        color: #999;
                    }
                "#}
            </style>
        </footer>
    }
}

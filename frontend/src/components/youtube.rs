use yew::prelude::*;

use crate::config;

const REASONS: [(&str, &str, &str); 4] = [
    ("🎓", "Expert Knowledge", "Learn from certified DPF specialists with 20+ years experience"),
    ("🔧", "Behind-the-Scenes", "See our mobile service in action and understand the process"),
    ("💰", "Money-Saving Tips", "Discover how to prevent expensive repairs and maintain your vehicle"),
    ("📬", "Stay Updated", "Get notified when we upload new videos and helpful content"),
];

#[function_component(YouTubeShowcase)]
pub fn youtube_showcase() -> Html {
    html! {
        <section class="youtube-section">
            <div class="youtube-inner">
                <div class="youtube-header">
                    <h2>{"▶ Watch Our Channel"}</h2>
                    <p>{"Subscribe to Dodgy Garage for expert DPF, AdBlue, and EGR cooler tips"}</p>
                </div>
                <a href={config::YOUTUBE_URL} target="_blank" rel="noopener noreferrer" class="youtube-card">
                    <div class="youtube-thumb">
                        <span class="youtube-badge">{"YouTube"}</span>
                        <span class="youtube-play">{"▶"}</span>
                    </div>
                    <div class="youtube-info">
                        <h3>{"Visit Our YouTube Channel"}</h3>
                        <p>{"Click to watch our latest DPF cleaning, AdBlue diagnostics, and EGR cooler repair videos"}</p>
                        <span class="youtube-subscribe">{"Subscribe Now"}</span>
                    </div>
                </a>
                <div class="youtube-reasons">
                    <h3>{"Why Subscribe?"}</h3>
                    <div class="youtube-reason-grid">
                        { for REASONS.iter().map(|(emoji, title, text)| html! {
                            <div class="youtube-reason">
                                <div class="youtube-reason-emoji">{*emoji}</div>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .youtube-section {
                    padding: 5rem 1rem;
                    background: linear-gradient(135deg, #111827, #1f2937, #111827);
                    color: #ffffff;
                }
                .youtube-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .youtube-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .youtube-header h2 {
                    font-size: 2.5rem;
                }
                .youtube-header p {
                    color: #d1d5db;
                    font-size: 1.2rem;
                }
                .youtube-card {
                    display: block;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    border-radius: 12px;
                    overflow: hidden;
                    text-decoration: none;
                    color: inherit;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                    transition: transform 0.3s ease;
                }
                .youtube-card:hover {
                    transform: scale(1.02);
                }
                .youtube-thumb {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    background: url('/images/youtube-thumbnail.jpg') center / cover, #000000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .youtube-badge {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: #dc2626;
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    font-weight: 700;
                }
                .youtube-play {
                    background: #dc2626;
                    border-radius: 50%;
                    width: 6rem;
                    height: 6rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.5rem;
                }
                .youtube-info {
                    background: #1f2937;
                    padding: 2rem;
                    text-align: center;
                }
                .youtube-info p {
                    color: #d1d5db;
                }
                .youtube-subscribe {
                    color: #ef4444;
                    font-weight: 700;
                }
                .youtube-reasons {
                    background: linear-gradient(90deg, #FF9500, #ea580c);
                    border-radius: 12px;
                    padding: 2rem;
                }
                .youtube-reasons h3 {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .youtube-reason-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .youtube-reason {
                    display: flex;
                    gap: 1rem;
                }
                .youtube-reason-emoji {
                    font-size: 2.2rem;
                }
                @media (max-width: 768px) {
                    .youtube-reason-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

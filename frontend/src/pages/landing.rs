use yew::prelude::*;

use crate::components::code_preview::CodePreview;
use crate::components::toast::{ToastNotifier, ToastQueue, Toaster};
use crate::components::waitlist_form::WaitlistForm;
use crate::config;

struct Feature {
    icon: &'static str,
    tint: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fas fa-crosshairs",
        tint: "tint-blue",
        title: "Precision.",
        blurb: "Detects 1,000+ disposable domains.",
    },
    Feature {
        icon: "fas fa-bolt",
        tint: "tint-yellow",
        title: "Speed.",
        blurb: "< 50ms Latency global edge network.",
    },
    Feature {
        icon: "fas fa-shield-halved",
        tint: "tint-green",
        title: "Security.",
        blurb: "Enterprise-grade rate limiting.",
    },
];

// Placeholder quotes until the beta has real users.
struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Our signup form stopped filling up with throwaway inboxes overnight.",
        name: "Jordan P.",
        role: "Founder, early-stage SaaS",
    },
    Testimonial {
        quote: "One request per signup and the bots are simply gone.",
        name: "Sam R.",
        role: "Backend engineer",
    },
    Testimonial {
        quote: "The Trust Score finally gave our growth team a number to argue about.",
        name: "Alex K.",
        role: "Head of Growth",
    },
];

/// Sections fade in one after another, this far apart.
const ENTRANCE_STEP_MS: u32 = 100;

fn entrance(step: u32) -> String {
    format!("animation-delay: {}ms;", step * ENTRANCE_STEP_MS)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let toasts = use_reducer(ToastQueue::default);
    let notifier = ToastNotifier::new(toasts.clone());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{LANDING_CSS}</style>
            <div class="grid-background"></div>
            <div class="radial-glow"></div>

            <nav class="navbar fade-in-down">
                <div class="navbar-inner">
                    <div class="brand">{"TrustShield"}</div>
                    <div class="social-links">
                        <a href="https://twitter.com" aria-label="Twitter"><i class="fab fa-twitter"></i></a>
                        <a href="https://github.com" aria-label="GitHub"><i class="fab fa-github"></i></a>
                    </div>
                </div>
            </nav>

            <main class="landing-main">
                <header class="hero">
                    <span class="badge fade-in-up" style={entrance(1)}>{"🚧 Under Construction"}</span>
                    <h1 class="hero-title fade-in-up" style={entrance(2)}>
                        {"Stop Fake Users."}<br/>{"Protect Your App."}
                    </h1>
                    <p class="hero-subtitle fade-in-up" style={entrance(3)}>
                        {"The API-first solution to detect disposable emails and bot signups. "}
                        {"Join the waitlist for the Public Beta."}
                    </p>
                    <div class="fade-in-up" style={entrance(4)}>
                        <WaitlistForm notifier={notifier} />
                    </div>
                </header>

                <section class="feature-grid fade-in-up" style={entrance(5)}>
                    {
                        FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <i class={classes!(feature.icon, feature.tint)}></i>
                                <h3>{feature.title}</h3>
                                <p>{feature.blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </section>

                <section class="testimonials fade-in-up" style={entrance(6)}>
                    <h2>{"What early testers say"}</h2>
                    <div class="testimonial-grid">
                        {
                            TESTIMONIALS.iter().map(|t| html! {
                                <figure class="testimonial-card">
                                    <blockquote>{format!("\u{201c}{}\u{201d}", t.quote)}</blockquote>
                                    <figcaption>
                                        <span class="testimonial-name">{t.name}</span>
                                        <span class="testimonial-role">{t.role}</span>
                                    </figcaption>
                                </figure>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="code-preview fade-in-up" style={entrance(7)}>
                    <CodePreview />
                </section>
            </main>

            <footer class="landing-footer fade-in" style={entrance(8)}>
                <p>{"© 2024 TrustShield. Protecting digital integrity, one validation at a time."}</p>
            </footer>

            <Toaster queue={toasts} duration_ms={config::get_toast_duration_ms()} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #020617;
        color: #fff;
        position: relative;
        overflow: hidden;
        font-family: system-ui, -apple-system, sans-serif;
    }
    .grid-background {
        position: absolute;
        inset: 0;
        opacity: 0.02;
        background-image:
            linear-gradient(to right, rgba(255, 255, 255, 0.1) 1px, transparent 1px),
            linear-gradient(to bottom, rgba(255, 255, 255, 0.1) 1px, transparent 1px);
        background-size: 50px 50px;
        pointer-events: none;
    }
    .radial-glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, rgba(37, 99, 235, 0.1), transparent, rgba(79, 70, 229, 0.1));
        pointer-events: none;
    }
    .navbar {
        position: sticky;
        top: 0;
        z-index: 50;
        backdrop-filter: blur(12px);
        background: rgba(2, 6, 23, 0.5);
        border-bottom: 1px solid #1e293b;
    }
    .navbar-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .brand {
        font-weight: 700;
        font-size: 1.25rem;
        letter-spacing: -0.025em;
    }
    .social-links {
        display: flex;
        gap: 1rem;
    }
    .social-links a {
        color: #fff;
        padding: 0.5rem;
        border-radius: 8px;
        transition: background 0.3s ease;
    }
    .social-links a:hover { background: #1e293b; }
    .landing-main {
        max-width: 72rem;
        margin: 0 auto;
        padding: 4rem 1.5rem;
        position: relative;
        z-index: 10;
    }
    .hero {
        text-align: center;
        margin-bottom: 5rem;
    }
    .badge {
        display: inline-block;
        margin-bottom: 1.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.8rem;
        font-weight: 600;
        background: rgba(234, 179, 8, 0.2);
        border: 1px solid rgba(234, 179, 8, 0.3);
        color: #facc15;
    }
    .hero-title {
        font-size: clamp(3rem, 7vw, 4.5rem);
        font-weight: 700;
        letter-spacing: -0.025em;
        margin-bottom: 1.5rem;
        background: linear-gradient(to right, #fff, #9ca3af);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #9ca3af;
        max-width: 42rem;
        margin: 0 auto 2.5rem;
    }
    .feature-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1rem;
        margin-bottom: 5rem;
    }
    .feature-card,
    .testimonial-card {
        background: #0f172a;
        border: 1px solid #1e293b;
        border-radius: 12px;
        padding: 1.5rem;
        transition: border-color 0.3s ease;
    }
    .feature-card:hover,
    .testimonial-card:hover { border-color: rgba(59, 130, 246, 0.5); }
    .feature-card i {
        font-size: 1.5rem;
        margin-bottom: 0.75rem;
    }
    .feature-card h3 {
        font-size: 1.125rem;
        font-weight: 600;
        margin: 0 0 0.5rem;
    }
    .feature-card p {
        color: #9ca3af;
        font-size: 0.875rem;
        margin: 0;
    }
    .tint-blue { color: #60a5fa; }
    .tint-yellow { color: #facc15; }
    .tint-green { color: #4ade80; }
    .testimonials {
        margin-bottom: 5rem;
        text-align: center;
    }
    .testimonials h2 {
        font-size: 1.75rem;
        margin-bottom: 1.5rem;
    }
    .testimonial-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 1rem;
        text-align: left;
    }
    .testimonial-card { margin: 0; }
    .testimonial-card blockquote {
        margin: 0 0 1rem;
        color: #cbd5e1;
    }
    .testimonial-card figcaption {
        display: flex;
        flex-direction: column;
        font-size: 0.85rem;
    }
    .testimonial-role { color: #64748b; }
    .landing-footer {
        border-top: 1px solid #1e293b;
        padding: 2rem 1.5rem;
        margin-top: 5rem;
        text-align: center;
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .fade-in,
    .fade-in-up,
    .fade-in-down {
        opacity: 0;
        animation-duration: 0.5s;
        animation-timing-function: ease-out;
        animation-fill-mode: forwards;
    }
    .fade-in { animation-name: fade-in; }
    .fade-in-up { animation-name: fade-in-up; }
    .fade-in-down {
        animation-name: fade-in-down;
        animation-duration: 0.3s;
    }
    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes fade-in-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fade-in-down {
        from { opacity: 0; transform: translateY(-20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (prefers-reduced-motion: reduce) {
        .fade-in,
        .fade-in-up,
        .fade-in-down {
            animation: none;
            opacity: 1;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_delays_are_staggered() {
        assert_eq!(entrance(0), "animation-delay: 0ms;");
        assert_eq!(entrance(3), "animation-delay: 300ms;");
    }

    #[test]
    fn every_feature_card_has_an_icon_and_copy() {
        for feature in &FEATURES {
            assert!(feature.icon.starts_with("fas "), "{}", feature.title);
            assert!(!feature.blurb.is_empty());
        }
    }
}

use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::book_cover::BookCover;
use crate::components::icons::Icon;
use crate::components::opt_in_form::OptInForm;

const HERO_POINTS: &[&str] = &["30+ Pages of Strategy", "Safety Protocols", "Drills Guide"];

const PAIN_POINTS: &[(Icon, &str, &str, &str)] = &[
    (
        Icon::Clock,
        "tone-red",
        "The Plateau",
        "You've been stuck at the same rating for 8 months despite playing constantly.",
    ),
    (
        Icon::TrendingUp,
        "tone-orange flipped",
        "The Speed Trap",
        "You try to hit harder to win, but just end up popping balls up for your opponents.",
    ),
    (
        Icon::ShieldAlert,
        "tone-blue",
        "The Fear",
        "You worry about your knees or falling backwards, so you hesitate in the transition zone.",
    ),
];

const FEATURE_POINTS: &[(Icon, &str, &str)] = &[
    (
        Icon::Brain,
        "The Myelin Method",
        "Why 'just playing' reinforces bad habits, and the 10-minute drill rule that actually rewires your brain for success.",
    ),
    (
        Icon::ShieldAlert,
        "The Longevity Protocol",
        "The single most dangerous movement for older players (backpedaling) and the 'Turn and Run' technique that saves hospital visits.",
    ),
    (
        Icon::Target,
        "The 4.5 Targeting Hierarchy",
        "Stop guessing. Learn exactly where to aim based on priority: Feet, Weak Side, Middle, then Movement Zones.",
    ),
    (
        Icon::TrendingUp,
        "Beat the Bangers",
        "How to use the 'Reset Shot' to neutralize power players who try to overwhelm you with speed.",
    ),
];

const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    (
        "I've been stuck at 3.5 for two years. The section on 'Intent' completely changed how I look at the court. I'm finally winning points against the 20-year-olds.",
        "RT",
        "Robert T.",
        "Age 62, Florida",
    ),
    (
        "The chapter on safety alone is worth it. I used to be terrified of lobs. The 'Turn and Run' technique gave me my confidence back.",
        "SM",
        "Susan M.",
        "Age 55, Arizona",
    ),
];

#[derive(Properties, PartialEq)]
pub struct FeaturePointProps {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

#[function_component(FeaturePoint)]
pub fn feature_point(props: &FeaturePointProps) -> Html {
    html! {
        <div class="feature-point">
            <div class="feature-point-icon">
                { props.icon.render("feature-icon") }
            </div>
            <div>
                <h4>{props.title}</h4>
                <p>{props.text}</p>
            </div>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">
                        <span class="badge-dot"></span>
                        <span>{"For Players Aged 50+"}</span>
                    </div>
                    <h1>
                        {"You Play 4x a Week."}
                        <br />
                        <span class="accent">{"Why Aren't You Getting Better?"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Stop reinforcing bad habits. Discover the science-backed \"Myelin Method\" to break your 3.5 plateau, protect your aging joints, and finally master the soft game."}
                    </p>
                    <div class="hero-points">
                        { HERO_POINTS.iter().map(|point| {
                            html! {
                                <div class="hero-point">
                                    { Icon::CheckCircle.render("hero-point-icon") }
                                    <span>{*point}</span>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
                <div class="hero-side">
                    <div class="hero-book">
                        <BookCover />
                    </div>
                    <OptInForm id="hero-form" />
                </div>
            </div>
        </header>
    }
}

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <section class="problem">
            <h2>{"Does this sound like your game?"}</h2>
            <div class="problem-grid">
                { PAIN_POINTS.iter().map(|(icon, tone, title, text)| {
                    html! {
                        <div class="problem-card">
                            <div class={classes!("problem-icon", *tone)}>
                                { icon.render("pain-icon") }
                            </div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
            <div class="problem-quote">
                <p class="quote-text">
                    {"\"You're not doing anything wrong. You're just not doing anything "}
                    <span class="accent-lime">{"right"}</span>
                    {" either. You're playing on autopilot.\""}
                </p>
                <p class="quote-source">{"— Insight from The Road to 4.5"}</p>
            </div>
        </section>
    }
}

#[function_component(SneakPeek)]
fn sneak_peek() -> Html {
    html! {
        <section class="sneak-peek">
            <div class="sneak-peek-grid">
                <div class="sneak-peek-book">
                    <BookCover />
                </div>
                <div>
                    <h2>
                        {"It's Not Magic. It's "}
                        <span class="accent-lime">{"Biology & Strategy."}</span>
                    </h2>
                    <p class="sneak-peek-intro">
                        {"This isn't another generic \"hit the ball over the net\" guide. It is a specific manual for the 50+ body and brain."}
                    </p>
                    <div class="feature-points">
                        { FEATURE_POINTS.iter().map(|(icon, title, text)| {
                            html! { <FeaturePoint icon={*icon} title={*title} text={*text} /> }
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <h2>{"Why Players Love This Guide"}</h2>
            <div class="testimonial-grid">
                { TESTIMONIALS.iter().map(|(quote, initials, reviewer, details)| {
                    html! {
                        <div class="testimonial-card">
                            <div class="stars">{"★★★★★"}</div>
                            <p class="testimonial-quote">{format!("\"{}\"", quote)}</p>
                            <div class="reviewer">
                                <div class="reviewer-avatar">{*initials}</div>
                                <div>
                                    <p class="reviewer-name">{*reviewer}</p>
                                    <p class="reviewer-details">{*details}</p>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section id="download" class="final-cta">
            <h2>{"Start Your Road to 4.5 Today"}</h2>
            <p>
                {"It's free. It's instant. And it might just be the thing that keeps you on the court for the next 20 years."}
            </p>
            <div class="final-cta-form">
                <OptInForm id="footer-form" />
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <p>{format!("© {} PB Mastery 50+. All rights reserved.", year)}</p>
            <div class="footer-links">
                <a href="#">{"Privacy Policy"}</a>
                <a href="#">{"Terms of Service"}</a>
                <a href="#">{"Contact"}</a>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                    line-height: 1.5;
                }
                .landing-page h1, .landing-page h2, .landing-page h3, .landing-page h4 {
                    margin: 0;
                    line-height: 1.15;
                }
                .accent { color: #15803d; }
                .accent-lime { color: #a3e635; font-weight: 700; font-style: normal; }

                /* Hero */
                .hero {
                    background: #f8fafc;
                    padding: 4rem 1.5rem 6rem;
                    overflow: hidden;
                }
                .hero-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: #fef9c3;
                    border: 1px solid #fde68a;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #854d0e;
                }
                .badge-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #eab308;
                    animation: pulse 2s infinite;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                .hero-copy h1 {
                    font-size: 3rem;
                    font-weight: 800;
                    margin: 1.5rem 0;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #4b5563;
                    max-width: 32rem;
                }
                .hero-points {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 1.5rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #6b7280;
                }
                .hero-point {
                    display: flex;
                    align-items: center;
                    gap: 0.3rem;
                }
                .hero-point-icon {
                    width: 16px;
                    height: 16px;
                    color: #15803d;
                }
                .hero-side { position: relative; }
                .hero-book { display: none; }

                /* Book cover */
                .book-cover {
                    width: 270px;
                    min-height: 380px;
                    margin: 0 auto;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    background: linear-gradient(135deg, #15803d, #14532d);
                    border-left: 8px solid #1f2937;
                    border-radius: 4px 16px 16px 4px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
                    color: #fff;
                }
                .book-kicker-row {
                    width: 100%;
                    padding-bottom: 1rem;
                    margin-bottom: 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                }
                .book-kicker {
                    margin: 0;
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #a3e635;
                }
                .book-title {
                    margin: 0;
                    font-size: 1.8rem;
                    font-weight: 800;
                }
                .book-rating {
                    display: block;
                    margin-top: 0.5rem;
                    font-size: 3rem;
                    color: #a3e635;
                }
                .book-quote {
                    margin: auto 0;
                    font-size: 0.85rem;
                    font-style: italic;
                    color: rgba(255, 255, 255, 0.9);
                }
                .book-method-row {
                    width: 100%;
                    margin-top: auto;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.7rem;
                    font-weight: 600;
                    text-transform: uppercase;
                }
                .book-method-icon {
                    width: 20px;
                    height: 20px;
                    color: #a3e635;
                }

                /* Opt-in form */
                .opt-in {
                    background: #fff;
                    border-radius: 16px;
                    border-top: 4px solid #15803d;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                    padding: 2rem;
                }
                .opt-in h3 {
                    font-size: 1.5rem;
                    text-align: center;
                    margin-bottom: 0.5rem;
                }
                .opt-in-lead-in {
                    text-align: center;
                    font-size: 0.9rem;
                    color: #4b5563;
                    margin: 0 0 1.5rem;
                }
                .opt-in form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .opt-in-field { position: relative; }
                .field-icon {
                    position: absolute;
                    left: 12px;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 20px;
                    height: 20px;
                    color: #9ca3af;
                    pointer-events: none;
                }
                .opt-in input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 1rem 1rem 1rem 2.6rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    background: #f9fafb;
                    font-size: 1rem;
                    color: #111827;
                    outline: none;
                }
                .opt-in input:focus {
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #15803d;
                }
                .opt-in button[type="submit"] {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: #15803d;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    box-shadow: 0 10px 20px rgba(21, 128, 61, 0.25);
                    transition: background 0.2s, transform 0.2s;
                }
                .opt-in button[type="submit"]:hover { background: #166534; transform: translateY(-2px); }
                .opt-in button[type="submit"]:disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                    transform: none;
                }
                .button-icon { width: 20px; height: 20px; }
                .opt-in-footnote {
                    margin: 0;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #9ca3af;
                }
                .opt-in-success {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-top: 4px solid #15803d;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    animation: fade-in 0.4s ease-out;
                }
                @keyframes fade-in {
                    from { opacity: 0; transform: translateY(8px); }
                    to { opacity: 1; transform: none; }
                }
                .success-badge {
                    width: 64px;
                    height: 64px;
                    margin-bottom: 1rem;
                    border-radius: 50%;
                    background: #dcfce7;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .success-icon {
                    width: 32px;
                    height: 32px;
                    color: #16a34a;
                }
                .opt-in-success p { color: #4b5563; margin: 0.5rem 0 1.5rem; }
                .opt-in-reset {
                    border: none;
                    background: none;
                    color: #15803d;
                    font-weight: 600;
                    font-size: 0.9rem;
                    cursor: pointer;
                }
                .opt-in-reset:hover { text-decoration: underline; }

                /* Problem section */
                .problem {
                    padding: 5rem 1.5rem;
                    max-width: 900px;
                    margin: 0 auto;
                    text-align: center;
                }
                .problem h2 { font-size: 2.25rem; margin-bottom: 2rem; }
                .problem-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .problem-card {
                    padding: 1.5rem;
                    background: #f9fafb;
                    border: 1px solid #f3f4f6;
                    border-radius: 12px;
                    transition: box-shadow 0.2s;
                }
                .problem-card:hover { box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08); }
                .problem-card h3 { font-size: 1.1rem; margin: 1rem 0 0.5rem; }
                .problem-card p { font-size: 0.9rem; color: #4b5563; margin: 0; }
                .problem-icon {
                    width: 48px;
                    height: 48px;
                    margin: 0 auto;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .problem-icon.tone-red { background: #fee2e2; color: #dc2626; }
                .problem-icon.tone-orange { background: #ffedd5; color: #ea580c; }
                .problem-icon.tone-blue { background: #dbeafe; color: #2563eb; }
                .problem-icon.flipped .pain-icon { transform: rotate(180deg); }
                .pain-icon { width: 24px; height: 24px; }
                .problem-quote {
                    margin-top: 3rem;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #1f2937;
                    color: #fff;
                }
                .quote-text {
                    font-size: 1.35rem;
                    font-family: Georgia, "Times New Roman", serif;
                    font-style: italic;
                    margin: 0 0 1rem;
                }
                .quote-source {
                    margin: 0;
                    font-size: 0.8rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #9ca3af;
                }

                /* Sneak peek */
                .sneak-peek {
                    padding: 5rem 1.5rem;
                    background: #111827;
                    color: #fff;
                    background-image: radial-gradient(rgba(255, 255, 255, 0.1) 1px, transparent 1px);
                    background-size: 30px 30px;
                }
                .sneak-peek-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .sneak-peek h2 { font-size: 2.25rem; margin-bottom: 1.5rem; }
                .sneak-peek-intro { color: #d1d5db; font-size: 1.1rem; margin-bottom: 2rem; }
                .feature-points { display: flex; flex-direction: column; gap: 1.5rem; }
                .feature-point { display: flex; gap: 1rem; align-items: flex-start; }
                .feature-point h4 { font-size: 1.1rem; margin-bottom: 0.25rem; }
                .feature-point p { margin: 0; font-size: 0.95rem; color: #d1d5db; }
                .feature-point-icon {
                    flex-shrink: 0;
                    width: 48px;
                    height: 48px;
                    margin-top: 0.25rem;
                    border-radius: 50%;
                    background: #dcfce7;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .feature-icon { width: 24px; height: 24px; color: #15803d; }

                /* Testimonials */
                .testimonials {
                    padding: 5rem 1.5rem;
                    background: #f0fdf4;
                }
                .testimonials h2 {
                    text-align: center;
                    font-size: 1.9rem;
                    color: #1f2937;
                    margin-bottom: 3rem;
                }
                .testimonial-grid {
                    max-width: 900px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .testimonial-card {
                    background: #fff;
                    padding: 2rem;
                    border-radius: 12px;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                }
                .stars { color: #facc15; letter-spacing: 0.2em; margin-bottom: 1rem; }
                .testimonial-quote {
                    font-style: italic;
                    color: #374151;
                    margin: 0 0 1.5rem;
                }
                .reviewer { display: flex; align-items: center; gap: 0.75rem; }
                .reviewer-avatar {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #bbf7d0;
                    color: #14532d;
                    font-weight: 700;
                    font-size: 0.85rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .reviewer-name { margin: 0; font-weight: 700; }
                .reviewer-details { margin: 0; font-size: 0.75rem; color: #6b7280; }

                /* Final CTA */
                .final-cta {
                    padding: 5rem 1.5rem;
                    text-align: center;
                }
                .final-cta h2 { font-size: 2.5rem; margin-bottom: 1.5rem; }
                .final-cta > p {
                    font-size: 1.2rem;
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }
                .final-cta-form { max-width: 28rem; margin: 0 auto; text-align: left; }

                /* Footer */
                .footer {
                    padding: 3rem 1.5rem;
                    background: #111827;
                    color: #9ca3af;
                    text-align: center;
                    font-size: 0.85rem;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 1rem;
                }
                .footer-links a { color: #9ca3af; text-decoration: none; }
                .footer-links a:hover { color: #fff; }

                @media (max-width: 860px) {
                    .hero-grid, .sneak-peek-grid, .testimonial-grid { grid-template-columns: 1fr; }
                    .problem-grid { grid-template-columns: 1fr; }
                    .hero-copy h1 { font-size: 2.2rem; }
                    .hero-book { display: block; margin-bottom: 2rem; }
                    .sneak-peek-book { margin-bottom: 1rem; }
                }
                "#}
            </style>
            <Hero />
            <ProblemSection />
            <SneakPeek />
            <Testimonials />
            <FinalCta />
            <Footer />
        </div>
    }
}

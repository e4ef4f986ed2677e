use yew::prelude::*;

/// The closed set of line icons the page uses. Drawn inline as SVG strokes
/// so the bundle needs no icon font or extra asset fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    TrendingUp,
    CheckCircle,
    Brain,
    ShieldAlert,
    Target,
    Clock,
    ChevronRight,
    User,
    Mail,
}

impl Icon {
    pub fn render(self, class: &'static str) -> Html {
        html! {
            <svg
                class={class}
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { self.shape() }
            </svg>
        }
    }

    fn shape(self) -> Html {
        match self {
            Icon::TrendingUp => html! {
                <>
                    <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
                    <polyline points="16 7 22 7 22 13" />
                </>
            },
            Icon::CheckCircle => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="m9 12 2 2 4-4" />
                </>
            },
            Icon::Brain => html! {
                <>
                    <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" />
                    <path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" />
                </>
            },
            Icon::ShieldAlert => html! {
                <>
                    <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1 1 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
                    <line x1="12" x2="12" y1="8" y2="12" />
                    <line x1="12" x2="12.01" y1="16" y2="16" />
                </>
            },
            Icon::Target => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <circle cx="12" cy="12" r="6" />
                    <circle cx="12" cy="12" r="2" />
                </>
            },
            Icon::Clock => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <polyline points="12 6 12 12 16 14" />
                </>
            },
            Icon::ChevronRight => html! {
                <polyline points="9 18 15 12 9 6" />
            },
            Icon::User => html! {
                <>
                    <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
                    <circle cx="12" cy="7" r="4" />
                </>
            },
            Icon::Mail => html! {
                <>
                    <rect x="2" y="4" width="20" height="16" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
        }
    }
}

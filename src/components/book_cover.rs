use yew::prelude::*;

use crate::components::icons::Icon;

/// The stylized cover of the guide, shown in the hero and the sneak-peek
/// section.
#[function_component(BookCover)]
pub fn book_cover() -> Html {
    html! {
        <div class="book-cover">
            <div class="book-kicker-row">
                <p class="book-kicker">{"The Official Guide"}</p>
            </div>
            <p class="book-title">
                {"The Road to "}
                <span class="book-rating">{"4.5"}</span>
            </p>
            <p class="book-quote">
                {"\"A Smart, Sustainable Pickleball Guide for Players Over 50\""}
            </p>
            <div class="book-method-row">
                { Icon::Brain.render("book-method-icon") }
                <span>{"The Myelin Method"}</span>
            </div>
        </div>
    }
}

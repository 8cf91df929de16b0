//! Server-rendered HTML pages.
//!
//! Each page name selects a template. Lesson templates receive the navigation
//! context for their place in the curriculum; the simulator and black hole
//! pages are not lessons and render without one. Names with no template
//! render nothing and the caller answers 404.

mod lessons;

use maud::{html, Markup, DOCTYPE};

use crate::curriculum::{self, NavigationContext};

/// Data bound into a page template.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub navigation: NavigationContext,
    /// The requesting user's rating of this page's lesson, if any.
    pub rating: Option<u8>,
}

const SIMULATOR_SCRIPT: &str = "/static/physics/scripts/simulator.js";
const BLACKHOLE_SCRIPT: &str = "/static/physics/scripts/blackhole.js";

/// Render the named page, or `None` if no template exists for it.
pub fn render(page_name: &str, context: &PageContext) -> Option<Markup> {
    let (title, body) = match page_name {
        "simulator" => ("Simulator", lessons::simulator()),
        "blackhole" => ("Black Hole", lessons::blackhole()),
        _ => {
            let body = lessons::body(page_name)?;
            (curriculum::title(page_name)?, body)
        }
    };

    Some(layout(
        title,
        html! {
            (table_of_contents(page_name, &context.navigation))
            article.lesson {
                h1 { (title) }
                @if let (Some(page_index), Some(lessons)) =
                    (context.navigation.page_index, context.navigation.lessons)
                {
                    p.progress { "Lesson " (page_index) " of " (lessons.len()) }
                }
                (body)
                @if let Some(rating) = context.rating {
                    p.rating { "Your rating: " (rating) " / 5" }
                }
            }
            (pager(&context.navigation))
        },
    ))
}

/// Landing page.
pub fn index() -> Markup {
    layout(
        "Physics",
        html! {
            section.hero {
                h1 { "Learn physics by playing with it" }
                p {
                    "Short lessons on the forces that move everyday objects, each "
                    "with a small simulation you can change and rerun."
                }
                @if let Some(first) = curriculum::lesson_at(1) {
                    a.button href={ "/" (first) } { "Start the first lesson" }
                }
                " "
                a.button href="/simulator" { "Open the simulator" }
            }
        },
    )
}

/// Body for a page name with no template.
pub fn not_found(page_name: &str) -> Markup {
    layout(
        "Page not found",
        html! {
            h1 { "Page not found" }
            p { "There is no page called \"" (page_name) "\"." }
            p { a href="/" { "Back to the start" } }
        },
    )
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Physics" }
            }
            body {
                header {
                    nav id="navbar" {
                        a href="/" { "Physics" } " "
                        a href="/simulator" { "Simulator" } " "
                        a href="/blackhole" { "Black hole" }
                    }
                }
                main { (content) }
            }
        }
    }
}

fn table_of_contents(current: &str, navigation: &NavigationContext) -> Markup {
    html! {
        @if let Some(lessons) = navigation.lessons {
            nav.contents {
                ol {
                    @for lesson in lessons {
                        li.current[*lesson == current] {
                            a href={ "/" (lesson) } { (curriculum::title(lesson).unwrap_or(*lesson)) }
                        }
                    }
                }
            }
        }
    }
}

fn pager(navigation: &NavigationContext) -> Markup {
    html! {
        @if navigation.prev.is_some() || navigation.next.is_some() {
            nav.pager {
                @if let Some(prev) = navigation.prev {
                    a.prev rel="prev" href={ "/" (prev) } { "← " (curriculum::title(prev).unwrap_or(prev)) }
                }
                @if let Some(next) = navigation.next {
                    a.next rel="next" href={ "/" (next) } { (curriculum::title(next).unwrap_or(next)) " →" }
                }
            }
        }
    }
}

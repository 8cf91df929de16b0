//! The lesson curriculum and navigation within it.
//!
//! The curriculum is a fixed, ordered list of lesson identifiers. Each
//! identifier doubles as the name of the page template for that lesson, and
//! the order defines which lesson comes before and after another.

use serde::Serialize;

/// Lesson identifiers in teaching order.
pub const CURRICULUM: &[&str] = &[
    "gravity",
    "newtons-law",
    "drag-and-friction",
    "conservation",
    "buoyancy",
];

/// Where a known lesson sits in the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationResult {
    pub lessons: &'static [&'static str],
    /// 1-based position of the lesson.
    pub page_index: usize,
    pub next: Option<&'static str>,
    pub prev: Option<&'static str>,
}

/// Outcome of looking up a page name in the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Known(NavigationResult),
    /// The page name is not a lesson. Pages outside the curriculum still
    /// render, just without navigation.
    Unknown,
}

impl Navigation {
    pub fn is_known(&self) -> bool {
        matches!(self, Navigation::Known(_))
    }

    pub fn result(&self) -> Option<&NavigationResult> {
        match self {
            Navigation::Known(result) => Some(result),
            Navigation::Unknown => None,
        }
    }

    /// Flatten into the context bound to page templates and API responses.
    pub fn context(&self) -> NavigationContext {
        match self {
            Navigation::Known(result) => NavigationContext {
                lessons: Some(result.lessons),
                page_index: Some(result.page_index),
                next: result.next,
                prev: result.prev,
            },
            Navigation::Unknown => NavigationContext::default(),
        }
    }
}

/// Navigation data keyed the way templates consume it.
///
/// Every key is omitted for pages outside the curriculum, so an unknown page
/// serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'static str>,
}

impl NavigationContext {
    pub fn is_empty(&self) -> bool {
        *self == NavigationContext::default()
    }
}

/// Compute navigation for the requested page.
pub fn navigate(page_name: &str) -> Navigation {
    let Some(index) = CURRICULUM.iter().position(|&lesson| lesson == page_name) else {
        return Navigation::Unknown;
    };

    Navigation::Known(NavigationResult {
        lessons: CURRICULUM,
        page_index: index + 1,
        next: CURRICULUM.get(index + 1).copied(),
        prev: index.checked_sub(1).map(|i| CURRICULUM[i]),
    })
}

/// 1-based position of a lesson, if it is part of the curriculum.
pub fn position(lesson: &str) -> Option<usize> {
    navigate(lesson).result().map(|result| result.page_index)
}

pub fn is_lesson(name: &str) -> bool {
    CURRICULUM.contains(&name)
}

/// Lesson shown on the given 1-based page. One lesson per page.
pub fn lesson_at(page_index: usize) -> Option<&'static str> {
    page_index
        .checked_sub(1)
        .and_then(|i| CURRICULUM.get(i))
        .copied()
}

pub fn page_count() -> usize {
    CURRICULUM.len()
}

/// Display title of a curriculum lesson.
pub fn title(lesson: &str) -> Option<&'static str> {
    let title = match lesson {
        "gravity" => "Gravity",
        "newtons-law" => "Newton's Laws of Motion",
        "drag-and-friction" => "Drag and Friction",
        "conservation" => "Conservation of Energy and Momentum",
        "buoyancy" => "Buoyancy",
        _ => return None,
    };
    Some(title)
}

/// Render the curriculum as a numbered outline, marking `current` if given.
///
/// Example output:
/// ```text
///   1. gravity
/// > 2. newtons-law
///   3. drag-and-friction
/// ```
pub fn render_outline(current: Option<&str>) -> String {
    let mut output = String::new();
    for (i, lesson) in CURRICULUM.iter().enumerate() {
        let marker = if current == Some(*lesson) { '>' } else { ' ' };
        output.push_str(&format!("{} {}. {}\n", marker, i + 1, lesson));
    }
    output
}

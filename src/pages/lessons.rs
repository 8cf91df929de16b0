//! Lesson content.

use maud::{html, Markup};

use super::{BLACKHOLE_SCRIPT, SIMULATOR_SCRIPT};

pub(super) fn body(lesson: &str) -> Option<Markup> {
    let body = match lesson {
        "gravity" => gravity(),
        "newtons-law" => newtons_law(),
        "drag-and-friction" => drag_and_friction(),
        "conservation" => conservation(),
        "buoyancy" => buoyancy(),
        _ => return None,
    };
    Some(body)
}

/// Full-size simulator page.
pub(super) fn simulator() -> Markup {
    html! {
        p {
            "Pick a planet, a fluid and a material, then drop objects and watch "
            "gravity, drag and buoyancy act on them together."
        }
        (canvas())
    }
}

/// Black hole demo. The script sizes the canvas to the window below `#navbar`.
pub(super) fn blackhole() -> Markup {
    html! {
        canvas id="canvas" {}
        script type="module" src=(BLACKHOLE_SCRIPT) {}
    }
}

/// Embedded simulator. The script switches to its reduced mode on lesson pages.
fn canvas() -> Markup {
    html! {
        canvas id="simulator-canvas" width="800" height="450" {}
        script src=(SIMULATOR_SCRIPT) {}
    }
}

fn gravity() -> Markup {
    html! {
        p {
            "Gravity is the attraction between any two masses. Near the surface of "
            "a planet it pulls every object towards the centre with the same "
            "acceleration, whatever the object's mass."
        }
        p.formula { "F = G m₁ m₂ / r²" }
        p {
            "On Earth that acceleration is about 9.81 m/s². On the Moon it is "
            "1.62 m/s² and on Jupiter 24.79 m/s². Change the planet in the "
            "simulation below and compare how long a ball takes to land."
        }
        (canvas())
    }
}

fn newtons_law() -> Markup {
    html! {
        ol.laws {
            li { "An object stays at rest or keeps moving in a straight line at constant speed unless a net force acts on it." }
            li { "The net force on an object equals its mass times its acceleration." }
            li { "For every force one object exerts on another, the second exerts an equal and opposite force on the first." }
        }
        p.formula { "F = m a" }
        p {
            "The second law ties the other lessons together: every force you meet "
            "later, from drag to buoyancy, changes motion only through it."
        }
        (canvas())
    }
}

fn drag_and_friction() -> Markup {
    html! {
        p {
            "Friction opposes sliding between two surfaces and is roughly "
            "proportional to how hard they are pressed together."
        }
        p.formula { "F = μ N" }
        p {
            "Drag opposes motion through a fluid such as air or water. It grows "
            "with the square of speed, so a falling object speeds up until drag "
            "balances its weight and it reaches terminal velocity."
        }
        p.formula { "F = ½ ρ v² C A" }
        (canvas())
    }
}

fn conservation() -> Markup {
    html! {
        p {
            "In a closed system energy is never created or destroyed, only moved "
            "between forms. A ball dropped from a height turns potential energy "
            "into kinetic energy as it falls."
        }
        p.formula { "m g h = ½ m v²" }
        p {
            "Momentum is conserved in every collision. Kinetic energy is conserved "
            "only when the collision is perfectly elastic; otherwise some becomes "
            "heat and sound, and the ball bounces lower each time."
        }
        (canvas())
    }
}

fn buoyancy() -> Markup {
    html! {
        p {
            "A fluid pushes up on anything submerged in it with a force equal to "
            "the weight of the fluid displaced. This is Archimedes' principle."
        }
        p.formula { "F = ρ V g" }
        p {
            "Objects less dense than the fluid float: cork (240 kg/m³) and ice "
            "(900 kg/m³) float in water (997 kg/m³), while steel (7850 kg/m³) sinks."
        }
        (canvas())
    }
}

use maud::{html, Markup, DOCTYPE};

use crate::models::QuizQuestion;

const TFJS: &str = "https://cdn.jsdelivr.net/npm/@tensorflow/tfjs@1.3.1/dist/tf.min.js";
const TEACHABLE_MACHINE: &str =
    "https://cdn.jsdelivr.net/npm/@teachablemachine/image@0.8/dist/teachablemachine-image.min.js";
const CONFETTI: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";
const MEDIAPIPE_SCRIPTS: [&str; 3] = [
    "https://cdn.jsdelivr.net/npm/@mediapipe/camera_utils/camera_utils.js",
    "https://cdn.jsdelivr.net/npm/@mediapipe/drawing_utils/drawing_utils.js",
    "https://cdn.jsdelivr.net/npm/@mediapipe/hands/hands.js",
];

/// Helpers every page gets, loaded before the page's own scripts.
pub const SHARED_SCRIPTS: [&str; 2] = [CONFETTI, "/static/js/app.js"];

/// Navigation entries shown on the index page: (path, label).
pub const GAMES: [(&str, &str); 5] = [
    ("/math", "Math Game"),
    ("/az-sign", "A-Z Sign Language"),
    ("/puzzle", "Puzzle"),
    ("/grammar", "Grammar"),
    ("/color_quiz", "Color Quiz"),
];

fn layout(title: &str, body: Markup, scripts: &[&str]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                header {
                    a href="/" { "Home" }
                }
                main { (body) }
                @for src in SHARED_SCRIPTS.iter().chain(scripts) {
                    script src=(src) {}
                }
            }
        }
    }
}

pub fn index() -> Markup {
    layout(
        "Learning Games",
        html! {
            h1 { "Learning Games" }
            ul.games {
                @for (href, label) in GAMES {
                    li { a href=(href) { (label) } }
                }
            }
        },
        &[],
    )
}

/// Placeholder page for a game without a client script yet.
pub fn game_shell(title: &str, root_id: &str) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            div id=(root_id) {}
        },
        &[],
    )
}

pub fn math() -> Markup {
    let body = html! {
        h1 { "Math Game" }
        p #question {}
        div #optionsContainer {}
        p #feedbackBar {}
        button #gestureToggle type="button" aria-pressed="false" { "✋ Enable Gesture Mode" }
        div #cameraWrap style="display:none" {
            div #webcamHolder {}
        }
    };
    layout(
        "Math Game",
        body,
        &[TFJS, TEACHABLE_MACHINE, "/static/js/math-game.js"],
    )
}

pub fn az_sign() -> Markup {
    let body = html! {
        h1 { "A-Z Sign Language" }
        p #letter-display {}
        div #alphabet-grid {}
        p #feedback {}
        label {
            input #gesture-toggle type="checkbox";
            " Use camera"
        }
        label {
            input #teach-toggle type="checkbox";
            " Teach mode"
        }
        p #model-warning {}
        div #webcam-container style="display:none" {
            video #webcam autoplay playsinline {}
            canvas #output_canvas width="640" height="480" {}
        }
    };

    let mut scripts = vec![TFJS];
    scripts.extend(MEDIAPIPE_SCRIPTS);
    scripts.extend(["/static/js/mediapipe-handler.js", "/static/js/az-model.js"]);
    layout("A-Z Sign Language", body, &scripts)
}

pub fn puzzle() -> Markup {
    game_shell("Puzzle", "puzzle-game")
}

pub fn grammar() -> Markup {
    game_shell("Grammar", "grammar-game")
}

/// Color quiz page. Without a question the client script fetches one.
pub fn color_quiz(question: Option<&QuizQuestion>) -> Markup {
    let body = html! {
        h1 { "Color Quiz" }
        @if let Some(q) = question {
            section #color-quiz data-question=(q.question) data-correct=(q.answer) {
                p #color-question { (q.question) }
                div #answer-buttons {
                    @for option in &q.options {
                        button.answer-btn type="button" data-answer=(option) { (option) }
                    }
                }
                p #color-result {}
                a #next-btn href="/color_quiz" { "Next question" }
            }
        } @else {
            p #color-question {}
            div #answer-buttons {}
            p #color-result {}
            button #next-btn type="button" { "Next" }
        }
        label {
            input #gesture-toggle type="checkbox";
            " Use hand gestures"
        }
        video #webcam autoplay playsinline style="display:none" {}
        p #gesture-result {}
    };

    layout(
        "Color Quiz",
        body,
        &[TFJS, TEACHABLE_MACHINE, "/static/js/color-game.js"],
    )
}

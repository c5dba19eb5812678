use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::{HomeView, LessonPage};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lesson/:lesson", LessonPage)] Lesson { lesson: String },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.config().course_name.clone();

    rsx! {
        div { class: "container",
            header { class: "header",
                h1 { "Learn {course}" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::pages::{AboutPage, CommunityPage, ContactPage, HomePage, NotFoundPage, TracksPage};
use crate::components::{LoginPage, RegistrationPanel};
use crate::SiteLayout;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    // Every page shares the header/footer shell
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/about")]
        About {},

        #[route("/tracks")]
        Tracks {},

        #[route("/contact")]
        Contact {},

        #[route("/register")]
        Register {},

        #[route("/login")]
        Login {},

        #[route("/community")]
        Community {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

// Route handler components
#[component]
fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
fn About() -> Element {
    rsx! { AboutPage {} }
}

#[component]
fn Tracks() -> Element {
    rsx! { TracksPage {} }
}

#[component]
fn Contact() -> Element {
    rsx! { ContactPage {} }
}

#[component]
fn Register() -> Element {
    rsx! {
        div { class: "flex justify-center items-start min-h-screen p-4 pt-10",
            RegistrationPanel {}
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
fn Community() -> Element {
    rsx! { CommunityPage {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { NotFoundPage { path } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Tracks {}.to_string(), "/tracks");
        assert_eq!(Route::Register {}.to_string(), "/register");
        assert_eq!(Route::Community {}.to_string(), "/community");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = Route::from_str("/no/such/page").unwrap();
        assert_eq!(
            route,
            Route::NotFound { segments: vec!["no".to_string(), "such".to_string(), "page".to_string()] }
        );
    }

    #[test]
    fn test_known_path_parses() {
        assert_eq!(Route::from_str("/login").unwrap(), Route::Login {});
    }
}

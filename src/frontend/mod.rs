pub mod components;
pub mod pages;
pub mod routes;
pub mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use components::{Footer, Navbar, StructuredData};
use pages::{BlogPostPage, CaseStudyPage, HomePage, NotFoundPage, ResumePage};
use routes::Page;
use theme::{BrowserThemeStore, ThemeController};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    ThemeController::install(BrowserThemeStore);

    view! {
        <Stylesheet id="leptos" href="/pkg/devfolio.css"/>
        <Title text="Azhar Ali Shah — Professional Portfolio"/>
        <Meta
            name="description"
            content="Professional portfolio of Azhar Ali Shah - Software Engineer, UI/UX Designer, and Cybersecurity Expert. Showcasing projects, skills, and experience."
        />
        <Meta
            name="keywords"
            content="software engineer, portfolio, ui/ux designer, cybersecurity, blockchain developer, react native, web development"
        />
        <Meta name="author" content="Azhar Ali Shah"/>
        <Meta name="theme-color" content="#7f5af0"/>
        <StructuredData/>

        <Router>
            <a href="#main-content" class="skip-link">"Skip to main content"</a>
            <div class="page-bg">
                <Navbar/>
                <main id="main-content" class="container">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/*any") view=PageResolver/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Resolves the current location against the routing table; exactly one
/// top-level view renders per path.
#[component]
fn PageResolver() -> impl IntoView {
    let location = use_location();

    view! {
        {move || match Page::recognize(&location.pathname.get()) {
            Page::Home => view! { <HomePage/> }.into_any(),
            Page::Resume => view! { <ResumePage/> }.into_any(),
            Page::CaseStudy(id) => view! { <CaseStudyPage id=id/> }.into_any(),
            Page::BlogPost(slug) => view! { <BlogPostPage slug=slug/> }.into_any(),
            Page::NotFound => view! { <NotFoundPage/> }.into_any(),
        }}
    }
}
